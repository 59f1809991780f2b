use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::LoadError;

/// Extracts the text of every page, in page order, each followed by a newline.
pub fn extract_pdf_text(path: &Path) -> Result<String, LoadError> {
    let mut doc = Document::load(path)?;
    if doc.is_encrypted() {
        // Owner-password-only files open with an empty user password.
        if let Err(err) = doc.decrypt("") {
            debug!(path = %path.display(), error = %err, "empty password did not decrypt pdf");
        }
    }

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        let page_text = doc.extract_text(&[*page_number])?;
        // lopdf ends each page with its own newline.
        let page_text = page_text.trim_end_matches('\n');
        if !page_text.is_empty() {
            text.push_str(page_text);
            text.push('\n');
        }
    }
    Ok(text)
}
