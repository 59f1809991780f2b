use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::chunk_text::chunk_text;
use crate::error::{LoadError, RagError};
use crate::read_pdf::extract_pdf_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DocumentKind {
    Text,
    Pdf,
}

#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: LoadError,
}

/// Chunks gathered from a documents folder, plus the files that could not be read.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub chunks: Vec<String>,
    pub skipped: Vec<SkippedFile>,
}

/// Reads every `.txt` and `.pdf` file directly inside `folder` (no recursion) and
/// chunks it. A file that fails to load is recorded in `skipped` and the rest continue.
pub fn load_documents(
    folder: &Path,
    chunk_size: usize,
    overlap: usize,
) -> Result<LoadReport, RagError> {
    if chunk_size == 0 || overlap >= chunk_size {
        return Err(RagError::InvalidChunking {
            size: chunk_size,
            overlap,
        });
    }
    fs::read_dir(folder).map_err(|source| RagError::Folder {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut report = LoadReport::default();
    let walker = WalkDir::new(folder).min_depth(1).max_depth(1);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(kind) = document_kind(path) else {
            debug!(path = %path.display(), "ignoring unsupported file");
            continue;
        };

        match load_file(path, kind, chunk_size, overlap) {
            Ok(chunks) => {
                debug!(path = %path.display(), chunks = chunks.len(), "loaded document");
                report.chunks.extend(chunks);
            }
            Err(error) => {
                warn!(path = %path.display(), error = %error, "skipping document");
                report.skipped.push(SkippedFile {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    Ok(report)
}

fn load_file(
    path: &Path,
    kind: DocumentKind,
    chunk_size: usize,
    overlap: usize,
) -> Result<Vec<String>, LoadError> {
    let text = match kind {
        DocumentKind::Text => fs::read_to_string(path)?,
        DocumentKind::Pdf => extract_pdf_text(path)?,
    };
    Ok(chunk_text(&text, chunk_size, overlap)?)
}

fn document_kind(path: &Path) -> Option<DocumentKind> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "txt" => Some(DocumentKind::Text),
        "pdf" => Some(DocumentKind::Pdf),
        _ => None,
    }
}
