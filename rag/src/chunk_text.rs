use crate::error::RagError;

/// Splits `text` into windows of `size` characters, each starting `size - overlap`
/// after the previous one. Windows that are blank after trimming are dropped.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Result<Vec<String>, RagError> {
    if size == 0 || overlap >= size {
        return Err(RagError::InvalidChunking { size, overlap });
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    let chars: Vec<char> = text.chars().collect();
    let len_chars = chars.len();
    let stride = size - overlap;

    while start < len_chars {
        let end = (start + size).min(len_chars);
        let chunk_str: String = chars[start..end].iter().collect();
        let trimmed = chunk_str.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }
        // The window already covers the tail; another step would only repeat the overlap.
        if end == len_chars {
            break;
        }
        start += stride;
    }

    Ok(chunks)
}
