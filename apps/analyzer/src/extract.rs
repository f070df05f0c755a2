//! Resume text extraction from uploaded PDF bytes.

use thiserror::Error;

/// A document failed to yield usable text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("Document contained no extractable text")]
    Empty,
}

/// Extracts plain text from a PDF document held in memory.
///
/// The result is trimmed; a document whose pages extract to nothing but
/// whitespace counts as a failed extraction, matching the upstream
/// treatment of unreadable uploads.
pub fn extract_text(document_bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(document_bytes)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_fail_extraction() {
        let result = extract_text(b"not a pdf at all");
        assert!(matches!(result, Err(ExtractionError::Pdf(_))));
    }

    #[test]
    fn test_empty_input_fails_extraction() {
        assert!(extract_text(&[]).is_err());
    }
}
