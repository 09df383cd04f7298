use tracing::warn;

use crate::errors::AppError;

/// Extracts plain text from an uploaded PDF resume, entirely in memory.
/// Fails closed: any extraction error becomes a 400 and nothing is written.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        warn!(error = %e, "resume text extraction failed");
        AppError::Validation("Error parsing resume".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_closed_with_parse_error() {
        let err = extract_resume_text(b"not a pdf at all").unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Error parsing resume"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
