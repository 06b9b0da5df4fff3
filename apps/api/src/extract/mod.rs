//! PDF text extraction. CPU-bound parsing runs inside
//! `tokio::task::spawn_blocking` so it never stalls the request executor.

use anyhow::anyhow;
use bytes::Bytes;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Cheap upfront check that an upload is a PDF at all.
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Extracts the plain text of an uploaded PDF.
///
/// Rejects non-PDF uploads (400) before parsing; a structurally broken PDF
/// or one with no extractable text (e.g. scanned images) is 422.
pub async fn extract_policy_text(data: Bytes) -> Result<String, AppError> {
    if !is_pdf(&data) {
        return Err(AppError::Validation(
            "Uploaded file is not a PDF".to_string(),
        ));
    }

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::UnprocessableEntity(format!("Failed to parse PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF contains no extractable text".to_string(),
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pdf_accepts_magic() {
        assert!(is_pdf(b"%PDF-1.7 rest of file"));
    }

    #[test]
    fn test_is_pdf_rejects_other_content() {
        assert!(!is_pdf(b"<html>not a pdf</html>"));
        assert!(!is_pdf(b""));
        // Magic must be at offset zero
        assert!(!is_pdf(b" %PDF-1.7"));
    }

    #[tokio::test]
    async fn test_extract_rejects_non_pdf_upload() {
        let err = extract_policy_text(Bytes::from_static(b"plain text"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_extract_broken_pdf_is_unprocessable() {
        let err = extract_policy_text(Bytes::from_static(b"%PDF-1.7 garbage body"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
