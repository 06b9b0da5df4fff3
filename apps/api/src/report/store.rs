use std::path::{Path, PathBuf};

use crate::errors::AppError;

pub const HTML_ARTIFACT: &str = "report.html";
pub const PDF_ARTIFACT: &str = "report.pdf";

/// Local persistence for the latest report artifacts.
///
/// One HTML and one PDF artifact live under the reports directory; each
/// assessment run overwrites them, matching the download endpoints that
/// always serve the most recent report.
#[derive(Clone)]
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn html_path(&self) -> PathBuf {
        self.dir.join(HTML_ARTIFACT)
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.dir.join(PDF_ARTIFACT)
    }

    /// Writes the HTML artifact, creating the reports directory if needed.
    pub async fn write_html(&self, html: &str) -> Result<PathBuf, AppError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::Report(format!(
                "Failed to create reports directory {}: {e}",
                self.dir.display()
            ))
        })?;
        let path = self.html_path();
        tokio::fs::write(&path, html).await.map_err(|e| {
            AppError::Report(format!("Failed to write {}: {e}", path.display()))
        })?;
        Ok(path)
    }

    pub async fn read_html(&self) -> Result<Vec<u8>, AppError> {
        read_artifact(&self.html_path()).await
    }

    pub async fn read_pdf(&self) -> Result<Vec<u8>, AppError> {
        read_artifact(&self.pdf_path()).await
    }
}

async fn read_artifact(path: &Path) -> Result<Vec<u8>, AppError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(
            "Report not found. Please run /api/v1/analyze first to generate the report."
                .to_string(),
        )),
        Err(e) => Err(AppError::Report(format!(
            "Failed to read {}: {e}",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_creates_directory_and_read_roundtrips() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ReportStore::new(tmp.path().join("nested").join("reports"));
        store.write_html("<html></html>").await.unwrap();
        let bytes = store.read_html().await.unwrap();
        assert_eq!(bytes, b"<html></html>");
    }

    #[tokio::test]
    async fn test_read_missing_artifact_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ReportStore::new(tmp.path().to_path_buf());
        let err = store.read_pdf().await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
