//! PDF export — prints the saved HTML report through a headless Chromium.

use std::path::{Path, PathBuf};

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tracing::debug;

use crate::errors::AppError;

/// Exports HTML report artifacts to PDF.
///
/// Launches a fresh headless browser per export; the one-report-at-a-time
/// store makes a persistent browser pointless.
#[derive(Clone)]
pub struct PdfExporter {
    chrome_executable: Option<PathBuf>,
}

impl PdfExporter {
    pub fn new(chrome_executable: Option<PathBuf>) -> Self {
        Self { chrome_executable }
    }

    /// Prints `html_path` to `pdf_path` and returns the written path.
    pub async fn export(&self, html_path: &Path, pdf_path: &Path) -> Result<PathBuf, AppError> {
        let absolute = html_path.canonicalize().map_err(|e| {
            AppError::Report(format!(
                "Failed to resolve report path {}: {e}",
                html_path.display()
            ))
        })?;
        let url = format!("file://{}", absolute.display());
        debug!("Printing {} to PDF", url);

        let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
            "--disable-gpu",
            "--no-sandbox",
            "--disable-dev-shm-usage",
        ]);
        if let Some(exe) = &self.chrome_executable {
            builder = builder.chrome_executable(exe);
        }
        let config = builder
            .build()
            .map_err(|e| AppError::Report(format!("Failed to configure headless browser: {e}")))?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| AppError::Report(format!("Failed to launch headless browser: {e}")))?;

        // Drive browser events in the background for the lifetime of the export
        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = print_page(&browser, &url, pdf_path).await;

        browser.close().await.ok();
        events.abort();

        result?;
        Ok(pdf_path.to_path_buf())
    }
}

async fn print_page(browser: &Browser, url: &str, pdf_path: &Path) -> Result<(), AppError> {
    let page = browser
        .new_page(url)
        .await
        .map_err(|e| AppError::Report(format!("Failed to open report page: {e}")))?;

    // Honor the report's own @page rule (A4 landscape) and its colors
    let params = PrintToPdfParams {
        landscape: Some(true),
        print_background: Some(true),
        prefer_css_page_size: Some(true),
        ..Default::default()
    };

    let bytes = page
        .pdf(params)
        .await
        .map_err(|e| AppError::Report(format!("Failed to print report to PDF: {e}")))?;

    tokio::fs::write(pdf_path, bytes)
        .await
        .map_err(|e| AppError::Report(format!("Failed to write {}: {e}", pdf_path.display())))?;

    Ok(())
}
