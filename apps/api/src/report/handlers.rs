//! Download endpoints for the latest report artifacts.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/report
///
/// Downloads the HTML compliance report as iso_27001_report.html.
pub async fn handle_download_html(State(state): State<AppState>) -> Result<Response, AppError> {
    let bytes = state.store.read_html().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                r#"attachment; filename="iso_27001_report.html""#,
            ),
        ],
        bytes,
    )
        .into_response())
}

/// GET /api/v1/report/pdf
///
/// Downloads the PDF compliance report as iso_27001_report.pdf.
pub async fn handle_download_pdf(State(state): State<AppState>) -> Result<Response, AppError> {
    let bytes = state.store.read_pdf().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                r#"attachment; filename="iso_27001_report.pdf""#,
            ),
        ],
        bytes,
    )
        .into_response())
}
