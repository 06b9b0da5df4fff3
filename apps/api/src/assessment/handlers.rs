//! Axum route handlers for the Assessment API.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::assessment::engine::run_assessment;
use crate::errors::AppError;
use crate::models::assessment::ReadinessReport;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Multipart upload:
/// - `file` (required): the PDF policy document.
/// - `controls` (optional): comma-separated `new_control_id` values
///   selecting a subset of the catalogue. Absent means all controls.
///
/// Returns the readiness report and persists the HTML/PDF artifacts.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ReadinessReport>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;
    let mut selection: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field
                    .file_name()
                    .unwrap_or("document.pdf")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                upload = Some((filename, data));
            }
            Some("controls") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read controls field: {e}"))
                })?;
                selection = parse_selection(&text);
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    let (filename, data) = upload
        .ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

    let report = run_assessment(
        &state.controls,
        state.assessor.as_ref(),
        &state.store,
        &state.exporter,
        &filename,
        data,
        &selection,
    )
    .await?;

    Ok(Json(report))
}

/// Splits a comma-separated control id list, trimming whitespace and
/// dropping empty segments.
fn parse_selection(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_trims_and_drops_empty() {
        let ids = parse_selection(" 5.1, 8.28 ,,5.16, ");
        assert_eq!(ids, vec!["5.1", "8.28", "5.16"]);
    }

    #[test]
    fn test_parse_selection_empty_input() {
        assert!(parse_selection("").is_empty());
        assert!(parse_selection("  ,  ").is_empty());
    }
}
