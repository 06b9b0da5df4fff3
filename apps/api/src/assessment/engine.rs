//! Orchestrates one assessment run.

use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::assessment::assessor::ControlAssessor;
use crate::controls::registry::ControlRegistry;
use crate::errors::AppError;
use crate::extract::extract_policy_text;
use crate::models::assessment::{AssessmentSummary, ControlResult, ReadinessReport};
use crate::report::html::render_html;
use crate::report::pdf::PdfExporter;
use crate::report::store::ReportStore;

/// Runs the full assessment pipeline and persists the report artifacts.
///
/// Steps:
/// 1. resolve the control selection (empty = whole catalogue)
/// 2. extract text from the uploaded PDF
/// 3. assess each control sequentially in catalogue order
/// 4. aggregate the summary
/// 5. render HTML and export PDF under the report store
pub async fn run_assessment(
    registry: &ControlRegistry,
    assessor: &dyn ControlAssessor,
    store: &ReportStore,
    exporter: &PdfExporter,
    source_document: &str,
    data: Bytes,
    selection: &[String],
) -> Result<ReadinessReport, AppError> {
    // Selection errors are cheap to surface; check before touching the PDF.
    let controls = registry.select(selection)?;

    info!(
        "Assessing '{}' against {} controls",
        source_document,
        controls.len()
    );
    let policy_text = extract_policy_text(data).await?;

    let mut results = Vec::with_capacity(controls.len());
    for (i, control) in controls.iter().enumerate() {
        let verdict = assessor.assess(control, &policy_text).await?;
        info!(
            "Assessed control {} ({}/{}): {}",
            control.new_control_id,
            i + 1,
            controls.len(),
            verdict.status.as_str()
        );
        results.push(ControlResult::new(control, verdict));
    }

    let summary = AssessmentSummary::from_results(&results);
    let report = ReadinessReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        source_document: source_document.to_string(),
        summary,
        results,
    };

    let html = render_html(&report);
    let html_path = store.write_html(&html).await?;
    info!("HTML report written to {}", html_path.display());

    let pdf_path = exporter.export(&html_path, &store.pdf_path()).await?;
    info!("PDF report written to {}", pdf_path.display());

    Ok(report)
}
