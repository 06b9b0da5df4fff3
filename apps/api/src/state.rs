use std::sync::Arc;

use crate::assessment::assessor::ControlAssessor;
use crate::config::Config;
use crate::controls::registry::ControlRegistry;
use crate::report::pdf::PdfExporter;
use crate::report::store::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The fixed Annex A catalogue, loaded once at startup.
    pub controls: Arc<ControlRegistry>,
    /// Pluggable per-control assessor. Production: `LlmAssessor`.
    pub assessor: Arc<dyn ControlAssessor>,
    pub store: ReportStore,
    pub exporter: PdfExporter,
    pub config: Config,
}
