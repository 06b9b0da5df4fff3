mod assessment;
mod config;
mod controls;
mod errors;
mod extract;
mod llm_client;
mod models;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::assessor::{ControlAssessor, LlmAssessor};
use crate::config::Config;
use crate::controls::registry::ControlRegistry;
use crate::llm_client::LlmClient;
use crate::report::pdf::PdfExporter;
use crate::report::store::ReportStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Warden API v{}", env!("CARGO_PKG_VERSION"));

    // Load the Annex A catalogue
    let controls = Arc::new(ControlRegistry::load(&config.controls_csv_path)?);
    info!(
        "Loaded {} ISO controls from {}",
        controls.len(),
        config.controls_csv_path.display()
    );

    // Initialize LLM client and the production assessor
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let assessor: Arc<dyn ControlAssessor> = Arc::new(LlmAssessor::new(llm));

    // Report artifacts live under the configured reports directory
    let store = ReportStore::new(config.reports_dir.clone());
    let exporter = PdfExporter::new(config.chrome_executable.clone());

    // Build app state
    let state = AppState {
        controls,
        assessor,
        store,
        exporter,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
