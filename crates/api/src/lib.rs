//! Delivery Scoring API Server
//!
//! HTTP surface over the body language, eye contact and vocal confidence
//! engines. Clients post pre-extracted landmark tracks or decoded audio;
//! each request is scored on a blocking worker with a fresh session.

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use body_language::{BodyLanguageAnalyzer, BodyLanguageConfig};
use chrono::{DateTime, Utc};
use eye_contact::{EyeContactAnalyzer, EyeContactConfig};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use vocal_confidence::VocalConfidenceAnalyzer;

mod error;
pub mod routes;
pub mod settings;

pub use error::ApiError;
pub use routes::AnalysisEnvelope;
pub use settings::{AnalysisSettings, LoggingSettings, ServerSettings, Settings};

/// Largest accepted request body; a face mesh track is ~468 points per frame
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

pub type SharedState = Arc<RwLock<AppState>>;

/// Application state shared across handlers
pub struct AppState {
    pub body_analyzer: BodyLanguageAnalyzer,
    pub eye_analyzer: EyeContactAnalyzer,
    pub vocal_analyzer: VocalConfidenceAnalyzer,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
    /// Completed analyses since start
    pub analyses_served: u64,
    /// Prometheus render handle, absent when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create new application state
    pub fn new(analysis: &AnalysisSettings) -> Self {
        Self {
            body_analyzer: BodyLanguageAnalyzer::new(BodyLanguageConfig::with_stride(
                analysis.frame_stride,
            )),
            eye_analyzer: EyeContactAnalyzer::new(EyeContactConfig::with_stride(
                analysis.frame_stride,
            )),
            vocal_analyzer: VocalConfidenceAnalyzer::default(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            analyses_served: 0,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AnalysisSettings::default())
    }
}

/// Health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime_seconds: u64,
    pub analyses_served: u64,
}

/// Create the application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/analysis/body-language", post(routes::body_language::analyze))
        .route("/api/v1/analysis/eye-contact", post(routes::eye_contact::analyze))
        .route("/api/v1/analysis/vocal-confidence", post(routes::vocal::analyze))
        .route("/metrics", get(metrics_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    let state = state.read().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        analyses_served: state.analyses_served,
    })
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<SharedState>) -> Result<String, StatusCode> {
    state
        .read()
        .await
        .metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Initialize logging
pub fn init_logging(settings: &LoggingSettings) {
    let level = settings.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    if settings.json {
        tracing::subscriber::set_global_default(builder.json().finish())
            .expect("Failed to set tracing subscriber");
    } else {
        tracing::subscriber::set_global_default(builder.finish())
            .expect("Failed to set tracing subscriber");
    }
}

/// Run the server
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    let state = Arc::new(RwLock::new(
        AppState::new(&settings.analysis).with_metrics(handle),
    ));
    let app = create_router(state);

    info!("Starting API server on {}", settings.server.bind_addr);

    let listener = tokio::net::TcpListener::bind(&settings.server.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
