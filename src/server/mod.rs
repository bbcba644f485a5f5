//! HTTP layer: the reflection page and its JSON twins.
//!
//! Routes:
//! - `GET /` - empty form
//! - `POST /` - form submission (`action=update` or `action=generate`)
//! - `POST /api/analyze` - word count, progress and gate state as JSON
//! - `POST /api/generate` - run the visualization gate, JSON result
//! - `GET /static/style.css` - stylesheet
//! - `GET /health` - liveness

pub mod handlers;

use crate::analyzer::LexiconAnalyzer;
use crate::config::AppConfig;
use crate::model::RenderError;
use crate::render::page::PageRenderer;
use crate::render::{ChartVisualizer, Visualizer};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared, read-only state. Nothing here changes between requests.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pages: PageRenderer,
    pub visualizer: Arc<dyn Visualizer>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, RenderError> {
        let visualizer = ChartVisualizer::new(config.cloud.clone(), Arc::new(LexiconAnalyzer::new()));
        Self::with_visualizer(config, Arc::new(visualizer))
    }

    pub fn with_visualizer(
        config: Arc<AppConfig>,
        visualizer: Arc<dyn Visualizer>,
    ) -> Result<Self, RenderError> {
        Ok(Self {
            config,
            pages: PageRenderer::new()?,
            visualizer,
        })
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .route("/api/analyze", post(handlers::api_analyze))
        .route("/api/generate", post(handlers::api_generate))
        .route("/static/style.css", get(handlers::stylesheet))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
