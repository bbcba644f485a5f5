use crate::analyzer::{generate_enabled, progress};
use crate::gate::{GenerationOutcome, run_generation};
use crate::model::{FormAction, Notice, Progress, ReflectionForm, RenderError, Visualization};
use crate::render::page::{PageView, STYLESHEET};
use crate::server::AppState;
use axum::Json;
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "No se pudo mostrar la página.",
        )
            .into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub progress: Progress,
    pub generate_enabled: bool,
    pub min_words: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerateStatus {
    Ok,
    Warning,
    Error,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub status: GenerateStatus,
    pub notice: Option<Notice>,
    pub visualization: Option<Visualization>,
    pub generated_at: DateTime<Utc>,
}

impl From<GenerationOutcome> for GenerateResponse {
    fn from(outcome: GenerationOutcome) -> Self {
        let notice = outcome.notice();
        let (status, visualization) = match outcome {
            GenerationOutcome::NoText | GenerationOutcome::TooShort { .. } => {
                (GenerateStatus::Warning, None)
            }
            GenerationOutcome::Failed(_) => (GenerateStatus::Error, None),
            GenerationOutcome::Ready(viz) => (GenerateStatus::Ok, Some(*viz)),
        };
        Self {
            status,
            notice,
            visualization,
            generated_at: Utc::now(),
        }
    }
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let form = ReflectionForm::default();
    let view = PageView::build(&form, &state.config.writing, today());
    Ok(Html(state.pages.render(&view)?))
}

pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ReflectionForm>,
) -> Result<Html<String>, AppError> {
    info!(
        "Form submitted: action = {:?}, context = {}, {} chars",
        form.action,
        form.context.as_str(),
        form.text.chars().count()
    );

    let outcome = match form.action {
        FormAction::Generate => Some(
            run_generation(&form.text, &state.config.writing, state.visualizer.as_ref()).await,
        ),
        FormAction::Update => None,
    };

    let view = PageView::build(&form, &state.config.writing, today())
        .with_notice(outcome.as_ref().and_then(GenerationOutcome::notice))
        .with_visualization(outcome.as_ref().and_then(GenerationOutcome::visualization));
    Ok(Html(state.pages.render(&view)?))
}

pub async fn api_analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<AnalyzeResponse> {
    let cfg = &state.config.writing;
    let progress = progress(&req.text, cfg);
    Json(AnalyzeResponse {
        generate_enabled: generate_enabled(progress.word_count, cfg),
        min_words: cfg.min_words_to_generate,
        progress,
    })
}

pub async fn api_generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TextRequest>,
) -> Json<GenerateResponse> {
    let outcome =
        run_generation(&req.text, &state.config.writing, state.visualizer.as_ref()).await;
    Json(outcome.into())
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

pub async fn health() -> &'static str {
    "ok"
}
