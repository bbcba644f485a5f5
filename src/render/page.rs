use crate::analyzer::{generate_enabled, progress};
use crate::config::WritingConfig;
use crate::model::{Notice, Progress, ReflectionForm, RenderError, SessionContext, Visualization};
use crate::utils::parse_session_date;
use chrono::NaiveDate;
use serde::Serialize;
use tera::{Context, Tera};

const INDEX_TEMPLATE: &str = "index.html";
pub const STYLESHEET: &str = include_str!("../../templates/style.css");

#[derive(Debug, Serialize)]
pub struct ContextOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything the index template needs for one render.
#[derive(Debug, Serialize)]
pub struct PageView<'a> {
    pub greeting: String,
    pub name: &'a str,
    pub session_date: String,
    pub session_date_label: String,
    pub contexts: Vec<ContextOption>,
    pub prompt: &'static str,
    pub text: &'a str,
    pub progress: Progress,
    pub progress_percent: u32,
    pub generate_enabled: bool,
    pub min_words: usize,
    pub words_missing: usize,
    pub notices: Vec<Notice>,
    pub visualization: Option<&'a Visualization>,
}

impl<'a> PageView<'a> {
    pub fn build(form: &'a ReflectionForm, cfg: &WritingConfig, today: NaiveDate) -> Self {
        let mut notices = Vec::new();
        let date = match parse_session_date(&form.session_date) {
            Some(date) => date,
            None => {
                if !form.session_date.trim().is_empty() {
                    notices.push(Notice::warning(
                        "La fecha indicada no es válida; se muestra la fecha de hoy.",
                    ));
                }
                today
            }
        };

        let name = form.name.trim();
        let greeting = if name.is_empty() {
            "Hola. Tómate unos minutos para escribir antes de tu sesión.".to_string()
        } else {
            format!("Hola, {name}. Tómate unos minutos para escribir antes de tu sesión.")
        };

        let progress = progress(&form.text, cfg);
        let contexts = SessionContext::ALL
            .iter()
            .map(|c| ContextOption {
                value: c.as_str(),
                label: c.label(),
                selected: *c == form.context,
            })
            .collect();

        Self {
            greeting,
            name,
            session_date: date.format("%Y-%m-%d").to_string(),
            session_date_label: date.format("%d/%m/%Y").to_string(),
            contexts,
            prompt: form.context.prompt(),
            text: &form.text,
            progress_percent: (progress.fraction * 100.0).round() as u32,
            generate_enabled: generate_enabled(progress.word_count, cfg),
            min_words: cfg.min_words_to_generate,
            words_missing: cfg.min_words_to_generate.saturating_sub(progress.word_count),
            progress,
            notices,
            visualization: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notices.extend(notice);
        self
    }

    pub fn with_visualization(mut self, visualization: Option<&'a Visualization>) -> Self {
        self.visualization = visualization;
        self
    }
}

/// Compiled page templates.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, include_str!("../../templates/index.html"))?;
        Ok(Self { tera })
    }

    pub fn render(&self, view: &PageView<'_>) -> Result<String, RenderError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }
}
