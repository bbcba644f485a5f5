// Generate-button gate: decides whether the visual collaborators run
use crate::analyzer::{generate_enabled, word_count};
use crate::config::WritingConfig;
use crate::model::{Notice, Visualization};
use crate::render::Visualizer;
use tracing::{info, warn};

pub const NO_TEXT_WARNING: &str = "Por favor, escribe algo antes de generar la visualización.";

#[derive(Debug)]
pub enum GenerationOutcome {
    /// Nothing was written; collaborators were not called.
    NoText,
    /// Below the word minimum; collaborators were not called.
    TooShort { words: usize, min: usize },
    /// A collaborator failed; carries its message.
    Failed(String),
    Ready(Box<Visualization>),
}

impl GenerationOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::NoText => Some(Notice::warning(NO_TEXT_WARNING)),
            Self::TooShort { words, min } => Some(Notice::warning(too_short_message(*words, *min))),
            Self::Failed(msg) => Some(Notice::error(failure_message(msg))),
            Self::Ready(_) => None,
        }
    }

    pub fn visualization(&self) -> Option<&Visualization> {
        match self {
            Self::Ready(viz) => Some(viz.as_ref()),
            _ => None,
        }
    }
}

pub fn failure_message(cause: &str) -> String {
    format!("Ocurrió un error al generar la visualización: {cause}")
}

pub fn too_short_message(words: usize, min: usize) -> String {
    format!("Escribe al menos {min} palabras para generar la visualización (llevas {words}).")
}

/// Runs the visualizer once the text reaches the word minimum. Blank text
/// and short text are refused before any collaborator is called. Any
/// failure is reported as a single generic outcome regardless of its cause.
pub async fn run_generation(
    text: &str,
    cfg: &WritingConfig,
    visualizer: &dyn Visualizer,
) -> GenerationOutcome {
    if text.trim().is_empty() {
        info!("Generate requested without text");
        return GenerationOutcome::NoText;
    }

    let words = word_count(text);
    if !generate_enabled(words, cfg) {
        info!("Generate requested with {} of {} words", words, cfg.min_words_to_generate);
        return GenerationOutcome::TooShort {
            words,
            min: cfg.min_words_to_generate,
        };
    }

    match visualizer.generate(text).await {
        Ok(viz) => GenerationOutcome::Ready(Box::new(viz)),
        Err(e) => {
            warn!("Visualization failed: {}", e);
            GenerationOutcome::Failed(e.to_string())
        }
    }
}
