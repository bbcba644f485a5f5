// Core structs: progress, sentiment, metrics, visualization
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of session the reflection is written for. Unknown values read as
/// `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionContext {
    #[default]
    Therapy,
    Coaching,
    #[serde(other)]
    Other,
}

impl SessionContext {
    pub const ALL: [SessionContext; 3] = [Self::Therapy, Self::Coaching, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Therapy => "therapy",
            Self::Coaching => "coaching",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Therapy => "Terapia",
            Self::Coaching => "Coaching",
            Self::Other => "Otro",
        }
    }

    /// Guiding question shown above the text area.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Therapy => "¿Qué te gustaría explorar hoy? ¿Cómo te has sentido desde la última sesión?",
            Self::Coaching => "¿Qué objetivo quieres trabajar hoy? ¿Qué avances y obstáculos has encontrado?",
            Self::Other => "Escribe libremente lo que tengas en mente antes de la sesión.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressBucket {
    Low,
    Ideal,
    High,
}

impl ProgressBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Ideal => "ideal",
            Self::High => "high",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Low => "Sigue escribiendo: cada palabra te ayuda a aclarar lo que quieres llevar a la sesión.",
            Self::Ideal => "¡Muy bien! Tu reflexión tiene una extensión ideal.",
            Self::High => "Tu texto es bastante extenso; quizá quieras resumir las ideas principales.",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#f39c12",
            Self::Ideal => "#2ecc71",
            Self::High => "#e74c3c",
        }
    }
}

/// Everything the page shows about the length of the text.
#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub word_count: usize,
    pub bucket: ProgressBucket,
    pub message: &'static str,
    pub color: &'static str,
    pub fraction: f64,
    pub estimated_minutes: usize,
}

/// Raw analyzer output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentScores {
    /// In [-1, 1].
    pub polarity: f64,
    /// In [0, 1].
    pub subjectivity: f64,
}

/// Display percentages for the bar chart. These do not sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SentimentDisplay {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub subjectivity: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
    pub total_words: usize,
    pub unique_words: usize,
    pub sentences: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

/// Result of a successful generate action.
#[derive(Debug, Clone, Serialize)]
pub struct Visualization {
    pub word_cloud_svg: String,
    pub sentiment_chart_svg: String,
    pub scores: SentimentScores,
    pub sentiment: SentimentDisplay,
    pub metrics: TextMetrics,
    pub top_words: Vec<WordFrequency>,
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no quedan palabras para la nube después de filtrar las palabras vacías")]
    EmptyCorpus,
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("{0}")]
    Collaborator(String),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// A message shown above the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    #[default]
    Update,
    Generate,
}

/// Fields posted by the page. Absent fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReflectionForm {
    pub name: String,
    pub session_date: String,
    pub context: SessionContext,
    pub text: String,
    pub action: FormAction,
}
