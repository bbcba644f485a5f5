// Analyzer module: pure text statistics and sentiment.

pub mod lexicon;
pub mod metrics;
pub mod progress;
pub mod sentiment;

pub use lexicon::{ReflectionLexicon, SentimentLexicon};
pub use progress::{estimated_minutes, generate_enabled, progress, progress_fraction, word_count};
pub use sentiment::{LexiconAnalyzer, PolarityAnalyzer, sentiment_display};
