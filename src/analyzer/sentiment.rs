use crate::analyzer::lexicon::{ReflectionLexicon, SentimentLexicon};
use crate::analyzer::metrics::word_tokens;
use crate::model::{SentimentDisplay, SentimentScores};

/// Computes polarity and subjectivity for a text.
pub trait PolarityAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> SentimentScores;
}

/// Damping applied to a negated word's polarity.
const NEGATION_FACTOR: f64 = -0.5;

/// Lexicon-based analyzer: averages the scores of every sentiment word,
/// after applying any preceding intensifier and negation.
pub struct LexiconAnalyzer<L: SentimentLexicon = ReflectionLexicon> {
    lexicon: L,
    /// How many tokens after a negation it still applies.
    negation_window: usize,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self::with_lexicon(ReflectionLexicon::new())
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SentimentLexicon> LexiconAnalyzer<L> {
    pub fn with_lexicon(lexicon: L) -> Self {
        Self {
            lexicon,
            negation_window: 3,
        }
    }

    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }
}

impl<L: SentimentLexicon> PolarityAnalyzer for LexiconAnalyzer<L> {
    fn analyze(&self, text: &str) -> SentimentScores {
        let mut scored: Vec<(f64, f64)> = Vec::new();
        let mut modifier = 1.0;
        let mut negated = false;
        let mut since_negation = 0;

        for token in word_tokens(text) {
            let token = token.to_lowercase();

            if self.lexicon.is_negation(&token) {
                negated = true;
                since_negation = 0;
                continue;
            }
            if let Some(m) = self.lexicon.intensifier(&token) {
                modifier = m;
                continue;
            }

            if let Some(ws) = self.lexicon.get(&token) {
                let mut polarity = ws.polarity * modifier;
                if negated && since_negation < self.negation_window {
                    polarity *= NEGATION_FACTOR;
                }
                let subjectivity = ws.subjectivity * modifier;
                scored.push((polarity.clamp(-1.0, 1.0), subjectivity.clamp(0.0, 1.0)));
                negated = false;
            } else {
                since_negation += 1;
                if since_negation >= self.negation_window {
                    negated = false;
                }
            }
            modifier = 1.0;
        }

        if scored.is_empty() {
            return SentimentScores::default();
        }

        let n = scored.len() as f64;
        let polarity = scored.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = scored.iter().map(|(_, s)| s).sum::<f64>() / n;
        SentimentScores {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Maps analyzer output to the four bar-chart percentages.
pub fn sentiment_display(scores: SentimentScores) -> SentimentDisplay {
    let p = scores.polarity;
    SentimentDisplay {
        positive: p.max(0.0) * 100.0,
        negative: p.min(0.0).abs() * 100.0,
        neutral: (1.0 - p.abs()) * 50.0,
        subjectivity: scores.subjectivity * 100.0,
    }
}
