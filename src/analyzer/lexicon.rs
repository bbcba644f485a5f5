//! Sentiment word lists.
//!
//! Each entry carries a polarity in [-1, 1] and a subjectivity in [0, 1].
//! Spanish and English words live in the same table; inflected Spanish
//! forms are listed explicitly since there is no stemming.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordSentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

pub trait SentimentLexicon: Send + Sync {
    fn get(&self, word: &str) -> Option<WordSentiment>;
    /// Multiplier applied to the next sentiment word.
    fn intensifier(&self, word: &str) -> Option<f64>;
    fn is_negation(&self, word: &str) -> bool;
}

const WORDS: &[(&str, f64, f64)] = &[
    // positive, es
    ("feliz", 0.8, 1.0),
    ("felices", 0.8, 1.0),
    ("contento", 0.7, 0.9),
    ("contenta", 0.7, 0.9),
    ("alegre", 0.7, 0.9),
    ("alegría", 0.8, 0.9),
    ("tranquilo", 0.5, 0.7),
    ("tranquila", 0.5, 0.7),
    ("calma", 0.4, 0.6),
    ("bien", 0.5, 0.6),
    ("bueno", 0.6, 0.6),
    ("buena", 0.6, 0.6),
    ("mejor", 0.5, 0.5),
    ("genial", 0.8, 0.9),
    ("excelente", 1.0, 1.0),
    ("maravilloso", 1.0, 1.0),
    ("maravillosa", 1.0, 1.0),
    ("esperanza", 0.6, 0.7),
    ("ilusión", 0.6, 0.8),
    ("motivado", 0.6, 0.7),
    ("motivada", 0.6, 0.7),
    ("orgulloso", 0.7, 0.9),
    ("orgullosa", 0.7, 0.9),
    ("agradecido", 0.7, 0.8),
    ("agradecida", 0.7, 0.8),
    ("gracias", 0.4, 0.4),
    ("amor", 0.6, 0.8),
    ("seguro", 0.4, 0.6),
    ("segura", 0.4, 0.6),
    ("logro", 0.6, 0.5),
    ("avance", 0.4, 0.4),
    ("progreso", 0.5, 0.4),
    ("paz", 0.6, 0.6),
    ("disfrutar", 0.6, 0.7),
    ("disfruto", 0.6, 0.7),
    // negative, es
    ("triste", -0.6, 1.0),
    ("tristeza", -0.6, 0.9),
    ("mal", -0.6, 0.6),
    ("malo", -0.6, 0.6),
    ("mala", -0.6, 0.6),
    ("peor", -0.7, 0.7),
    ("ansioso", -0.6, 0.9),
    ("ansiosa", -0.6, 0.9),
    ("ansiedad", -0.6, 0.8),
    ("miedo", -0.6, 0.8),
    ("enojado", -0.7, 0.9),
    ("enojada", -0.7, 0.9),
    ("enfado", -0.6, 0.8),
    ("frustrado", -0.6, 0.9),
    ("frustrada", -0.6, 0.9),
    ("frustración", -0.6, 0.8),
    ("cansado", -0.4, 0.7),
    ("cansada", -0.4, 0.7),
    ("agotado", -0.6, 0.8),
    ("agotada", -0.6, 0.8),
    ("estrés", -0.5, 0.7),
    ("estresado", -0.6, 0.8),
    ("estresada", -0.6, 0.8),
    ("preocupado", -0.5, 0.8),
    ("preocupada", -0.5, 0.8),
    ("preocupación", -0.5, 0.7),
    ("soledad", -0.5, 0.8),
    ("culpa", -0.5, 0.8),
    ("dolor", -0.6, 0.7),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("difícil", -0.4, 0.6),
    ("problema", -0.4, 0.4),
    ("conflicto", -0.4, 0.5),
    // positive, en
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("calm", 0.3, 0.6),
    ("good", 0.7, 0.6),
    ("better", 0.5, 0.5),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("hope", 0.5, 0.6),
    ("hopeful", 0.6, 0.7),
    ("grateful", 0.7, 0.8),
    ("proud", 0.8, 1.0),
    ("love", 0.5, 0.6),
    ("confident", 0.5, 0.7),
    ("relieved", 0.5, 0.8),
    ("progress", 0.4, 0.4),
    ("peaceful", 0.6, 0.7),
    ("enjoy", 0.4, 0.6),
    // negative, en
    ("sad", -0.5, 1.0),
    ("bad", -0.7, 0.67),
    ("worse", -0.6, 0.7),
    ("anxious", -0.5, 0.9),
    ("anxiety", -0.5, 0.8),
    ("afraid", -0.6, 0.9),
    ("fear", -0.6, 0.8),
    ("angry", -0.5, 1.0),
    ("frustrated", -0.6, 0.9),
    ("tired", -0.4, 0.7),
    ("exhausted", -0.6, 0.8),
    ("stressed", -0.5, 0.8),
    ("worried", -0.5, 0.8),
    ("lonely", -0.5, 0.9),
    ("guilty", -0.5, 0.8),
    ("pain", -0.6, 0.7),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("hard", -0.3, 0.5),
    ("difficult", -0.5, 0.6),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("muy", 1.3),
    ("bastante", 1.2),
    ("demasiado", 1.4),
    ("tan", 1.3),
    ("súper", 1.5),
    ("extremadamente", 1.6),
    ("realmente", 1.3),
    ("poco", 0.5),
    ("algo", 0.7),
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("too", 1.4),
    ("extremely", 1.6),
    ("quite", 1.2),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

const NEGATIONS: &[&str] = &[
    "no", "nunca", "jamás", "ni", "tampoco", "nada", "not", "never", "don't", "isn't", "wasn't",
    "can't", "didn't",
];

/// Built-in Spanish/English lexicon.
#[derive(Debug, Clone)]
pub struct ReflectionLexicon {
    words: HashMap<String, WordSentiment>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl ReflectionLexicon {
    pub fn new() -> Self {
        let words = WORDS
            .iter()
            .map(|&(w, polarity, subjectivity)| {
                (w.to_string(), WordSentiment { polarity, subjectivity })
            })
            .collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|&(w, m)| (w.to_string(), m))
            .collect();
        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();

        Self {
            words,
            intensifiers,
            negations,
        }
    }

    /// Adds or replaces a word.
    pub fn with_word(mut self, word: &str, polarity: f64, subjectivity: f64) -> Self {
        self.words.insert(
            word.to_lowercase(),
            WordSentiment {
                polarity: polarity.clamp(-1.0, 1.0),
                subjectivity: subjectivity.clamp(0.0, 1.0),
            },
        );
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ReflectionLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for ReflectionLexicon {
    fn get(&self, word: &str) -> Option<WordSentiment> {
        self.words.get(word).copied()
    }

    fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_in_range() {
        for &(word, p, s) in WORDS {
            assert!((-1.0..=1.0).contains(&p), "{word} polarity");
            assert!((0.0..=1.0).contains(&s), "{word} subjectivity");
        }
    }

    #[test]
    fn looks_up_both_languages() {
        let lex = ReflectionLexicon::new();
        assert!(lex.get("feliz").unwrap().polarity > 0.0);
        assert!(lex.get("sad").unwrap().polarity < 0.0);
        assert!(lex.get("mesa").is_none());
        assert!(lex.is_negation("nunca"));
        assert_eq!(lex.intensifier("muy"), Some(1.3));
    }

    #[test]
    fn custom_words_are_clamped() {
        let base = ReflectionLexicon::new();
        assert!(!base.is_empty());
        let size = base.len();
        let lex = base.with_word("Radiante", 2.0, -1.0);
        assert_eq!(lex.len(), size + 1);
        let ws = lex.get("radiante").unwrap();
        assert_eq!(ws.polarity, 1.0);
        assert_eq!(ws.subjectivity, 0.0);
    }
}
