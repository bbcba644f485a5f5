// Word normalization for the word cloud: lowercase, stopwords, frequencies
use crate::analyzer::metrics::word_tokens;
use crate::model::WordFrequency;
use std::collections::{HashMap, HashSet};

const SPANISH_STOPWORDS: &[&str] = &[
    "de", "la", "que", "el", "en", "y", "a", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "lo", "como", "más", "pero", "sus", "le", "ya", "o", "este",
    "sí", "porque", "esta", "entre", "cuando", "muy", "sin", "sobre", "también", "me", "hasta",
    "hay", "donde", "quien", "desde", "todo", "nos", "durante", "todos", "uno", "les", "ni",
    "contra", "otros", "ese", "eso", "ante", "ellos", "e", "esto", "mí", "antes", "algunos",
    "qué", "unos", "yo", "otro", "otras", "otra", "él", "tanto", "esa", "estos", "mucho",
    "quienes", "nada", "muchos", "cual", "poco", "ella", "estar", "estas", "algunas", "algo",
    "nosotros", "mi", "mis", "tú", "te", "ti", "tu", "tus", "ellas", "nosotras", "vosotros",
    "os", "mío", "mía", "míos", "mías", "tuyo", "tuya", "suyo", "suya", "nuestro", "nuestra",
    "esos", "esas", "estoy", "estás", "está", "estamos", "están", "estaba", "estado", "he",
    "has", "ha", "hemos", "han", "había", "soy", "eres", "es", "somos", "son", "era", "fue",
    "ser", "sido", "tengo", "tienes", "tiene", "tenemos", "tienen", "tenía", "hace", "hacer",
    "siento", "creo", "hoy", "sé", "si", "solo", "así", "aunque", "cada", "vez", "ahora",
];

const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "and", "a", "an", "of", "to", "in", "is", "it", "that", "i", "me", "my", "we", "our",
    "you", "your", "he", "she", "they", "them", "his", "her", "was", "were", "be", "been", "am",
    "are", "for", "on", "with", "as", "at", "by", "this", "but", "not", "or", "so", "if", "have",
    "has", "had", "do", "did", "does", "from", "what", "about", "there", "their", "just", "very",
    "feel", "think", "today",
];

/// Turns raw text into the frequency table a word cloud is drawn from.
#[derive(Debug, Clone)]
pub struct WordNormalizer {
    stopwords: HashSet<String>,
    min_length: usize,
}

impl WordNormalizer {
    pub fn new() -> Self {
        let stopwords = SPANISH_STOPWORDS
            .iter()
            .chain(ENGLISH_STOPWORDS)
            .map(|w| w.to_string())
            .collect();
        Self {
            stopwords,
            min_length: 3,
        }
    }

    /// Minimum length in characters, not bytes.
    pub fn with_min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Lowercased tokens that survive stopword and length filtering.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        word_tokens(text)
            .into_iter()
            .map(str::to_lowercase)
            .filter(|w| w.chars().count() >= self.min_length)
            .filter(|w| !w.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ','))
            .filter(|w| !self.is_stopword(w))
            .collect()
    }

    /// Frequencies sorted by count, ties broken alphabetically.
    pub fn frequencies(&self, text: &str) -> Vec<WordFrequency> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in self.normalize(text) {
            *counts.entry(word).or_default() += 1;
        }

        let mut freqs: Vec<WordFrequency> = counts
            .into_iter()
            .map(|(word, count)| WordFrequency { word, count })
            .collect();
        freqs.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        freqs
    }
}

impl Default for WordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
