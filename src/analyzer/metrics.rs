use crate::model::TextMetrics;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Word tokens by Unicode word boundaries. Apostrophes inside a word
/// ("don't") and decimal points inside a number ("7.5") stay in the token.
pub fn word_tokens(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Sentences by Unicode sentence boundaries, so a decimal point or an
/// abbreviation followed by lowercase does not end a sentence. Text without
/// any terminator counts as a single sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn compute(text: &str) -> TextMetrics {
    let words = word_tokens(text);
    let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
    TextMetrics {
        total_words: words.len(),
        unique_words: unique.len(),
        sentences: sentences(text).len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_metrics() {
        assert_eq!(compute(""), TextMetrics::default());
        assert_eq!(compute("  ...  "), TextMetrics::default());
    }

    #[test]
    fn tokens_drop_punctuation() {
        assert_eq!(word_tokens("Hola, mundo."), vec!["Hola", "mundo"]);
        assert_eq!(word_tokens("I don't know"), vec!["I", "don't", "know"]);
        assert_eq!(word_tokens("'quoted'"), vec!["quoted"]);
        assert_eq!(word_tokens("año 2024"), vec!["año", "2024"]);
    }

    #[test]
    fn counts_sentences_and_unique_words() {
        let m = compute("Hoy me siento bien. Hoy quiero hablar! ¿Qué más?");
        assert_eq!(m.total_words, 9);
        // "hoy" repeats
        assert_eq!(m.unique_words, 8);
        assert_eq!(m.sentences, 3);
    }

    #[test]
    fn unterminated_text_is_one_sentence() {
        assert_eq!(compute("sin punto final").sentences, 1);
        assert_eq!(compute("Espera... Ya lo sé.").sentences, 2);
    }

    #[test]
    fn decimal_point_does_not_split_sentences() {
        let m = compute("Hoy dormí 7.5 horas.");
        assert_eq!(m.sentences, 1);
        assert_eq!(word_tokens("Hoy dormí 7.5 horas."), vec!["Hoy", "dormí", "7.5", "horas"]);
    }

    #[test]
    fn abbreviation_before_lowercase_does_not_split_sentences() {
        assert_eq!(compute("Fui al médico, al banco, etc. y luego volví a casa.").sentences, 1);
        assert_eq!(compute("Hablamos de sueño, ansiedad, etc. Luego me fui.").sentences, 2);
    }

    #[test]
    fn curly_apostrophe_stays_inside_word() {
        assert_eq!(word_tokens("I can’t sleep"), vec!["I", "can’t", "sleep"]);
    }

    #[test]
    fn unique_words_ignore_case() {
        assert_eq!(compute("Casa casa CASA").unique_words, 1);
    }
}
