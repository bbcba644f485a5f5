//! Word cloud layout and SVG output.
//!
//! Words are placed largest first along an elliptical Archimedean spiral
//! starting at the canvas centre. A word that finds no free spot is retried
//! at smaller font sizes before being dropped. Colours and orientation come
//! from a seeded RNG so a given text always renders the same cloud.

use crate::config::CloudConfig;
use crate::model::{GenerateError, WordFrequency};
use crate::utils::xml_escape;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

const PALETTE: [&str; 8] = [
    "#440154", "#46327e", "#365c8d", "#277f8e", "#1fa187", "#4ac16d", "#27ae60", "#2c3e50",
];

/// Average glyph advance relative to the font size.
const GLYPH_WIDTH: f64 = 0.6;
const LINE_HEIGHT: f64 = 1.15;
const PADDING: f64 = 2.0;
const SPIRAL_STEP: f64 = 0.12;
const SHRINK_STEP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn centered(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        Self {
            x: cx - w / 2.0,
            y: cy - h / 2.0,
            w,
            h,
        }
    }

    fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    fn inside(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub count: usize,
    pub font_size: f64,
    /// Centre of the word's box.
    pub x: f64,
    pub y: f64,
    pub vertical: bool,
    pub color: &'static str,
    rect: Rect,
}

fn text_box(word: &str, font_size: f64, vertical: bool) -> (f64, f64) {
    let w = word.chars().count() as f64 * font_size * GLYPH_WIDTH + PADDING * 2.0;
    let h = font_size * LINE_HEIGHT + PADDING * 2.0;
    if vertical { (h, w) } else { (w, h) }
}

fn find_spot(w: f64, h: f64, placed: &[PlacedWord], cfg: &CloudConfig) -> Option<Rect> {
    let (width, height) = (cfg.width as f64, cfg.height as f64);
    let (cx, cy) = (width / 2.0, height / 2.0);
    let aspect = width / height.max(1.0);
    let max_radius = width.max(height);

    let mut theta: f64 = 0.0;
    loop {
        let r = theta;
        if r > max_radius {
            return None;
        }
        let candidate = Rect::centered(cx + r * theta.cos() * aspect, cy + r * theta.sin(), w, h);
        if candidate.inside(width, height) && !placed.iter().any(|p| p.rect.intersects(&candidate)) {
            return Some(candidate);
        }
        theta += SPIRAL_STEP;
    }
}

/// Places up to `max_words` words. `freqs` must be sorted by count, highest first.
pub fn layout(freqs: &[WordFrequency], cfg: &CloudConfig) -> Result<Vec<PlacedWord>, GenerateError> {
    let max_count = freqs.iter().map(|f| f.count).max().ok_or(GenerateError::EmptyCorpus)?;
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let vertical_ratio = cfg.vertical_ratio.clamp(0.0, 1.0);
    let mut placed: Vec<PlacedWord> = Vec::new();

    for freq in freqs.iter().take(cfg.max_words) {
        let relative = freq.count as f64 / max_count as f64;
        let mut font_size = cfg.min_font_size + (cfg.max_font_size - cfg.min_font_size) * relative;
        let vertical = rng.random_bool(vertical_ratio);
        let color = PALETTE[rng.random_range(0..PALETTE.len())];

        loop {
            let (w, h) = text_box(&freq.word, font_size, vertical);
            if let Some(rect) = find_spot(w, h, &placed, cfg) {
                placed.push(PlacedWord {
                    word: freq.word.clone(),
                    count: freq.count,
                    font_size,
                    x: rect.x + rect.w / 2.0,
                    y: rect.y + rect.h / 2.0,
                    vertical,
                    color,
                    rect,
                });
                break;
            }
            font_size -= SHRINK_STEP;
            if font_size < cfg.min_font_size {
                debug!("No room left for '{}', skipping", freq.word);
                break;
            }
        }
    }

    if placed.is_empty() {
        return Err(GenerateError::Collaborator(format!(
            "el lienzo de {}x{} es demasiado pequeño para la nube de palabras",
            cfg.width, cfg.height
        )));
    }
    Ok(placed)
}

pub fn to_svg(words: &[PlacedWord], cfg: &CloudConfig) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="word-cloud" viewBox="0 0 {w} {h}" width="{w}" height="{h}" role="img" aria-label="Nube de palabras">"#,
        w = cfg.width,
        h = cfg.height
    );
    svg.push_str(r#"<rect width="100%" height="100%" fill="white"/>"#);
    for word in words {
        let rotate = if word.vertical {
            format!(r#" transform="rotate(-90 {:.1} {:.1})""#, word.x, word.y)
        } else {
            String::new()
        };
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" font-family="Helvetica, Arial, sans-serif" fill="{}" text-anchor="middle" dominant-baseline="central" data-count="{}"{}>{}</text>"#,
            word.x,
            word.y,
            word.font_size,
            word.color,
            word.count,
            rotate,
            xml_escape(&word.word)
        ));
    }
    svg.push_str("</svg>");
    svg
}

/// Lays out and renders in one step.
pub fn render(freqs: &[WordFrequency], cfg: &CloudConfig) -> Result<String, GenerateError> {
    let words = layout(freqs, cfg)?;
    debug!("Word cloud placed {} of {} words", words.len(), freqs.len());
    Ok(to_svg(&words, cfg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(word: &str, count: usize) -> WordFrequency {
        WordFrequency {
            word: word.to_string(),
            count,
        }
    }

    fn sample() -> Vec<WordFrequency> {
        vec![
            freq("trabajo", 6),
            freq("familia", 4),
            freq("descanso", 3),
            freq("miedo", 2),
            freq("cambio", 1),
            freq("proyecto", 1),
        ]
    }

    #[test]
    fn empty_frequencies_are_an_error() {
        let err = layout(&[], &CloudConfig::default()).unwrap_err();
        assert!(matches!(err, GenerateError::EmptyCorpus));
    }

    #[test]
    fn words_do_not_overlap_and_stay_on_canvas() {
        let cfg = CloudConfig::default();
        let words = layout(&sample(), &cfg).unwrap();
        assert_eq!(words.len(), 6);
        for (i, a) in words.iter().enumerate() {
            assert!(a.rect.inside(cfg.width as f64, cfg.height as f64));
            for b in &words[i + 1..] {
                assert!(!a.rect.intersects(&b.rect), "{} overlaps {}", a.word, b.word);
            }
        }
    }

    #[test]
    fn most_frequent_word_is_largest() {
        let cfg = CloudConfig::default();
        let words = layout(&sample(), &cfg).unwrap();
        assert_eq!(words[0].word, "trabajo");
        assert_eq!(words[0].font_size, cfg.max_font_size);
        assert!(words.iter().skip(1).all(|w| w.font_size < words[0].font_size));
    }

    #[test]
    fn respects_max_words() {
        let cfg = CloudConfig {
            max_words: 2,
            ..CloudConfig::default()
        };
        assert_eq!(layout(&sample(), &cfg).unwrap().len(), 2);
    }

    #[test]
    fn same_seed_same_svg() {
        let cfg = CloudConfig::default();
        assert_eq!(render(&sample(), &cfg).unwrap(), render(&sample(), &cfg).unwrap());
    }

    #[test]
    fn tiny_canvas_fails() {
        let cfg = CloudConfig {
            width: 10,
            height: 10,
            ..CloudConfig::default()
        };
        assert!(matches!(
            layout(&sample(), &cfg),
            Err(GenerateError::Collaborator(_))
        ));
    }

    #[test]
    fn svg_escapes_words() {
        let cfg = CloudConfig::default();
        let svg = render(&[freq("<b>", 1)], &cfg).unwrap();
        assert!(svg.contains("&lt;b&gt;"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }
}
