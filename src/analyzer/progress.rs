use crate::config::WritingConfig;
use crate::model::{Progress, ProgressBucket};

/// Number of whitespace-delimited tokens. No punctuation handling.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Both ends of the ideal range are inclusive.
pub fn classify(count: usize, cfg: &WritingConfig) -> ProgressBucket {
    if count < cfg.ideal_min {
        ProgressBucket::Low
    } else if count <= cfg.ideal_max {
        ProgressBucket::Ideal
    } else {
        ProgressBucket::High
    }
}

/// Fill ratio of the progress bar, clamped to 1.0.
pub fn progress_fraction(count: usize, cfg: &WritingConfig) -> f64 {
    if cfg.ideal_max == 0 {
        return 1.0;
    }
    (count as f64 / cfg.ideal_max as f64).min(1.0)
}

/// Whole minutes, never below one.
pub fn estimated_minutes(count: usize, cfg: &WritingConfig) -> usize {
    (count / cfg.words_per_minute.max(1)).max(1)
}

pub fn generate_enabled(count: usize, cfg: &WritingConfig) -> bool {
    count >= cfg.min_words_to_generate
}

pub fn progress(text: &str, cfg: &WritingConfig) -> Progress {
    let count = word_count(text);
    let bucket = classify(count, cfg);
    Progress {
        word_count: count,
        bucket,
        message: bucket.message(),
        color: bucket.color(),
        fraction: progress_fraction(count, cfg),
        estimated_minutes: estimated_minutes(count, cfg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> WritingConfig {
        WritingConfig::default()
    }

    #[test]
    fn counts_whitespace_tokens() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("hola mundo"), 2);
        assert_eq!(word_count("  uno   dos   tres  "), 3);
        assert_eq!(word_count("línea\nnueva\tcon tab"), 4);
        // punctuation stays attached
        assert_eq!(word_count("hola , mundo."), 3);
    }

    #[test]
    fn buckets_are_inclusive_at_the_edges() {
        assert_eq!(classify(0, &cfg()), ProgressBucket::Low);
        assert_eq!(classify(149, &cfg()), ProgressBucket::Low);
        assert_eq!(classify(150, &cfg()), ProgressBucket::Ideal);
        assert_eq!(classify(300, &cfg()), ProgressBucket::Ideal);
        assert_eq!(classify(301, &cfg()), ProgressBucket::High);
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(progress_fraction(0, &cfg()), 0.0);
        assert_eq!(progress_fraction(150, &cfg()), 0.5);
        assert_eq!(progress_fraction(300, &cfg()), 1.0);
        assert_eq!(progress_fraction(600, &cfg()), 1.0);
    }

    #[test]
    fn minutes_never_below_one() {
        assert_eq!(estimated_minutes(0, &cfg()), 1);
        assert_eq!(estimated_minutes(30, &cfg()), 1);
        assert_eq!(estimated_minutes(59, &cfg()), 1);
        assert_eq!(estimated_minutes(61, &cfg()), 2);
        assert_eq!(estimated_minutes(300, &cfg()), 10);
    }

    #[test]
    fn generate_needs_fifty_words() {
        assert!(!generate_enabled(49, &cfg()));
        assert!(generate_enabled(50, &cfg()));
    }

    #[test]
    fn progress_bundles_bucket_details() {
        let text = vec!["palabra"; 160].join(" ");
        let p = progress(&text, &cfg());
        assert_eq!(p.word_count, 160);
        assert_eq!(p.bucket, ProgressBucket::Ideal);
        assert_eq!(p.color, "#2ecc71");
        assert_eq!(p.estimated_minutes, 5);
    }
}
