use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid thresholds: low ({low}) must be below high ({high})")]
    Thresholds { low: usize, high: usize },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Word-count thresholds driving the progress bar and the generate button.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WritingConfig {
    /// Counts below this are "low".
    pub ideal_min: usize,
    /// Counts above this are "high"; also the 100% mark of the progress bar.
    pub ideal_max: usize,
    /// Generate stays disabled below this many words.
    pub min_words_to_generate: usize,
    pub words_per_minute: usize,
}

impl Default for WritingConfig {
    fn default() -> Self {
        Self {
            ideal_min: 150,
            ideal_max: 300,
            min_words_to_generate: 50,
            words_per_minute: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub min_font_size: f64,
    pub max_font_size: f64,
    /// Share of words drawn vertically.
    pub vertical_ratio: f64,
    pub seed: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 100,
            min_font_size: 12.0,
            max_font_size: 72.0,
            vertical_ratio: 0.1,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub writing: WritingConfig,
    pub cloud: CloudConfig,
}

impl AppConfig {
    fn validate(self) -> Result<Self, ConfigError> {
        if self.writing.ideal_min >= self.writing.ideal_max {
            return Err(ConfigError::Thresholds {
                low: self.writing.ideal_min,
                high: self.writing.ideal_max,
            });
        }
        Ok(self)
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()
}
