// Render module: visual collaborators and the HTML page.

pub mod bar_chart;
pub mod page;
pub mod word_cloud;

use crate::analyzer::{PolarityAnalyzer, metrics, sentiment_display};
use crate::config::CloudConfig;
use crate::model::{GenerateError, Visualization};
use crate::normalizer::WordNormalizer;
use std::sync::Arc;
use tokio::task::spawn_blocking;
use tracing::info;

/// Number of most frequent words listed next to the cloud, at most the
/// number the cloud draws.
const TOP_WORDS: usize = 10;

/// Produces the word cloud, sentiment chart and metrics for a text.
#[async_trait::async_trait]
pub trait Visualizer: Send + Sync {
    async fn generate(&self, text: &str) -> Result<Visualization, GenerateError>;
}

/// Default visualizer: SVG word cloud and bar chart, lexicon sentiment.
pub struct ChartVisualizer {
    cloud: CloudConfig,
    normalizer: Arc<WordNormalizer>,
    analyzer: Arc<dyn PolarityAnalyzer>,
}

impl ChartVisualizer {
    pub fn new(cloud: CloudConfig, analyzer: Arc<dyn PolarityAnalyzer>) -> Self {
        Self {
            cloud,
            normalizer: Arc::new(WordNormalizer::new()),
            analyzer,
        }
    }

    pub fn with_normalizer(mut self, normalizer: WordNormalizer) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }
}

#[async_trait::async_trait]
impl Visualizer for ChartVisualizer {
    async fn generate(&self, text: &str) -> Result<Visualization, GenerateError> {
        let text: Arc<str> = Arc::from(text);

        let cloud_task = {
            let text = text.clone();
            let normalizer = self.normalizer.clone();
            let cfg = self.cloud.clone();
            spawn_blocking(move || {
                let freqs = normalizer.frequencies(&text);
                word_cloud::render(&freqs, &cfg).map(|svg| (svg, freqs))
            })
        };
        let sentiment_task = {
            let text = text.clone();
            let analyzer = self.analyzer.clone();
            spawn_blocking(move || analyzer.analyze(&text))
        };
        let metrics_task = {
            let text = text.clone();
            spawn_blocking(move || metrics::compute(&text))
        };

        let (cloud, scores, metrics) = futures::try_join!(cloud_task, sentiment_task, metrics_task)?;
        let (word_cloud_svg, mut freqs) = cloud?;
        freqs.truncate(TOP_WORDS.min(self.cloud.max_words));

        let sentiment = sentiment_display(scores);
        let sentiment_chart_svg = bar_chart::render_sentiment(&sentiment);
        info!(
            "Visualization ready: polarity = {:.2}, subjectivity = {:.2}, {} words",
            scores.polarity, scores.subjectivity, metrics.total_words
        );

        Ok(Visualization {
            word_cloud_svg,
            sentiment_chart_svg,
            scores,
            sentiment,
            metrics,
            top_words: freqs,
        })
    }
}
