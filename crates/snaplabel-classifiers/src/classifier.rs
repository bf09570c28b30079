//! Image classifier trait and classifier options

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use snaplabel_core::{Classifications, Error, ImageInput, Result};

/// Trait for all image classifiers
///
/// Implementations own their thresholding and top-K selection via
/// [`ClassifierOptions`]; callers consume the returned groups as-is.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    /// Classify the given image
    async fn classify(&self, image: &ImageInput) -> Result<Vec<Classifications>>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Options the classifier was built with
    fn options(&self) -> &ClassifierOptions;
}

/// Options applied by a classifier to its own output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierOptions {
    /// Model file the classifier was created from
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum number of categories returned per head
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Categories scoring below this are dropped
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,
}

impl ClassifierOptions {
    /// Set the maximum number of results per head
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the minimum score
    pub fn with_score_threshold(mut self, score_threshold: f32) -> Self {
        self.score_threshold = score_threshold;
        self
    }

    /// Check option ranges
    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(Error::config("max_results must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(Error::config(format!(
                "score_threshold must be within [0, 1], got {}",
                self.score_threshold
            )));
        }
        Ok(())
    }

    /// Check if a score passes the threshold
    pub fn accepts(&self, score: f32) -> bool {
        score >= self.score_threshold
    }
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_results: default_max_results(),
            score_threshold: default_score_threshold(),
        }
    }
}

fn default_model() -> String {
    "mobilenet_quant_v1_224.tflite".to_string()
}

fn default_max_results() -> usize {
    3
}

fn default_score_threshold() -> f32 {
    0.3
}
