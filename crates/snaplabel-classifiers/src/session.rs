//! Detection session: image in, display text out.
//!
//! Every outcome becomes text for the display surface. The accompanying
//! [`DetectionOutcome`] lets callers tell "ran but found nothing" apart from
//! "didn't run".

use crate::classifier::ImageClassifier;
use crate::formatter::{ResultFormatter, NO_RESULTS};
use crate::labels::LabelStore;
use snaplabel_core::{Classifications, Error, ImageInput, Result};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Text shown when no classifier was set up
pub const NOT_INITIALIZED: &str = "Object detector not initialized";

/// How a detection request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionOutcome {
    /// Classifier returned at least one group
    Classified,
    /// Classifier ran and returned no groups
    NoResults,
    /// No classifier available
    NotInitialized,
    /// Classifier returned an error
    Failed,
    /// Image could not be loaded
    ImageUnreadable,
}

impl DetectionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classified => "classified",
            Self::NoResults => "no_results",
            Self::NotInitialized => "not_initialized",
            Self::Failed => "failed",
            Self::ImageUnreadable => "image_unreadable",
        }
    }
}

/// Display text plus outcome for one request
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub text: String,
    pub outcome: DetectionOutcome,
}

impl Detection {
    fn new(text: impl Into<String>, outcome: DetectionOutcome) -> Self {
        Self {
            text: text.into(),
            outcome,
        }
    }
}

/// Pairs an optional classifier with the result formatter
pub struct DetectionSession {
    formatter: ResultFormatter,
    classifier: Option<Arc<dyn ImageClassifier>>,
}

impl DetectionSession {
    /// Create a session without a classifier
    pub fn new(labels: LabelStore) -> Self {
        Self {
            formatter: ResultFormatter::new(labels),
            classifier: None,
        }
    }

    /// Attach a classifier
    pub fn with_classifier(mut self, classifier: Arc<dyn ImageClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Attach the classifier if it was built successfully.
    ///
    /// A failed build is logged and the session keeps running without one,
    /// answering every request with [`NOT_INITIALIZED`].
    pub fn with_classifier_result(self, classifier: Result<Arc<dyn ImageClassifier>>) -> Self {
        match classifier {
            Ok(classifier) => {
                let options = classifier.options();
                info!(
                    "ImageClassifier '{}' initialized (model: {}, top {}, threshold {})",
                    classifier.name(),
                    options.model,
                    options.max_results,
                    options.score_threshold
                );
                self.with_classifier(classifier)
            }
            Err(e) => {
                warn!("Error initializing ImageClassifier: {}", e);
                self
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.classifier.is_some()
    }

    /// Classify an image already in memory
    pub async fn detect(&self, image: &ImageInput) -> Detection {
        let detection = match self.classify(image).await {
            Ok(groups) if groups.is_empty() => {
                Detection::new(NO_RESULTS, DetectionOutcome::NoResults)
            }
            Ok(groups) => {
                Detection::new(self.formatter.format(&groups), DetectionOutcome::Classified)
            }
            Err(Error::NotInitialized) => {
                Detection::new(NOT_INITIALIZED, DetectionOutcome::NotInitialized)
            }
            Err(e) => {
                warn!(image = %image.name, "Classification failed: {}", e);
                Detection::new(
                    format!("Error during detection: {}", e),
                    DetectionOutcome::Failed,
                )
            }
        };

        record(detection)
    }

    /// Load an image from disk and classify it
    pub async fn detect_path(&self, path: impl AsRef<Path>) -> Detection {
        match ImageInput::from_path(path.as_ref()) {
            Ok(image) => self.detect(&image).await,
            Err(e) => {
                warn!("Error loading image: {}", e);
                let message = match e {
                    Error::Image(message) => message,
                    other => other.to_string(),
                };
                record(Detection::new(
                    format!("Error loading image: {}", message),
                    DetectionOutcome::ImageUnreadable,
                ))
            }
        }
    }

    async fn classify(&self, image: &ImageInput) -> Result<Vec<Classifications>> {
        let classifier = self.classifier.as_ref().ok_or(Error::NotInitialized)?;

        let start = Instant::now();
        let result = classifier.classify(image).await;
        let latency_us = start.elapsed().as_micros() as u64;

        metrics::histogram!(
            "snaplabel_classify_latency_us",
            "classifier" => classifier.name().to_string()
        )
        .record(latency_us as f64);
        debug!(
            image = %image.name,
            classifier = classifier.name(),
            latency_us,
            "Classification finished"
        );

        result
    }
}

fn record(detection: Detection) -> Detection {
    metrics::counter!("snaplabel_detections_total", "outcome" => detection.outcome.as_str())
        .increment(1);
    detection
}
