//! Classifier that replays recorded score tensors.
//!
//! Recordings map an image name to one raw score vector per output head:
//!
//! ```json
//! { "cat.jpg": [[0.01, 0.93, 0.06]] }
//! ```
//!
//! Each head is post-processed with the classifier's [`ClassifierOptions`]:
//! scores under the threshold are dropped, the rest ordered by descending
//! score (ties keep index order) and cut to `max_results`.

use crate::classifier::{ClassifierOptions, ImageClassifier};
use async_trait::async_trait;
use snaplabel_core::{Category, Classifications, Error, ImageInput, Result};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Replays recorded per-image score tensors
pub struct RecordedClassifier {
    name: String,
    options: ClassifierOptions,
    recordings: HashMap<String, Vec<Vec<f32>>>,
}

impl RecordedClassifier {
    /// Create a classifier from recordings already in memory
    pub fn new(
        options: ClassifierOptions,
        recordings: HashMap<String, Vec<Vec<f32>>>,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            name: "recorded".to_string(),
            options,
            recordings,
        })
    }

    /// Parse recordings from JSON
    pub fn from_json(options: ClassifierOptions, json: &str) -> Result<Self> {
        let recordings = serde_json::from_str(json)?;
        Self::new(options, recordings)
    }

    /// Load recordings from a JSON file
    pub async fn from_file(options: ClassifierOptions, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::classifier(format!(
                "Failed to read recordings {}: {}",
                path.display(),
                e
            ))
        })?;
        let classifier = Self::from_json(options, &json)?;
        info!(
            "Recorded classifier initialized with {} images (model: {})",
            classifier.recordings.len(),
            classifier.options.model
        );
        Ok(classifier)
    }

    /// Number of recorded images
    pub fn len(&self) -> usize {
        self.recordings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recordings.is_empty()
    }

    fn top_categories(&self, scores: &[f32]) -> Vec<Category> {
        let mut ranked: Vec<(usize, f32)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, score)| self.options.accepts(*score))
            .collect();

        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        ranked.truncate(self.options.max_results);

        ranked
            .into_iter()
            .map(|(index, score)| {
                Category::with_label(index as i32, format!("class_{}", index), score)
            })
            .collect()
    }
}

#[async_trait]
impl ImageClassifier for RecordedClassifier {
    async fn classify(&self, image: &ImageInput) -> Result<Vec<Classifications>> {
        let heads = self.recordings.get(&image.name).ok_or_else(|| {
            Error::classifier(format!("no recording for image '{}'", image.name))
        })?;

        let groups: Vec<Classifications> = heads
            .iter()
            .enumerate()
            .map(|(head_index, scores)| {
                Classifications::for_head(head_index, self.top_categories(scores))
            })
            .collect();

        debug!(
            image = %image.name,
            heads = groups.len(),
            "Replayed recorded classification"
        );

        Ok(groups)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> &ClassifierOptions {
        &self.options
    }
}
