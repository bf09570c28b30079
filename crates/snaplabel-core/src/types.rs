//! Core types for SnapLabel

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single prediction produced by an image classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Position in the classifier's output tensor (and in the label file)
    pub index: i32,

    /// Label supplied by the classifier itself, if any
    #[serde(default)]
    pub label: String,

    /// Confidence score (0.0-1.0)
    pub score: f32,
}

impl Category {
    /// Create a category without a classifier-supplied label
    pub fn new(index: i32, score: f32) -> Self {
        Self {
            index,
            label: String::new(),
            score,
        }
    }

    /// Create a category carrying the classifier's own label
    pub fn with_label(index: i32, label: impl Into<String>, score: f32) -> Self {
        Self {
            index,
            label: label.into(),
            score,
        }
    }
}

/// One inference pass worth of predictions for a single output head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classifications {
    /// Output head this group came from
    #[serde(default)]
    pub head_index: usize,

    /// Predictions in the order the classifier returned them
    pub categories: Vec<Category>,
}

impl Classifications {
    /// Create a group for head 0
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            head_index: 0,
            categories,
        }
    }

    /// Create a group for a specific head
    pub fn for_head(head_index: usize, categories: Vec<Category>) -> Self {
        Self {
            head_index,
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Encoded image handed to a classifier
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// File name (or other caller-chosen identifier)
    pub name: String,

    /// Raw encoded bytes
    pub bytes: Vec<u8>,
}

impl ImageInput {
    /// Create an image from bytes already in memory
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read an image from disk.
    ///
    /// The image name is the file name component of `path`. Unreadable and
    /// empty files both map to [`Error::Image`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| Error::image(format!("{}: {}", path.display(), e)))?;

        if bytes.is_empty() {
            return Err(Error::image(format!("{}: file is empty", path.display())));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!(image = %name, bytes = bytes.len(), "Loaded image");

        Ok(Self { name, bytes })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
