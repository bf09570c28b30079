//! Label store mapping classifier output indices to display names.
//!
//! Labels are read once from a text resource, one label per line. Line `i`
//! (0-based) names class index `i`. Lookups are bounds-checked and fall back
//! to a label that embeds the raw identifier, so an out-of-range index never
//! drops or panics on a prediction.

use snaplabel_core::{Category, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Ordered, immutable list of class labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelStore {
    labels: Vec<String>,
}

impl LabelStore {
    /// Create a store from labels already in memory
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Load labels from a file, degrading to an empty store on failure.
    ///
    /// The failure is logged and absorbed; every later lookup falls back.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => {
                info!("Loaded {} labels from {}", store.len(), path.display());
                store
            }
            Err(e) => {
                warn!("Error loading labels from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load labels from a file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse newline-delimited labels. `\n` and `\r\n` endings are accepted.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let labels = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(Self { labels })
    }

    /// Label at `index`, if in range
    pub fn get(&self, index: i32) -> Option<&str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.labels.get(i))
            .map(String::as_str)
    }

    /// Label at `index`, or `Unknown ({index})` when out of range
    pub fn lookup(&self, index: i32) -> Cow<'_, str> {
        match self.get(index) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(fallback_label(&index.to_string())),
        }
    }

    /// Display name for a classifier category.
    ///
    /// In-range indices use the stored label in place of whatever the
    /// classifier reported. Out of range, the classifier's own label is
    /// embedded in the fallback, or the raw index if it supplied none.
    pub fn resolve<'a>(&'a self, category: &Category) -> Cow<'a, str> {
        match self.get(category.index) {
            Some(label) => Cow::Borrowed(label),
            None if category.label.is_empty() => {
                Cow::Owned(fallback_label(&category.index.to_string()))
            }
            None => Cow::Owned(fallback_label(&category.label)),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over `(index, label)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.labels.iter().map(String::as_str).enumerate()
    }
}

fn fallback_label(identifier: &str) -> String {
    format!("Unknown ({})", identifier)
}
