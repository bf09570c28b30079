//! Configuration for label loading and classifier setup

use crate::classifier::ClassifierOptions;
use serde::{Deserialize, Serialize};
use snaplabel_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Label resource, one label per line
    #[serde(default = "default_labels_path")]
    pub labels_path: PathBuf,

    /// Classifier options
    #[serde(default)]
    pub classifier: ClassifierOptions,

    /// Recorded score tensors used by the recorded classifier
    #[serde(default)]
    pub recordings_path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Validate all nested settings
    pub fn validate(&self) -> Result<()> {
        self.classifier.validate()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            labels_path: default_labels_path(),
            classifier: ClassifierOptions::default(),
            recordings_path: None,
        }
    }
}

fn default_labels_path() -> PathBuf {
    PathBuf::from("labels.txt")
}
