//! Configuration loading with command-line overrides

use crate::cli::{Cli, Commands};
use snaplabel_classifiers::AppConfig;
use tracing::debug;

/// Load configuration from file and CLI overrides
pub fn load(cli: &Cli) -> anyhow::Result<AppConfig> {
    // Try to load from file, or use defaults
    let mut config = if cli.config.exists() {
        AppConfig::from_file(&cli.config)?
    } else {
        debug!(
            "Config file {} not found, using defaults",
            cli.config.display()
        );
        AppConfig::default()
    };

    // Apply CLI overrides
    if let Some(labels) = &cli.labels {
        config.labels_path = labels.clone();
    }

    if let Commands::Classify {
        recordings,
        max_results,
        score_threshold,
        ..
    } = &cli.command
    {
        if let Some(recordings) = recordings {
            config.recordings_path = Some(recordings.clone());
        }
        if let Some(max_results) = max_results {
            config.classifier.max_results = *max_results;
        }
        if let Some(score_threshold) = score_threshold {
            config.classifier.score_threshold = *score_threshold;
        }
    }

    config.validate()?;
    Ok(config)
}
