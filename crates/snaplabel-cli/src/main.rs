//! SnapLabel CLI
//!
//! Loads the label file, runs images through a classifier and prints one
//! `"{label}: {percent}%"` line per predicted category.

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusHandle;
use snaplabel_classifiers::{
    format_results, AppConfig, DetectionSession, ImageClassifier, LabelStore, RecordedClassifier,
};
use snaplabel_core::{Classifications, Error};
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

mod cli;
mod config;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    let metrics_handle = if cli.metrics {
        Some(init_metrics()?)
    } else {
        None
    };

    let config = config::load(&cli)?;
    debug!("Configuration: {:?}", config);

    let labels = LabelStore::load(&config.labels_path);

    match &cli.command {
        Commands::Labels => print_labels(&labels),
        Commands::Format { input } => print_formatted(&labels, input)?,
        Commands::Classify { images, .. } => {
            let session = build_session(&config, labels).await;
            for image in images {
                let detection = session.detect_path(image).await;
                info!("{}: {}", image.display(), detection.outcome.as_str());
                if images.len() > 1 {
                    println!("== {}", image.display());
                }
                print_text(&detection.text);
            }
        }
    }

    if let Some(handle) = metrics_handle {
        eprint!("{}", handle.render());
    }

    Ok(())
}

fn print_labels(labels: &LabelStore) {
    println!("{} labels", labels.len());
    for (index, label) in labels.iter() {
        println!("{:>5}  {}", index, label);
    }
}

fn print_formatted(labels: &LabelStore, input: &str) -> Result<()> {
    let json = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read classifier output from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read classifier output from {}", input))?
    };

    let groups: Vec<Classifications> =
        serde_json::from_str(&json).context("Classifier output is not valid JSON")?;
    debug!("Formatting {} classification groups", groups.len());

    print_text(&format_results(labels, &groups));
    Ok(())
}

/// Build the detection session. A classifier that fails to load leaves the
/// session running uninitialized.
async fn build_session(config: &AppConfig, labels: LabelStore) -> DetectionSession {
    let classifier = match &config.recordings_path {
        Some(path) => RecordedClassifier::from_file(config.classifier.clone(), path)
            .await
            .map(|c| Arc::new(c) as Arc<dyn ImageClassifier>),
        None => Err(Error::config("no recordings_path configured")),
    };

    DetectionSession::new(labels).with_classifier_result(classifier)
}

/// Formatted lines carry their own terminators; sentinels do not.
fn print_text(text: &str) {
    if text.ends_with('\n') || text.is_empty() {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("snaplabel=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snaplabel=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Install the Prometheus recorder and return a handle for rendering
fn init_metrics() -> Result<PrometheusHandle> {
    use metrics_exporter_prometheus::PrometheusBuilder;

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "snaplabel_detections_total",
        "Total number of detection requests by outcome"
    );
    metrics::describe_histogram!(
        "snaplabel_classify_latency_us",
        metrics::Unit::Microseconds,
        "Classifier latency in microseconds"
    );

    Ok(handle)
}
