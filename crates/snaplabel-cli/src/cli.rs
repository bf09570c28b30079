use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snaplabel")]
#[command(
    author,
    version,
    about = "Classify images and print labeled confidence scores"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "snaplabel.yaml")]
    pub config: PathBuf,

    /// Label file, one label per line (overrides config)
    #[arg(short, long, global = true, env = "SNAPLABEL_LABELS")]
    pub labels: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print Prometheus metrics to stderr on exit
    #[arg(long, global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the loaded label list
    Labels,

    /// Format classifier output (JSON list of classification groups)
    Format {
        /// Input file, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,
    },

    /// Classify images with the recorded classifier
    Classify {
        /// Image files
        #[arg(required = true)]
        images: Vec<PathBuf>,

        /// Recorded score tensors (overrides config)
        #[arg(short, long)]
        recordings: Option<PathBuf>,

        /// Maximum results per head (overrides config)
        #[arg(long)]
        max_results: Option<usize>,

        /// Minimum score (overrides config)
        #[arg(long)]
        score_threshold: Option<f32>,
    },
}
