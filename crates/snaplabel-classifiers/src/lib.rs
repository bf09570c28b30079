//! SnapLabel Classifiers
//!
//! Turns image classifier output into display text.
//!
//! - [`ImageClassifier`] is the seam to the inference engine. Thresholding
//!   and top-K selection are configured through [`ClassifierOptions`].
//! - [`LabelStore`] maps output indices to label file lines with a
//!   bounds-checked fallback.
//! - [`format_results`] renders one `"{label}: {percent}%"` line per category.
//! - [`DetectionSession`] wires the pieces together and turns every failure
//!   into degraded display text.

pub mod classifier;
pub mod config;
pub mod formatter;
pub mod labels;
pub mod recorded;
pub mod session;

pub use classifier::{ClassifierOptions, ImageClassifier};
pub use config::AppConfig;
pub use formatter::{format_results, ResultFormatter, NO_RESULTS};
pub use labels::LabelStore;
pub use recorded::RecordedClassifier;
pub use session::{Detection, DetectionOutcome, DetectionSession, NOT_INITIALIZED};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassifierOptions, ImageClassifier};
    pub use crate::formatter::{format_results, ResultFormatter, NO_RESULTS};
    pub use crate::labels::LabelStore;
    pub use crate::session::{Detection, DetectionOutcome, DetectionSession};
}
