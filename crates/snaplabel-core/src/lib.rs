//! SnapLabel Core
//!
//! Types and error handling shared across SnapLabel components:
//! - Classifier output (`Classifications` groups of `Category` predictions)
//! - Encoded image input handed to classifiers
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Category, Classifications, ImageInput};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Category, Classifications, ImageInput};
}
