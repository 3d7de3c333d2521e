//! Utility modules for the preprocessor

pub mod error;

pub use error::{PreprocessError, Result};
