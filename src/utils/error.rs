//! Error handling for the preprocessor
//!
//! Parse errors and structural errors (missing `application`, ill-typed
//! `environments`/`resources`/`spec`) both surface as [`PreprocessError::Yaml`];
//! nothing is caught or recovered internally.

use thiserror::Error;

/// Result type alias for the preprocessor
pub type Result<T> = std::result::Result<T, PreprocessError>;

/// Main error type for the preprocessor
#[derive(Error, Debug)]
pub enum PreprocessError {
    /// YAML parse and structure errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors on stdin/stdout
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
