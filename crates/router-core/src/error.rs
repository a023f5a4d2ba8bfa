//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while building core data structures.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A pattern literal failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An unrecognized phase name was given.
    #[error("unknown phase: {0}")]
    UnknownPhase(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::UnknownPhase("deploy".into());
        assert_eq!(err.to_string(), "unknown phase: deploy");
    }
}
