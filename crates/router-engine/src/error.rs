//! Error types for the engine crate.
//!
//! `AgentResolver::resolve` itself is infallible by contract; these errors
//! exist for the injected I/O seams and the workflow pipeline, which the
//! resolver catches and degrades from.

use thiserror::Error;

/// Errors surfaced by catalog/config sources and the pipeline.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The injected catalog listing failed.
    #[error("catalog source failed: {0}")]
    Catalog(String),

    /// The injected project-config load failed.
    #[error("config source failed: {0}")]
    Config(String),

    /// A phase runner failed inside the workflow pipeline.
    #[error("phase runner failed: {0}")]
    Runner(String),

    /// Filesystem error from a file-backed source.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
