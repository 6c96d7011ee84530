//! Error types for YAML loading and emission.

use thiserror::Error;

/// Result type alias for yogi-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or emitting YAML.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// YAML syntax error at the scanner's 1-based position.
    #[error("{problem} (line {line}, column {column})")]
    Parse {
        problem: String,
        line: usize,
        column: usize,
    },

    /// The emitter failed to render a value.
    #[error("emit failed: {0}")]
    Emit(String),
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        // Marker lines are 1-based; columns are 0-based.
        let marker = *err.marker();
        Error::Parse {
            problem: err.info().to_string(),
            line: marker.line(),
            column: marker.col() + 1,
        }
    }
}

impl From<yaml_rust2::EmitError> for Error {
    fn from(err: yaml_rust2::EmitError) -> Self {
        Error::Emit(err.to_string())
    }
}
