//! Error types for the file-builder pipeline.
//!
//! The validator and encoder themselves never fail; these errors cover the
//! surface around them: reading the batch file, parsing it, and refusing to
//! encode a batch that failed validation.

use thiserror::Error;

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can occur while building a file from a batch document.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Failed to open or read the batch file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The batch document is not valid JSON or has the wrong shape
    #[error("invalid batch file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The batch has blocking validation issues and was not encoded
    #[error("batch failed validation with {errors} error(s)")]
    ValidationFailed { errors: usize },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: ach-file-builder [--check] <batch.json>")]
    MissingArgument,

    /// An option the CLI does not understand
    #[error("Unrecognized option '{0}'. Usage: ach-file-builder [--check] <batch.json>")]
    UnknownOption(String),
}
