//! Error types for this crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`SentimentError`] as the error type.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A [`Result`](std::result::Result) alias using [`SentimentError`] as the error type.
pub type Result<T> = std::result::Result<T, SentimentError>;

/// The unified error type for all crate errors.
///
/// # Example
///
/// ```rust,no_run
/// use lexicon_pipelines::error::SentimentError;
///
/// fn handle_error(e: SentimentError) {
///     match &e {
///         SentimentError::FileAccess { path, .. } => {
///             // Missing or unreadable file - fix the path
///             eprintln!("cannot use {}", path.display());
///         }
///         SentimentError::SelfCheck(_) => {
///             // Lexicons disagree with expected labels
///         }
///         SentimentError::Unexpected(_) => {
///             // Internal error - report bug
///             eprintln!("Internal error: {e}");
///         }
///         _ => {
///             // Future error variants
///         }
///     }
/// }
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SentimentError {
    /// A lexicon, review, or output file could not be opened, read, or written.
    #[error("cannot access '{}': {source}", path.display())]
    FileAccess {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The self-check found labels that differ from the expected ones.
    #[error("self-check failed: {0}")]
    SelfCheck(String),

    /// Serializing a prediction failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Internal error. Report if seen.
    #[error("{0}")]
    Unexpected(String),
}

impl SentimentError {
    pub(crate) fn file_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        SentimentError::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
