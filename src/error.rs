//! Error types for litemark.
//!
//! Rendering itself never fails. These errors come from the helpers that
//! read Markdown from disk or serialize render results.

use std::io;
use thiserror::Error;

/// Result type alias for litemark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source file is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error while serializing a render result.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
