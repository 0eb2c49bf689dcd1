//! Error handling for Sigkit
//!
//! Provides error types for the library's components:
//! - Signal errors (registration/lookup failures)
//! - Filesize errors (string parsing)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::filesize::FilesizeError;
use crate::signal::SignalError;

/// Main error type for Sigkit
///
/// A unified error type that can represent any error from the library.
/// This is the primary error type used in public APIs, and the error type
/// slots report through on emission.
#[derive(Error, Debug)]
pub enum Error {
    /// Signal registry error
    #[error(transparent)]
    Signal(#[from] SignalError),

    /// Byte-size parsing error
    #[error(transparent)]
    Filesize(#[from] FilesizeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a signal error
    pub fn is_signal_error(&self) -> bool {
        matches!(self, Error::Signal(_))
    }

    /// Check if this is a filesize error
    pub fn is_filesize_error(&self) -> bool {
        matches!(self, Error::Filesize(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
