use std::{fmt, io};

use thiserror::Error;

use crate::Encoding;

/// Errors that can occur when rendering, writing or capturing text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A value's `Display` implementation reported an error while being formatted.
    #[error("formatting failed")]
    Format(#[from] fmt::Error),

    /// Writing to an output sink or managing a capture target failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Captured output was not valid in the requested encoding.
    #[error("captured output is not valid {encoding}: invalid byte at offset {offset}")]
    Decode {
        /// The encoding the captured bytes were decoded with.
        encoding: Encoding,

        /// Offset of the first byte that could not be decoded.
        offset: usize,
    },

    /// The operation is not available on this platform.
    #[error("{operation} is not supported on this platform")]
    Unsupported {
        /// What the caller tried to do.
        operation: &'static str,
    },

    /// A print mode name did not match any known mode.
    #[error("unknown print mode '{name}'")]
    UnknownMode {
        /// The name that was not recognized.
        name: String,
    },

    /// A time span was negative, infinite or NaN.
    #[error("invalid time span: {seconds} is not a finite, non-negative number of seconds")]
    InvalidTime {
        /// The rejected value.
        seconds: f64,
    },
}

/// A specialized `Result` type for text operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
