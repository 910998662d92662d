use thiserror::Error;

/// Errors that can occur when waiting on the timing facility.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller asked to wait for a number of seconds that is negative, infinite or NaN.
    #[error("invalid duration: {seconds} is not a finite, non-negative number of seconds")]
    InvalidDuration {
        /// The rejected value.
        seconds: f64,
    },
}

/// A specialized `Result` type for timing operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
