use thiserror::Error;

/// A failed precondition or an unfinished code path.
///
/// The three kinds are kept apart so callers can tell a bad input from a bad state from missing
/// code: match on the variant or compare [`kind()`][Self::kind].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A precondition on the caller's inputs does not hold.
    #[error("invalid argument{}", suffix(.0.as_deref()))]
    InvalidArgument(Option<String>),

    /// A precondition on the state of an object or the program does not hold.
    #[error("invalid state{}", suffix(.0.as_deref()))]
    InvalidState(Option<String>),

    /// The code path has not been written yet.
    #[error("not implemented{}", suffix(.0.as_deref()))]
    NotImplemented(Option<String>),
}

/// The kind of an [`Error`], without its message.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
    /// See [`Error::InvalidState`].
    InvalidState,
    /// See [`Error::NotImplemented`].
    NotImplemented,
}

impl Error {
    /// The kind of failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }

    /// The message given when the error was raised, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument(message)
            | Self::InvalidState(message)
            | Self::NotImplemented(message) => message.as_deref(),
        }
    }
}

fn suffix(message: Option<&str>) -> String {
    message.map_or_else(String::new, |message| format!(": {message}"))
}

/// A specialized `Result` type for this crate, returning the crate's [`Error`] type as the error
/// value.
pub type Result<T> = std::result::Result<T, Error>;
