//! Precondition checks that report failures as [`Error`] values.
//!
//! The functions take no message; the macros of the same names accept `format!`-style arguments,
//! which are only formatted when the check fails.

use crate::{Error, Result};

/// Fails with [`Error::InvalidArgument`] if `condition` is false.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] without a message if `condition` is false.
pub fn require(condition: bool) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidArgument(None))
    }
}

/// Fails with [`Error::InvalidState`] if `condition` is false.
///
/// # Errors
///
/// Returns [`Error::InvalidState`] without a message if `condition` is false.
pub fn require_state(condition: bool) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidState(None))
    }
}

/// Returns the value inside `value`, or fails with [`Error::InvalidArgument`] if it is absent.
///
/// ```rust
/// use tiny_utils::check_non_null;
///
/// assert_eq!(check_non_null(Some(3)), Ok(3));
/// assert!(check_non_null(None::<u32>).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `value` is `None`.
pub fn check_non_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::InvalidArgument(Some("required value is absent".to_string())))
}

/// Marks a code path that has not been written yet. Always fails.
///
/// # Errors
///
/// Always returns [`Error::NotImplemented`] without a message.
#[cfg_attr(test, mutants::skip)] // Nothing to mutate that would not also change the signature.
pub fn not_implemented<T>() -> Result<T> {
    Err(Error::NotImplemented(None))
}

/// Fails with [`Error::InvalidArgument`] if the condition is false, with an optional
/// `format!`-style message.
///
/// ```rust
/// use tiny_utils::{Error, require};
///
/// fn halve(n: u32) -> Result<u32, Error> {
///     require!(n % 2 == 0, "{n} is odd")?;
///     Ok(n / 2)
/// }
///
/// assert_eq!(halve(4), Ok(2));
/// assert_eq!(halve(3).unwrap_err().message(), Some("3 is odd"));
/// ```
#[macro_export]
macro_rules! require {
    ($condition:expr $(,)?) => {
        $crate::require($condition)
    };
    ($condition:expr, $($arg:tt)+) => {
        if $condition {
            ::std::result::Result::<(), $crate::Error>::Ok(())
        } else {
            ::std::result::Result::<(), $crate::Error>::Err($crate::Error::InvalidArgument(
                ::std::option::Option::Some(::std::format!($($arg)+)),
            ))
        }
    };
}

/// Fails with [`Error::InvalidState`] if the condition is false, with an optional
/// `format!`-style message.
///
/// ```rust
/// use tiny_utils::require_state;
///
/// let started = false;
/// let result = require_state!(started, "not started yet");
///
/// assert_eq!(result.unwrap_err().message(), Some("not started yet"));
/// ```
#[macro_export]
macro_rules! require_state {
    ($condition:expr $(,)?) => {
        $crate::require_state($condition)
    };
    ($condition:expr, $($arg:tt)+) => {
        if $condition {
            ::std::result::Result::<(), $crate::Error>::Ok(())
        } else {
            ::std::result::Result::<(), $crate::Error>::Err($crate::Error::InvalidState(
                ::std::option::Option::Some(::std::format!($($arg)+)),
            ))
        }
    };
}

/// Always fails with [`Error::NotImplemented`], with an optional `format!`-style message.
///
/// ```rust
/// use tiny_utils::{Error, not_implemented};
///
/// fn later() -> Result<u32, Error> {
///     not_implemented!("coming in {}", "v2")
/// }
///
/// assert_eq!(later().unwrap_err().message(), Some("coming in v2"));
/// ```
#[macro_export]
macro_rules! not_implemented {
    () => {
        $crate::not_implemented()
    };
    ($($arg:tt)+) => {
        ::std::result::Result::Err($crate::Error::NotImplemented(::std::option::Option::Some(
            ::std::format!($($arg)+),
        )))
    };
}
