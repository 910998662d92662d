#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Small everyday helpers.
//!
//! * Precondition checks that return errors instead of panicking: [`require!`],
//!   [`require_state!`], [`check_non_null()`] and [`not_implemented!`].
//! * Endless iteration over collections, in order ([`circular()`]) or at random
//!   ([`randomly()`]), and random picking ([`pick_one()`], [`pick_one_optional()`]).
//! * Test markers and a filter over them ([`Tag`], [`TagFilter`]).
//! * Decorated console output and output capture, re-exported from `tiny_text` as [`text`].
//! * Time measurement and deadline-based waiting, re-exported from `tiny_timing` as [`timing`].
//!
//! ```rust
//! use tiny_utils::text::PrintMode;
//! use tiny_utils::{Error, require, timing};
//!
//! fn greet(name: &str) -> Result<(), Error> {
//!     require!(!name.is_empty(), "a name is required")?;
//!
//!     let timed = timing::measure(|| format!("hello, {name}"));
//!     PrintMode::Silent.println(timed.value()).expect("silent mode never fails");
//!
//!     Ok(())
//! }
//!
//! assert!(greet("world").is_ok());
//! assert!(greet("").is_err());
//! ```

mod assertions;
mod collection;
mod error;
mod tags;

pub use assertions::*;
pub use collection::*;
pub use error::*;
pub use tags::*;
pub use tiny_text as text;
pub use tiny_timing as timing;
