#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Captures monotonic and wall-clock time, measures how long operations take and waits for
//! deadlines.
//!
//! The entry point is [`Clock`], with free-function shorthands ([`measure()`], [`duration_of()`],
//! [`sleep()`], [`delay()`], [`monotonic_now()`], [`wall_clock_now()`]) that use the operating
//! system clock.
//!
//! Durations are reported as non-negative fractional seconds. Sub-millisecond precision is not
//! guaranteed.
//!
//! # Measuring
//!
//! ```rust
//! let timed = tiny_timing::measure(|| "X".repeat(3));
//!
//! assert_eq!(timed.value(), "XXX");
//! println!("took {} seconds", timed.elapsed_seconds());
//! ```
//!
//! # Waiting for a deadline
//!
//! `sleep()` and `delay()` wait until a target number of seconds has passed since a start instant,
//! which makes it easy to pace work without accumulating drift:
//!
//! ```rust
//! use tiny_timing::{delay, monotonic_now, sleep};
//!
//! let start = monotonic_now();
//!
//! sleep(0.01, Some(start))?;
//!
//! // Already past the 5 ms mark, so this runs immediately.
//! let value = delay(0.005, Some(start), || 42)?;
//! assert_eq!(value, 42);
//! # Ok::<(), tiny_timing::Error>(())
//! ```

mod pal;

mod clock;
mod error;
mod instant;
mod timed_result;

pub use clock::*;
pub use error::*;
pub use instant::*;
pub use timed_result::*;
