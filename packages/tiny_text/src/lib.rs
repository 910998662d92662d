#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Decorated console output, scoped output capture and a few small text helpers.
//!
//! A [`PrintMode`] decides how a line is decorated before it is written: not at all, prefixed
//! with the current thread's name, with the time since the console started, or both. Lines go to
//! a [`Console`], which is the process-wide [`Console::global()`] unless another one is given.
//!
//! ```rust
//! use tiny_text::PrintMode;
//!
//! let mode: PrintMode = "THREAD_TIME".parse()?;
//! mode.println("starting up")?;
//! # Ok::<(), tiny_text::Error>(())
//! ```
//!
//! # Capturing output
//!
//! Output written through a console can be captured for the duration of a closure, which is
//! mainly useful in tests:
//!
//! ```rust
//! use tiny_text::{Console, PrintMode};
//!
//! let console = Console::new();
//! let text = console.capture_output(|| {
//!     PrintMode::Thread.println_to(&console, "X").unwrap();
//! })?;
//!
//! assert!(text.ends_with(": X\n"));
//! # Ok::<(), tiny_text::Error>(())
//! ```
//!
//! See [`CaptureOptions`] for capturing the error stream and the raw process streams.
//!
//! # Text helpers
//!
//! ```rust
//! assert_eq!(tiny_text::plural(3, "box"), "boxes");
//! assert_eq!(tiny_text::time_string(90.5)?, "1 minute, 31 seconds");
//! # Ok::<(), tiny_text::Error>(())
//! ```

mod capture;
mod console;
mod encoding;
mod error;
mod info;
mod mode;
mod plural;
mod sink;
mod system_streams;
mod time_string;

pub use capture::*;
pub use console::*;
pub use encoding::*;
pub use error::*;
pub use info::*;
pub use mode::*;
pub use plural::*;
pub use sink::Sink;
pub use time_string::*;
