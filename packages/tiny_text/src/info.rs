use std::env::consts::{ARCH, OS};
use std::process;
use std::thread;

use crate::{Console, Result, plural};

/// A short description of the runtime environment, one fact per line:
///
/// ```text
/// Rust on linux/x86_64
/// 16 processors
/// process 4242
/// ```
#[must_use]
pub fn system_info() -> String {
    let processors = thread::available_parallelism().map_or(1, usize::from);

    format!(
        "Rust on {OS}/{ARCH}\n{processors} {}\nprocess {}\n",
        plural(processors, "processor"),
        process::id()
    )
}

/// Writes [`system_info()`] to the regular output of `console`.
///
/// # Errors
///
/// Returns [`Error::Io`][crate::Error::Io] if the write fails.
#[cfg_attr(test, mutants::skip)] // Thin wrapper, output is covered by the system_info() tests.
pub fn print_info(console: &Console) -> Result<()> {
    console.out().write_str(&system_info())
}
