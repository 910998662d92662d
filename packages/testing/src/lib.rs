#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))] // This is all test code, no need to test it.

//! Private helpers for tests in the tiny packages.

use std::panic;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// How long a test may run under [`with_watchdog()`] before it is declared hung.
pub const WATCHDOG_TIMEOUT: Duration = if cfg!(miri) {
    Duration::from_secs(60)
} else {
    Duration::from_secs(10)
};

/// Runs a test on a separate thread and fails it if it does not finish within
/// [`WATCHDOG_TIMEOUT`].
///
/// Panics raised by the test are propagated unchanged to the caller.
///
/// Setting the `MUTATION_TESTING` environment variable to `1` disables the watchdog and runs the
/// test directly on the calling thread, so mutation testing can tell hanging mutants apart.
///
/// # Panics
///
/// Panics if the test exceeds the timeout.
///
/// # Example
///
/// ```rust
/// use testing::with_watchdog;
///
/// let answer = with_watchdog(|| 6 * 7);
/// assert_eq!(answer, 42);
/// ```
pub fn with_watchdog<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    if std::env::var("MUTATION_TESTING").as_deref() == Ok("1") {
        return test_fn();
    }

    let (tx, rx) = mpsc::channel();

    let worker = thread::Builder::new()
        .name(current_test_name())
        .spawn(move || {
            // The receiver is gone if the watchdog already gave up on us.
            drop(tx.send(test_fn()));
        })
        .expect("spawning the test thread must succeed");

    match rx.recv_timeout(WATCHDOG_TIMEOUT) {
        Ok(result) => {
            worker.join().expect("test thread already delivered its result");
            result
        }
        Err(mpsc::RecvTimeoutError::Timeout) => {
            panic!("test did not finish within {WATCHDOG_TIMEOUT:?}");
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => match worker.join() {
            Ok(()) => panic!("test thread exited without a result"),
            Err(payload) => panic::resume_unwind(payload),
        },
    }
}

/// Asserts that `actual` is within `tolerance` of `expected`.
///
/// # Panics
///
/// Panics if the difference is greater than `tolerance`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

// Keeps thread-name based output readable when a test runs under the watchdog.
fn current_test_name() -> String {
    thread::current()
        .name()
        .map_or_else(|| "watchdog-test".to_string(), ToString::to_string)
}
