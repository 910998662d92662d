use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::sink::{CaptureTarget, SessionTarget};
use crate::{Console, Encoding, Result, system_streams};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Configures a capture session.
///
/// The defaults capture both sinks of the console (regular and error output, interleaved in
/// write order), leave the process's own file descriptors alone and decode as UTF-8.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub struct CaptureOptions {
    include_error_stream: bool,
    include_system_streams: bool,
    encoding: Encoding,
}

impl CaptureOptions {
    /// Options with default values.
    pub const fn new() -> Self {
        Self {
            include_error_stream: true,
            include_system_streams: false,
            encoding: Encoding::Utf8,
        }
    }

    /// Whether output written to the console's error sink is captured too.
    pub const fn include_error_stream(mut self, include: bool) -> Self {
        self.include_error_stream = include;
        self
    }

    /// Whether everything written to the process's standard output (and standard error, if the
    /// error stream is included) is captured as well, including output that never goes through a
    /// console, such as `println!`.
    ///
    /// Only available on Unix. Redirection affects the whole process, so concurrent system
    /// captures are serialized.
    pub const fn include_system_streams(mut self, include: bool) -> Self {
        self.include_system_streams = include;
        self
    }

    /// The encoding used to decode the captured bytes.
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of a capture session: the captured text and the value the action returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Captured<R> {
    text: String,
    value: R,
}

impl<R> Captured<R> {
    /// Everything written during the session.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// What the action returned.
    #[must_use]
    pub fn value(&self) -> &R {
        &self.value
    }

    /// Splits into the captured text and the returned value.
    #[must_use]
    pub fn into_parts(self) -> (String, R) {
        (self.text, self.value)
    }
}

impl Console {
    /// Runs `action` while diverting this console's output into a buffer, then returns what was
    /// written together with the action's result.
    ///
    /// The sinks are restored on every exit path. If `action` panics, the sinks are restored
    /// before the panic continues to unwind.
    ///
    /// Sessions nest: an inner session receives everything written while it is open and the outer
    /// session sees none of it. Sessions opened concurrently from different threads on the same
    /// console are allowed but race with each other, as all writes go to the most recently opened
    /// session. Give each thread its own [`Console`] if that matters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`][crate::Error::Decode] if the captured bytes are not valid in the
    /// configured encoding, [`Error::Io`][crate::Error::Io] if the process streams could not be
    /// redirected, or [`Error::Unsupported`][crate::Error::Unsupported] when system streams are
    /// requested on a platform that cannot redirect them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tiny_text::{CaptureOptions, Console, PrintMode};
    ///
    /// let console = Console::new();
    /// let options = CaptureOptions::new().include_error_stream(false);
    ///
    /// let captured = console.capture(options, || {
    ///     PrintMode::Standard.print_to(&console, "out").unwrap();
    ///     console.err().write_str("err").unwrap();
    ///     42
    /// })?;
    ///
    /// assert_eq!(captured.text(), "out");
    /// assert_eq!(*captured.value(), 42);
    /// # Ok::<(), tiny_text::Error>(())
    /// ```
    pub fn capture<R>(
        &self,
        options: CaptureOptions,
        action: impl FnOnce() -> R,
    ) -> Result<Captured<R>> {
        if options.include_system_streams {
            let (bytes, value) = system_streams::capture(options.include_error_stream, |target| {
                self.run_in_session(options, target, action)
            })?;

            return Ok(Captured {
                text: options.encoding.decode(bytes)?,
                value,
            });
        }

        let target = CaptureTarget::memory();
        let value = self.run_in_session(options, Arc::clone(&target), action);
        let bytes = target.lock().take_memory();

        Ok(Captured {
            text: options.encoding.decode(bytes)?,
            value,
        })
    }

    /// Runs `action` and returns everything it wrote to this console, using default
    /// [`CaptureOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`][crate::Error::Decode] if the output is not valid UTF-8.
    pub fn capture_output(&self, action: impl FnOnce()) -> Result<String> {
        Ok(self.capture(CaptureOptions::new(), action)?.text)
    }

    fn run_in_session<R>(
        &self,
        options: CaptureOptions,
        target: SessionTarget,
        action: impl FnOnce() -> R,
    ) -> R {
        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);

        let mut sinks = vec![self.out()];
        if options.include_error_stream {
            sinks.push(self.err());
        }

        for sink in &sinks {
            sink.open_session(id, Arc::clone(&target));
        }

        debug!(
            session = id,
            include_error_stream = options.include_error_stream,
            "capture session opened"
        );

        let _release = scopeguard::guard(sinks, move |sinks| {
            for sink in sinks {
                sink.close_session(id);
            }

            debug!(session = id, "capture session closed");
        });

        action()
    }
}

/// Runs `action` and returns everything it wrote to the [global console][Console::global], using
/// default [`CaptureOptions`].
///
/// # Errors
///
/// Returns [`Error::Decode`][crate::Error::Decode] if the output is not valid UTF-8.
pub fn capture_output(action: impl FnOnce()) -> Result<String> {
    Console::global().capture_output(action)
}
