use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

use crate::Sink;

static GLOBAL: LazyLock<Console> = LazyLock::new(Console::new);

/// A pair of output sinks (regular and error output) and the instant that time-displaying print
/// modes count from.
///
/// [`Console::global()`] is the process-wide console used by the print modes unless told
/// otherwise. Independent consoles can be created for components (or tests) that want their own
/// capture sessions and their own time origin.
///
/// Cloning is cheap and clones share sinks and time origin.
///
/// # Examples
///
/// ```rust
/// use tiny_text::{Console, PrintMode};
///
/// let console = Console::new();
///
/// let text = console.capture_output(|| {
///     PrintMode::Standard.println_to(&console, "hello").unwrap();
/// })?;
///
/// assert_eq!(text, "hello\n");
/// # Ok::<(), tiny_text::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Console {
    inner: Arc<ConsoleInner>,
}

#[derive(Debug)]
struct ConsoleInner {
    out: Sink,
    err: Sink,
    start: Instant,
}

impl Console {
    /// The process-wide console, writing to the standard streams of the process.
    ///
    /// Its time origin is the moment it is first used.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Creates a console over the standard streams of the process, with its own capture state and
    /// a time origin of now.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a console with custom sinks.
    ///
    /// ```rust
    /// use tiny_text::{Console, Sink};
    ///
    /// let quiet = Console::builder()
    ///     .out(Sink::from_writer(std::io::sink()))
    ///     .err(Sink::from_writer(std::io::sink()))
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// The sink for regular output. Print modes write here.
    #[must_use]
    pub fn out(&self) -> &Sink {
        &self.inner.out
    }

    /// The sink for error output.
    #[must_use]
    pub fn err(&self) -> &Sink {
        &self.inner.err
    }

    /// Time since this console's time origin.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.inner.start.elapsed()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Configures a [`Console`]. Sinks that are not set use the process's standard streams.
#[derive(Debug, Default)]
#[must_use]
pub struct ConsoleBuilder {
    out: Option<Sink>,
    err: Option<Sink>,
}

impl ConsoleBuilder {
    /// Sets the sink for regular output.
    pub fn out(mut self, sink: Sink) -> Self {
        self.out = Some(sink);
        self
    }

    /// Sets the sink for error output.
    pub fn err(mut self, sink: Sink) -> Self {
        self.err = Some(sink);
        self
    }

    /// Creates the console. Its time origin is the moment of this call.
    #[must_use]
    pub fn build(self) -> Console {
        Console {
            inner: Arc::new(ConsoleInner {
                out: self.out.unwrap_or_else(Sink::stdout),
                err: self.err.unwrap_or_else(Sink::stderr),
                start: Instant::now(),
            }),
        }
    }
}
