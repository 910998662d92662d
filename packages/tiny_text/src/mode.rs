use std::env;
use std::ffi::OsString;
use std::fmt::{self, Display, Write as _};
use std::str::FromStr;
use std::thread;
use std::time::{Duration, SystemTime};

use crate::{Console, Error, Result};

const UNNAMED_THREAD: &str = "<unnamed>";

/// A fixed policy for decorating a line of text before it is written to a console.
///
/// | Mode | Line |
/// |---|---|
/// | `Silent` | nothing is written |
/// | `Standard` | `value` |
/// | `Thread` | `<thread name>: value` |
/// | `Time` | `at <seconds since console start>: value` |
/// | `TimeDemo` | `at XX:XX:<ss.mmm>: value` |
/// | `ThreadTime` | `<thread name> at <seconds>: value` |
/// | `ThreadTimeDemo` | `<thread name> at XX:XX:<ss.mmm>: value` |
///
/// Time modes show seconds elapsed since the console's time origin, with millisecond precision.
/// Demo modes mask the hours and minutes of the wall clock so that output pasted into
/// documentation stays stable. The thread name is read at the moment of the call; threads without
/// a name show as `<unnamed>`.
///
/// Each line is fully composed before being handed to the sink in a single write, so lines from
/// concurrent threads never interleave.
///
/// # Examples
///
/// ```rust
/// use tiny_text::{Console, PrintMode};
///
/// let console = Console::new();
///
/// let text = console.capture_output(|| {
///     PrintMode::Standard.println_to(&console, 42).unwrap();
///     PrintMode::Standard
///         .printf_to(&console, format_args!("{}-{}", "a", 1))
///         .unwrap();
///     PrintMode::Silent.println_to(&console, "never shown").unwrap();
/// })?;
///
/// assert_eq!(text, "42\na-1");
/// # Ok::<(), tiny_text::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PrintMode {
    /// Writes nothing.
    Silent,
    /// Writes the value as is.
    Standard,
    /// Prefixes the name of the current thread.
    Thread,
    /// Prefixes the time elapsed since the console started.
    Time,
    /// Prefixes a wall-clock time with masked hours and minutes.
    TimeDemo,
    /// Prefixes the thread name and the elapsed time.
    ThreadTime,
    /// Prefixes the thread name and the masked wall-clock time.
    ThreadTimeDemo,
}

impl PrintMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Silent,
        Self::Standard,
        Self::Thread,
        Self::Time,
        Self::TimeDemo,
        Self::ThreadTime,
        Self::ThreadTimeDemo,
    ];

    /// The configuration name of the mode, such as `THREAD_TIME`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Silent => "SILENT",
            Self::Standard => "STANDARD",
            Self::Thread => "THREAD",
            Self::Time => "TIME",
            Self::TimeDemo => "TIME_DEMO",
            Self::ThreadTime => "THREAD_TIME",
            Self::ThreadTimeDemo => "THREAD_TIME_DEMO",
        }
    }

    /// Reads a mode name from the environment variable `variable`, falling back to `default` if
    /// the variable is not set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMode`] if the variable is set to something that is not a mode name,
    /// including a value that is not valid Unicode.
    pub fn from_env(variable: &str, default: Self) -> Result<Self> {
        Self::from_variable(env::var_os(variable), default)
    }

    fn from_variable(value: Option<OsString>, default: Self) -> Result<Self> {
        match value.map(OsString::into_string) {
            None => Ok(default),
            Some(Ok(name)) => name.parse(),
            Some(Err(raw)) => Err(Error::UnknownMode {
                name: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Composes the line this mode would write for `value`, using `console` as the time origin.
    ///
    /// Returns `None` for [`PrintMode::Silent`], without formatting `value` at all.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if the `Display` implementation of `value` fails.
    pub fn render(
        self,
        console: &Console,
        value: impl Display,
        newline: bool,
    ) -> Result<Option<String>> {
        if self == Self::Silent {
            return Ok(None);
        }

        let mut line = String::new();
        self.write_prefix(&mut line, console)?;
        write!(line, "{value}")?;

        if newline {
            line.push('\n');
        }

        Ok(Some(line))
    }

    fn write_prefix(self, line: &mut String, console: &Console) -> fmt::Result {
        match self {
            Self::Silent | Self::Standard => Ok(()),
            Self::Thread => write!(line, "{}: ", ThreadName),
            Self::Time => write!(line, "at {}: ", Elapsed(console.elapsed())),
            Self::TimeDemo => write!(line, "at {}: ", DemoClock(SystemTime::now())),
            Self::ThreadTime => write!(line, "{} at {}: ", ThreadName, Elapsed(console.elapsed())),
            Self::ThreadTimeDemo => {
                write!(line, "{} at {}: ", ThreadName, DemoClock(SystemTime::now()))
            }
        }
    }

    /// Writes `value` to the [global console][Console::global], without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `value` fails to format or [`Error::Io`] if the write fails.
    pub fn print(self, value: impl Display) -> Result<()> {
        self.print_to(Console::global(), value)
    }

    /// Writes `value` and a newline to the [global console][Console::global].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `value` fails to format or [`Error::Io`] if the write fails.
    pub fn println(self, value: impl Display) -> Result<()> {
        self.println_to(Console::global(), value)
    }

    /// Writes pre-formatted arguments to the [global console][Console::global], without a
    /// trailing newline.
    ///
    /// ```rust
    /// use tiny_text::PrintMode;
    ///
    /// PrintMode::Silent.printf(format_args!("{}.{}", "X", 42))?;
    /// # Ok::<(), tiny_text::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if an argument fails to format or [`Error::Io`] if the write
    /// fails.
    pub fn printf(self, args: fmt::Arguments<'_>) -> Result<()> {
        self.printf_to(Console::global(), args)
    }

    /// Writes `value` to `console`, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `value` fails to format or [`Error::Io`] if the write fails.
    pub fn print_to(self, console: &Console, value: impl Display) -> Result<()> {
        self.emit(console, value, false)
    }

    /// Writes `value` and a newline to `console`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if `value` fails to format or [`Error::Io`] if the write fails.
    pub fn println_to(self, console: &Console, value: impl Display) -> Result<()> {
        self.emit(console, value, true)
    }

    /// Writes pre-formatted arguments to `console`, without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] if an argument fails to format or [`Error::Io`] if the write
    /// fails.
    pub fn printf_to(self, console: &Console, args: fmt::Arguments<'_>) -> Result<()> {
        self.emit(console, args, false)
    }

    fn emit(self, console: &Console, value: impl Display, newline: bool) -> Result<()> {
        match self.render(console, value, newline)? {
            Some(line) => console.out().write_str(&line),
            None => Ok(()),
        }
    }
}

impl Display for PrintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrintMode {
    type Err = Error;

    /// Parses a mode name, ignoring ASCII case and an optional `_MODE` suffix, so `thread_time`,
    /// `THREAD_TIME` and `THREAD_TIME_MODE` are all accepted.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        let name = upper.strip_suffix("_MODE").unwrap_or(&upper);

        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| Error::UnknownMode {
                name: trimmed.to_string(),
            })
    }
}

struct ThreadName;

impl Display for ThreadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = thread::current();
        f.write_str(current.name().unwrap_or(UNNAMED_THREAD))
    }
}

struct Elapsed(Duration);

impl Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0.as_secs_f64())
    }
}

/// Wall-clock time of day with hours and minutes masked, e.g. `XX:XX:07.123`.
struct DemoClock(SystemTime);

impl Display for DemoClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let since_epoch = self
            .0
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();

        write!(
            f,
            "XX:XX:{:02}.{:03}",
            since_epoch.as_secs() % 60,
            since_epoch.subsec_millis()
        )
    }
}
