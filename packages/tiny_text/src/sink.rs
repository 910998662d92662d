use std::any::type_name;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Result;

/// One output destination: the process's standard output, its standard error, or any injected
/// writer.
///
/// While a capture session is active on the sink, writes are diverted into the session instead of
/// reaching the destination. Every [`write_str()`][Self::write_str] call is delivered as a single
/// unit, so concurrent writers never interleave partial strings.
///
/// Cloning is cheap and clones share state, including active capture sessions.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<SinkInner>,
}

struct SinkInner {
    destination: Destination,

    // Most recently opened session last. Writes go to the last one.
    sessions: Mutex<Vec<Session>>,
}

enum Destination {
    Stdout,
    Stderr,
    Writer(Mutex<Box<dyn Write + Send>>),
}

/// Receiving end of a capture session, shared by every sink the session is attached to.
pub(crate) type SessionTarget = Arc<Mutex<CaptureTarget>>;

#[derive(Debug)]
pub(crate) enum CaptureTarget {
    Memory(Vec<u8>),

    // Used while the process streams are redirected into the same file, so output written through
    // sinks and output written straight to the file descriptors stay in order.
    #[cfg_attr(not(unix), expect(dead_code, reason = "system capture is Unix-only"))]
    File(File),
}

impl CaptureTarget {
    pub(crate) fn memory() -> SessionTarget {
        Arc::new(Mutex::new(Self::Memory(Vec::new())))
    }

    /// Takes the bytes collected in memory. File targets are read back through the file itself.
    pub(crate) fn take_memory(&mut self) -> Vec<u8> {
        match self {
            Self::Memory(buffer) => mem::take(buffer),
            Self::File(_) => Vec::new(),
        }
    }

    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Self::Memory(buffer) => {
                buffer.extend_from_slice(bytes);
                Ok(())
            }
            Self::File(file) => file.write_all(bytes),
        }
    }

    fn is_redirection(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

struct Session {
    id: u64,
    target: SessionTarget,

    // The target also receives the raw process streams, so stdout must be flushed before
    // appending to it.
    redirection: bool,
}

impl Sink {
    /// A sink that writes to the standard output stream of the process.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Destination::Stdout)
    }

    /// A sink that writes to the standard error stream of the process.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Destination::Stderr)
    }

    /// A sink that writes to `writer`.
    ///
    /// The writer is flushed after every write.
    ///
    /// ```rust
    /// use tiny_text::Sink;
    ///
    /// let sink = Sink::from_writer(std::io::sink());
    /// sink.write_str("discarded")?;
    /// # Ok::<(), tiny_text::Error>(())
    /// ```
    #[must_use]
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self::new(Destination::Writer(Mutex::new(Box::new(writer))))
    }

    fn new(destination: Destination) -> Self {
        Self {
            inner: Arc::new(SinkInner {
                destination,
                sessions: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Writes `text` in one operation, either to the destination or to the innermost active
    /// capture session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`][crate::Error::Io] if the destination rejects the write.
    pub fn write_str(&self, text: &str) -> Result<()> {
        let bytes = text.as_bytes();

        // The session list is only consulted here and never locked together with a stream lock
        // or a target lock. Callers may already hold `io::stdout().lock()`.
        let session = self
            .inner
            .sessions
            .lock()
            .last()
            .map(|session| (Arc::clone(&session.target), session.redirection));

        if let Some((target, redirection)) = session {
            if redirection {
                // Anything the process already queued on stdout must land before us.
                io::stdout().flush()?;
            }

            target.lock().append(bytes)?;
            return Ok(());
        }

        match &self.inner.destination {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(bytes)?;
                stdout.flush()?;
            }
            Destination::Stderr => {
                let mut stderr = io::stderr().lock();
                stderr.write_all(bytes)?;
                stderr.flush()?;
            }
            Destination::Writer(writer) => {
                let mut writer = writer.lock();
                writer.write_all(bytes)?;
                writer.flush()?;
            }
        }

        Ok(())
    }

    pub(crate) fn open_session(&self, id: u64, target: SessionTarget) {
        let redirection = target.lock().is_redirection();

        self.inner.sessions.lock().push(Session {
            id,
            target,
            redirection,
        });
    }

    pub(crate) fn close_session(&self, id: u64) {
        self.inner.sessions.lock().retain(|session| session.id != id);
    }

    pub(crate) fn active_sessions(&self) -> usize {
        self.inner.sessions.lock().len()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destination = match self.inner.destination {
            Destination::Stdout => "stdout",
            Destination::Stderr => "stderr",
            Destination::Writer(_) => "writer",
        };

        f.debug_struct(type_name::<Self>())
            .field("destination", &destination)
            .field("active_sessions", &self.active_sessions())
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::thread;
    use std::time::Duration;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Sink: Send, Sync, Clone);

    /// A writer that hands its bytes to a shared buffer the test can inspect.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn memory_target() -> SessionTarget {
        CaptureTarget::memory()
    }

    fn memory_contents(target: &SessionTarget) -> String {
        String::from_utf8(target.lock().take_memory()).unwrap()
    }

    #[test]
    fn writes_reach_injected_writer() {
        let buffer = SharedBuffer::default();
        let sink = Sink::from_writer(buffer.clone());

        sink.write_str("hello ").unwrap();
        sink.write_str("world").unwrap();

        assert_eq!(buffer.contents(), "hello world");
    }

    #[test]
    fn session_diverts_writes() {
        let buffer = SharedBuffer::default();
        let sink = Sink::from_writer(buffer.clone());
        let target = memory_target();

        sink.open_session(1, Arc::clone(&target));
        sink.write_str("captured").unwrap();
        sink.close_session(1);
        sink.write_str("released").unwrap();

        assert_eq!(memory_contents(&target), "captured");
        assert_eq!(buffer.contents(), "released");
    }

    #[test]
    fn innermost_session_wins() {
        let sink = Sink::from_writer(io::sink());
        let outer = memory_target();
        let inner = memory_target();

        sink.open_session(1, Arc::clone(&outer));
        sink.write_str("a").unwrap();
        sink.open_session(2, Arc::clone(&inner));
        sink.write_str("b").unwrap();
        sink.close_session(2);
        sink.write_str("c").unwrap();
        sink.close_session(1);

        assert_eq!(memory_contents(&outer), "ac");
        assert_eq!(memory_contents(&inner), "b");
        assert_eq!(sink.active_sessions(), 0);
    }

    #[test]
    fn sessions_close_out_of_order() {
        let sink = Sink::from_writer(io::sink());
        let first = memory_target();
        let second = memory_target();

        sink.open_session(1, Arc::clone(&first));
        sink.open_session(2, Arc::clone(&second));
        sink.close_session(1);
        sink.write_str("x").unwrap();

        assert_eq!(memory_contents(&first), "");
        assert_eq!(memory_contents(&second), "x");
        assert_eq!(sink.active_sessions(), 1);
    }

    #[test]
    fn clones_share_sessions() {
        let sink = Sink::from_writer(io::sink());
        let clone = sink.clone();
        let target = memory_target();

        sink.open_session(7, Arc::clone(&target));
        clone.write_str("shared").unwrap();

        assert_eq!(memory_contents(&target), "shared");
    }

    #[test]
    fn write_while_caller_holds_stdout_lock() {
        testing::with_watchdog(|| {
            let sink = Sink::stdout();
            let held = io::stdout().lock();

            let worker = {
                let sink = sink.clone();
                thread::spawn(move || sink.write_str("").unwrap())
            };

            // Give the worker time to block on the stream lock we hold.
            thread::sleep(Duration::from_millis(50));

            // Stdout locks are reentrant, so this must not wait for the worker.
            sink.write_str("").unwrap();

            drop(held);
            worker.join().unwrap();
        });
    }

    #[cfg(unix)]
    #[test]
    fn file_sessions_are_redirections() {
        let sink = Sink::from_writer(io::sink());
        let file = CaptureTarget::File(tempfile::tempfile().unwrap());

        sink.open_session(1, memory_target());
        sink.open_session(2, Arc::new(Mutex::new(file)));

        let flags: Vec<_> = sink
            .inner
            .sessions
            .lock()
            .iter()
            .map(|session| session.redirection)
            .collect();
        assert_eq!(flags, [false, true]);
    }

    #[test]
    fn debug_names_destination() {
        assert!(format!("{:?}", Sink::stdout()).contains("stdout"));
        assert!(format!("{:?}", Sink::stderr()).contains("stderr"));
        assert!(format!("{:?}", Sink::from_writer(io::sink())).contains("writer"));
    }
}
