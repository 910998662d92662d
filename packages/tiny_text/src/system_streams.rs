//! Redirection of the process's standard output and error file descriptors.
//!
//! The descriptors are process-wide, so at most one thread redirects them at a time. The same
//! thread may nest redirections; each level restores what the previous level installed.

use crate::Result;
use crate::sink::SessionTarget;

#[cfg(unix)]
pub(crate) fn capture<R>(
    include_error_stream: bool,
    run: impl FnOnce(SessionTarget) -> R,
) -> Result<(Vec<u8>, R)> {
    unix::capture(include_error_stream, run)
}

#[cfg(not(unix))]
pub(crate) fn capture<R>(
    _include_error_stream: bool,
    _run: impl FnOnce(SessionTarget) -> R,
) -> Result<(Vec<u8>, R)> {
    Err(crate::Error::Unsupported {
        operation: "capturing the process standard streams",
    })
}

#[cfg(unix)]
mod unix {
    use std::fs::File;
    use std::io::{self, Read, Seek, SeekFrom, Write};
    use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
    use std::sync::Arc;

    use parking_lot::{Mutex, ReentrantMutex};
    use tracing::{debug, warn};

    use crate::Result;
    use crate::sink::{CaptureTarget, SessionTarget};

    static REDIRECTION: ReentrantMutex<()> = parking_lot::const_reentrant_mutex(());

    pub(super) fn capture<R>(
        include_error_stream: bool,
        run: impl FnOnce(SessionTarget) -> R,
    ) -> Result<(Vec<u8>, R)> {
        let _exclusive = REDIRECTION.lock();

        let mut file = tempfile::tempfile()?;
        let target: SessionTarget = Arc::new(Mutex::new(CaptureTarget::File(file.try_clone()?)));

        let value = {
            let _stdout = Redirect::new(libc::STDOUT_FILENO, &file)?;
            let _stderr = if include_error_stream {
                Some(Redirect::new(libc::STDERR_FILENO, &file)?)
            } else {
                None
            };

            run(target)
        };

        file.seek(SeekFrom::Start(0))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;

        Ok((bytes, value))
    }

    /// Points `fd` at a file until dropped, then points it back at whatever it referred to
    /// before.
    #[derive(Debug)]
    struct Redirect {
        fd: RawFd,
        original: OwnedFd,
    }

    impl Redirect {
        fn new(fd: RawFd, replacement: &File) -> io::Result<Self> {
            // Buffered output belongs to the old destination.
            flush_std_streams()?;

            // SAFETY: dup() has no memory safety requirements; failure is reported as -1.
            let original = unsafe { libc::dup(fd) };
            if original < 0 {
                return Err(io::Error::last_os_error());
            }

            // SAFETY: The descriptor was just returned by a successful dup() and nothing else
            // owns it.
            let original = unsafe { OwnedFd::from_raw_fd(original) };

            // SAFETY: Both descriptors are open for the duration of the call.
            if unsafe { libc::dup2(replacement.as_raw_fd(), fd) } < 0 {
                return Err(io::Error::last_os_error());
            }

            debug!(fd, "standard stream redirected");

            Ok(Self { fd, original })
        }
    }

    impl Drop for Redirect {
        fn drop(&mut self) {
            if let Err(e) = flush_std_streams() {
                warn!(fd = self.fd, error = %e, "failed to flush before restoring standard stream");
            }

            // SAFETY: Both descriptors are open for the duration of the call; `original` stays
            // owned by us and is closed when the field drops.
            if unsafe { libc::dup2(self.original.as_raw_fd(), self.fd) } < 0 {
                warn!(
                    fd = self.fd,
                    error = %io::Error::last_os_error(),
                    "failed to restore standard stream"
                );
            } else {
                debug!(fd = self.fd, "standard stream restored");
            }
        }
    }

    fn flush_std_streams() -> io::Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()
    }
}
