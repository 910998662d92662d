//! Shows every print mode, then captures output written on another thread.
//!
//! Set `TINY_PRINT_MODE` (for example to `THREAD_TIME`) to choose the mode used for the summary.

use std::thread;

use tiny_text::{CaptureOptions, Console, Error, PrintMode, time_string};

fn main() -> Result<(), Error> {
    for mode in PrintMode::ALL {
        mode.println(format_args!("written in {mode} mode"))?;
    }

    let console = Console::new();
    let captured = console.capture(CaptureOptions::new(), || {
        let worker_console = console.clone();

        thread::Builder::new()
            .name("worker".to_string())
            .spawn(move || PrintMode::Thread.println_to(&worker_console, "hello from a worker"))
            .expect("spawning a thread in an example must succeed")
            .join()
            .expect("the worker does not panic")
    })?;

    let (text, written) = captured.into_parts();
    written?;
    print!("captured: {text}");

    let mode = PrintMode::from_env("TINY_PRINT_MODE", PrintMode::Time)?;
    mode.println(format_args!("done after {}", time_string(1.25)?))?;

    Ok(())
}
