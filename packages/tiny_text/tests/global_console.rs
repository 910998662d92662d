//! Exercises the process-wide console.
//!
//! Everything lives in one test function because the global console is shared by every test in
//! this binary, and concurrent capture sessions on one console see each other's output.

use tiny_text::{Console, PrintMode, capture_output};

#[test]
fn print_modes_write_to_global_console() {
    let text = capture_output(|| {
        PrintMode::Standard.println("X").unwrap();
        PrintMode::Standard.printf(format_args!("{}.{}", "X", 42)).unwrap();
        PrintMode::Silent.println("hidden").unwrap();
    })
    .unwrap();

    assert_eq!(text, "X\nX.42");

    let text = capture_output(|| PrintMode::Thread.print("X").unwrap()).unwrap();
    let name = std::thread::current().name().unwrap().to_string();
    assert_eq!(text, format!("{name}: X"));

    let text = capture_output(|| PrintMode::Time.println("X").unwrap()).unwrap();
    assert!(text.starts_with("at ") && text.ends_with(": X\n"));

    // Writes through the error sink are captured by default.
    let text = capture_output(|| Console::global().err().write_str("oops").unwrap()).unwrap();
    assert_eq!(text, "oops");
}
