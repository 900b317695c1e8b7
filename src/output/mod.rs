//! Terminal output for aws-ssm
//!
//! stdout carries only the secret payload or the text of an informational
//! flag. Everything else goes to stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Write a value to stdout verbatim, without a trailing newline
pub fn raw(value: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(value.as_bytes())?;
    stdout.flush()
}

/// Print an informational message to stdout
pub fn info(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", message)?;
    stdout.flush()
}

/// Print an error message with a red X to stderr
pub fn error(message: &str) {
    // Pastel coral/salmon: RGB(255, 160, 160)
    eprintln!(
        "{} {}",
        "✗".truecolor(255, 160, 160).bold(),
        message.bright_white()
    );
}

/// Print usage text to stderr
pub fn usage(text: &str) {
    // Brighter grey: RGB(160, 160, 160)
    eprintln!("{}", text.truecolor(160, 160, 160));
}
