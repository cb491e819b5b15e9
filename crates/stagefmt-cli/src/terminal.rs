// Rust guideline compliant 2026-10-18

//! Terminal output helpers for the stagefmt CLI.

use std::env;
use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Determines if colored output should be used on stderr.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    atty::is(atty::Stream::Stderr)
}

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Writes `prefix: message` with the prefix in `prefix_color`.
///
/// Color codes are only emitted when `out` supports them.
pub fn write_status(
    out: &mut dyn WriteColor,
    prefix: &str,
    prefix_color: Color,
    message: &str,
) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true))?;
    write!(out, "{}: ", prefix)?;
    out.reset()?;
    writeln!(out, "{}", message)
}

/// Prints a message with a colored prefix to stderr.
///
/// # Arguments
/// * `prefix` - The prefix text
/// * `prefix_color` - The color for the prefix
/// * `message` - The message text
/// * `use_color` - Whether to emit color codes at all
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let writer = BufferWriter::stderr(color_choice(use_color));
    let mut buffer = writer.buffer();
    let _ = write_status(&mut buffer, prefix, prefix_color, message);
    let _ = writer.print(&buffer);
}

/// Prints an error message.
pub fn print_error(message: &str, use_color: bool) {
    print_status("error", Color::Red, message, use_color);
}

/// Prints a success message.
pub fn print_success(message: &str, use_color: bool) {
    print_status("ok", Color::Green, message, use_color);
}
