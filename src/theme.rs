//! Console color definitions.
//!
//! Semantic color assignments for everything casctl prints. Colors are
//! switched off globally by [`configure`] when stdout is not a terminal.

use std::io::IsTerminal;

use colored::Color;

/// Success output (the rendered report).
pub const SUCCESS: Color = Color::Green;
/// Informational messages.
pub const INFO: Color = Color::Cyan;
/// Error prefix on stderr.
pub const ERROR: Color = Color::Red;

/// Decide once whether colored output is used for this process.
///
/// `NO_COLOR` and non-terminal stdout both disable colors.
pub fn configure() {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}
