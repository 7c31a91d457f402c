//! Text decoration for colorful mode.

use colored::{Color, Colorize};

/// Wraps text in a terminal color.
pub trait Paint {
    fn paint(&self, text: &str, color: Color) -> String;
}

/// ANSI escapes via `colored`. Respects `NO_COLOR`, `CLICOLOR_FORCE` and tty
/// detection, so piped output may come out undecorated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

impl Paint for Ansi {
    fn paint(&self, text: &str, color: Color) -> String {
        text.color(color).to_string()
    }
}

/// Leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Paint for Plain {
    fn paint(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_wraps_when_forced() {
        colored::control::set_override(true);
        let painted = Ansi.paint("warn   ", Color::Yellow);
        assert_eq!(painted, "\u{1b}[33mwarn   \u{1b}[0m");
    }

    #[test]
    fn plain_is_identity() {
        assert_eq!(Plain.paint("svc", Color::Green), "svc");
    }
}
