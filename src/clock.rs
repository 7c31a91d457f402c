//! Wall-clock access and timestamp rendering.

use std::fmt::Write;

use chrono::{DateTime, Local};

/// Day-first layout, e.g. `19-10-2026 14:05:09`.
pub const UK_DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";
/// Month-first layout, e.g. `10-19-2026 14:05:09`.
pub const US_DATE_TIME_FORMAT: &str = "%m-%d-%Y %H:%M:%S";

/// Resolve a named preset to its pattern.
pub fn preset(name: &str) -> Option<&'static str> {
    match name.to_ascii_lowercase().as_str() {
        "uk" | "day-first" => Some(UK_DATE_TIME_FORMAT),
        "us" | "month-first" => Some(US_DATE_TIME_FORMAT),
        _ => None,
    }
}

/// Source of "now" for timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Render the current time with a chrono `strftime` pattern. A pattern
    /// chrono rejects is returned verbatim.
    fn render(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() + 8);
        match write!(out, "{}", self.now().format(pattern)) {
            Ok(()) => out,
            Err(_) => pattern.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Local>,
{
    fn now(&self) -> DateTime<Local> {
        self()
    }
}
