//! Severity levels and their fixed label/color tables.

use std::fmt;
use std::str::FromStr;

use colored::Color;

use crate::error::Error;

/// Color used for the `[project]` tag, whatever the severity.
pub const PROJECT_NAME_COLOR: Color = Color::Green;

static LABELS: [&str; 5] = ["verbose", "info   ", "warn   ", "error  ", "fatal  "];

static COLORS: [Color; 5] = [
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::Red,
    Color::Red,
];

/// Ordered log severity. A logger set to level `L` prints every message
/// whose severity is `>= L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    Verbose = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    /// Only a label. Emitting at this level never exits the process.
    Fatal = 4,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Verbose,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// Lowercase name, space-padded to 7 characters.
    pub fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    pub fn color(self) -> Color {
        COLORS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.label().trim_end()
    }
}

impl TryFrom<i32> for Level {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Error> {
        match value {
            0 => Ok(Level::Verbose),
            1 => Ok(Level::Info),
            2 => Ok(Level::Warn),
            3 => Ok(Level::Error),
            4 => Ok(Level::Fatal),
            other => Err(Error::InvalidLevel(other)),
        }
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level as i32
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownLevelName(s.to_string()))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
