//! The leveled console logger.

use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::level::{Level, PROJECT_NAME_COLOR};
use crate::paint::{Ansi, Paint};
use crate::sink::{Sink, Stdout};

/// Prints `<timestamp> <label> [<project>]: <message>` lines for messages at
/// or above its level.
///
/// The clock, painter and sink default to the local wall clock, ANSI colors
/// and stdout; swap them with [`Logger::with_clock`], [`Logger::with_painter`]
/// and [`Logger::with_sink`].
#[derive(Debug, Clone)]
pub struct Logger<C = SystemClock, P = Ansi, S = Stdout> {
    pub project_name: String,
    /// chrono `strftime` pattern for the timestamp. If chrono cannot render
    /// any part of it, the whole pattern is printed verbatim in place of the
    /// timestamp.
    pub time_format: String,
    pub colorful: bool,
    level: Level,
    clock: C,
    painter: P,
    sink: S,
}

impl Logger {
    /// New logger at [`Level::Info`].
    pub fn new(
        project_name: impl Into<String>,
        time_format: impl Into<String>,
        colorful: bool,
    ) -> Self {
        Logger {
            project_name: project_name.into(),
            time_format: time_format.into(),
            colorful,
            level: Level::Info,
            clock: SystemClock,
            painter: Ansi,
            sink: Stdout,
        }
    }
}

impl<C, P, S> Logger<C, P, S> {
    /// Replace the time source.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Logger<C2, P, S> {
        Logger {
            project_name: self.project_name,
            time_format: self.time_format,
            colorful: self.colorful,
            level: self.level,
            clock,
            painter: self.painter,
            sink: self.sink,
        }
    }

    /// Replace the color decorator used in colorful mode.
    pub fn with_painter<P2: Paint>(self, painter: P2) -> Logger<C, P2, S> {
        Logger {
            project_name: self.project_name,
            time_format: self.time_format,
            colorful: self.colorful,
            level: self.level,
            clock: self.clock,
            painter,
            sink: self.sink,
        }
    }

    /// Replace where lines are written.
    pub fn with_sink<S2: Sink>(self, sink: S2) -> Logger<C, P, S2> {
        Logger {
            project_name: self.project_name,
            time_format: self.time_format,
            colorful: self.colorful,
            level: self.level,
            clock: self.clock,
            painter: self.painter,
            sink,
        }
    }

    /// Current threshold.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Set the threshold from its numeric value (`0..=4`). Anything else is
    /// rejected with [`Error::InvalidLevel`](crate::Error::InvalidLevel) and
    /// the current level is kept.
    pub fn set_level(&mut self, level: i32) -> Result<()> {
        match Level::try_from(level) {
            Ok(level) => {
                self.set_severity(level);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(rejected = level, kept = %self.level, "level change refused");
                Err(err)
            }
        }
    }

    /// Set the threshold from a typed level.
    pub fn set_severity(&mut self, level: Level) {
        tracing::debug!(from = %self.level, to = %level, "level changed");
        self.level = level;
    }

    /// Whether a message at `severity` would be printed.
    pub fn enabled(&self, severity: Level) -> bool {
        self.level <= severity
    }
}

impl<C: Clock, P: Paint, S: Sink> Logger<C, P, S> {
    fn emit(&self, severity: Level, message: fmt::Arguments<'_>) -> bool {
        if !self.enabled(severity) {
            tracing::trace!(%severity, threshold = %self.level, "suppressed");
            return false;
        }
        let line = self.format_line(severity, message);
        self.sink.write_line(&line);
        true
    }

    fn format_line(&self, severity: Level, message: fmt::Arguments<'_>) -> String {
        let stamp = self.clock.render(&self.time_format);
        if self.colorful {
            format!(
                "{stamp} {} [{}]: {message}",
                self.painter.paint(severity.label(), severity.color()),
                self.painter.paint(&self.project_name, PROJECT_NAME_COLOR),
            )
        } else {
            format!(
                "{stamp} {} [{}]: {message}",
                severity.label(),
                self.project_name
            )
        }
    }

    /// Very detailed output, the lowest level.
    pub fn verbose(&self, message: &str) -> bool {
        self.emit(Level::Verbose, format_args!("{message}"))
    }

    /// Like [`Logger::verbose`], with `format_args!` input; see [`verbosef!`](crate::verbosef).
    pub fn verbosef(&self, args: fmt::Arguments<'_>) -> bool {
        self.emit(Level::Verbose, args)
    }

    /// General information; the default level.
    pub fn info(&self, message: &str) -> bool {
        self.emit(Level::Info, format_args!("{message}"))
    }

    /// Like [`Logger::info`], with `format_args!` input; see [`infof!`](crate::infof).
    pub fn infof(&self, args: fmt::Arguments<'_>) -> bool {
        self.emit(Level::Info, args)
    }

    /// Something went wrong but nothing is broken.
    pub fn warn(&self, message: &str) -> bool {
        self.emit(Level::Warn, format_args!("{message}"))
    }

    /// Like [`Logger::warn`], with `format_args!` input; see [`warnf!`](crate::warnf).
    pub fn warnf(&self, args: fmt::Arguments<'_>) -> bool {
        self.emit(Level::Warn, args)
    }

    /// An error that was handled.
    pub fn error(&self, message: &str) -> bool {
        self.emit(Level::Error, format_args!("{message}"))
    }

    /// Like [`Logger::error`], with `format_args!` input; see [`errorf!`](crate::errorf).
    pub fn errorf(&self, args: fmt::Arguments<'_>) -> bool {
        self.emit(Level::Error, args)
    }

    /// Highest severity. Prints only; the process keeps running, callers
    /// that want to exit do so themselves.
    pub fn fatal(&self, message: &str) -> bool {
        self.emit(Level::Fatal, format_args!("{message}"))
    }

    /// Like [`Logger::fatal`], with `format_args!` input; see [`fatalf!`](crate::fatalf).
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> bool {
        self.emit(Level::Fatal, args)
    }

    /// Emit at a severity picked at runtime.
    pub fn log(&self, severity: Level, message: &str) -> bool {
        self.emit(severity, format_args!("{message}"))
    }
}
