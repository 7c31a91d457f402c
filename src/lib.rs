//! Leveled console logger: timestamped, project-tagged lines on stdout with
//! optional color.
//!
//! ```no_run
//! use gogger::{Logger, UK_DATE_TIME_FORMAT};
//!
//! let mut log = Logger::new("svc", UK_DATE_TIME_FORMAT, true);
//! log.warn("disk at 90%");
//! gogger::infof!(log, "count={}", 42);
//! log.set_level(3).unwrap();
//! assert!(!log.warn("now filtered"));
//! ```

mod clock;
mod error;
mod level;
mod logger;
mod paint;
mod sink;

pub use clock::{Clock, SystemClock, UK_DATE_TIME_FORMAT, US_DATE_TIME_FORMAT, preset};
pub use error::{Error, Result};
pub use level::{Level, PROJECT_NAME_COLOR};
pub use logger::Logger;
pub use paint::{Ansi, Paint, Plain};
pub use sink::{Memory, Sink, Stdout};

/// Re-exported so [`Paint`] can be implemented without a direct dependency.
pub use colored::Color;

/// `verbosef!(logger, "fmt", args..)`
#[macro_export]
macro_rules! verbosef {
    ($logger:expr, $($arg:tt)+) => {
        $logger.verbosef(::std::format_args!($($arg)+))
    };
}

/// `infof!(logger, "fmt", args..)`
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $logger.infof(::std::format_args!($($arg)+))
    };
}

/// `warnf!(logger, "fmt", args..)`
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warnf(::std::format_args!($($arg)+))
    };
}

/// `errorf!(logger, "fmt", args..)`
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.errorf(::std::format_args!($($arg)+))
    };
}

/// `fatalf!(logger, "fmt", args..)`. Does not exit.
#[macro_export]
macro_rules! fatalf {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(::std::format_args!($($arg)+))
    };
}
