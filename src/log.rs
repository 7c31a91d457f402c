//! Diagnostics for the binary itself (colorized, timestamped, on stderr so
//! they never mix with the logger's stdout lines).

use tracing_subscriber::fmt::time::UtcTime;

/// Map a numeric verbosity (0..3) to a tracing level string.
pub fn level_from_verbosity(v: u8) -> &'static str {
    match v {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize global diagnostics with color and RFC3339 timestamps.
/// Accepts a level string like "warn" | "info" | "debug" | "trace".
pub fn init(level: &str) {
    // If a global subscriber is already set, ignore errors.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        // e.g. 2025-09-23T13:37:42Z
        .with_timer(UtcTime::rfc_3339())
        .with_env_filter(level)
        .with_target(false)
        .with_ansi(true)
        .with_level(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_filters() {
        assert_eq!(level_from_verbosity(0), "warn");
        assert_eq!(level_from_verbosity(1), "info");
        assert_eq!(level_from_verbosity(2), "debug");
        assert_eq!(level_from_verbosity(9), "trace");
    }
}
