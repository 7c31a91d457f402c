//! Where finished lines go.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Receives one fully formatted line per successful emission, without the
/// trailing newline.
pub trait Sink {
    fn write_line(&self, line: &str);
}

/// Process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        // A closed stdout is not the caller's problem.
        let _ = writeln!(out, "{line}");
    }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Sink for Memory {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clones_share_lines() {
        let sink = Memory::new();
        let handle = sink.clone();
        sink.write_line("a");
        handle.write_line("b");
        assert_eq!(sink.lines(), vec!["a", "b"]);
        handle.clear();
        assert!(sink.lines().is_empty());
    }
}
