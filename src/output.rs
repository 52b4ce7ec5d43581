//! Quiet-level output gating
//!
//! Replaces process-wide stdout swapping with an explicit writer
//! abstraction: callers route every class of output through the gate and
//! the quiet level decides what reaches the terminal. Nothing global is
//! toggled, so there is nothing to restore on early exits. Error reporting
//! never goes through the gate.
//!
//! Quiet levels, cumulative:
//! - 1: suppress bot stdout
//! - 2: suppress bot stderr as well
//! - 3: suppress all tool output
//! - 4: final summary only

use std::io::{self, Write};

/// Output policy for one run
#[derive(Debug, Clone, Copy)]
pub struct OutputGate {
    quiet: u8,
}

impl OutputGate {
    pub fn new(quiet: u8) -> Self {
        Self { quiet }
    }

    pub fn quiet(&self) -> u8 {
        self.quiet
    }

    /// Writer handed to the engine for bot chatter
    pub fn bot_sink(&self) -> Box<dyn Write + Send> {
        if self.quiet >= 1 {
            Box::new(io::sink())
        } else {
            Box::new(io::stdout())
        }
    }

    /// Writer for tool-level output (progress, banners, rendering)
    pub fn tool_sink(&self) -> Box<dyn Write + Send> {
        if self.quiet >= 3 {
            Box::new(io::sink())
        } else {
            Box::new(io::stdout())
        }
    }

    /// Tool-level line, suppressed at quiet >= 3
    pub fn info(&self, line: &str) {
        if self.quiet < 3 {
            println!("{}", line);
        }
    }

    /// Per-match result lines, suppressed only at quiet >= 4
    pub fn results(&self, lines: &[String]) {
        if self.quiet < 4 {
            for line in lines {
                println!("{}", line);
            }
        }
    }

    /// Final summary, never suppressed
    pub fn summary(&self, line: &str) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_sink_swallows_when_quiet() {
        let gate = OutputGate::new(1);
        let mut sink = gate.bot_sink();
        // Writes succeed but go nowhere.
        writeln!(sink, "bot chatter").unwrap();
    }

    #[test]
    fn test_levels_are_cumulative() {
        assert_eq!(OutputGate::new(0).quiet(), 0);
        assert_eq!(OutputGate::new(4).quiet(), 4);
    }
}
