//! Match rendering
//!
//! "Render a completed match" capability. The harness calls this after the
//! engine finishes; render failures propagate like any other failure.

use crate::core::error::Result;
use crate::engine::MatchRecord;
use std::io::Write;

pub trait Renderer {
    fn render(&self, record: &MatchRecord, names: &[String; 2], out: &mut dyn Write) -> Result<()>;
}

/// Plain-text renderer
///
/// Animated mode walks the recorded turns; otherwise only the final scores
/// are shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub animate: bool,
}

impl TextRenderer {
    pub fn new(animate: bool) -> Self {
        Self { animate }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, record: &MatchRecord, names: &[String; 2], out: &mut dyn Write) -> Result<()> {
        if self.animate {
            for snapshot in &record.turns {
                writeln!(
                    out,
                    "turn {:>4}: {} {} - {} {}",
                    snapshot.turn, names[0], snapshot.scores.p1, snapshot.scores.p2, names[1]
                )?;
            }
        }
        writeln!(
            out,
            "{} {} - {} {} (seed: {})",
            names[0], record.scores.p1, record.scores.p2, names[1], record.seed
        )?;
        Ok(())
    }
}
