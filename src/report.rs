//! Result aggregation
//!
//! Reduces an ordered list of score pairs into win/loss/draw tallies and an
//! ASCII heatmap of score frequencies.

use crate::core::error::Result;
use crate::core::types::{ScorePair, Side};
use std::io::Write;

/// Score treated as the top of the heatmap's range
///
/// Scores above this alias into the last bucket; the grid shows them as
/// maximal rather than rejecting them.
const MAX_SCORE: u32 = 50;

/// Rows/columns in the printed heatmap
pub const HEATMAP_SIZE: usize = 26;

/// Win/loss/draw counts for one batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchTally {
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
}

impl MatchTally {
    /// Tally a batch; draws are whatever neither side won
    pub fn from_scores(scores: &[ScorePair]) -> Self {
        let p1_wins = scores.iter().filter(|s| s.winner() == Some(Side::P1)).count();
        let p2_wins = scores.iter().filter(|s| s.winner() == Some(Side::P2)).count();
        Self {
            p1_wins,
            p2_wins,
            draws: scores.len() - p1_wins - p2_wins,
        }
    }

    /// The `[p1_wins, p2_wins, draws]` line printed at the end of a run
    pub fn summary_line(&self) -> String {
        format!("[{}, {}, {}]", self.p1_wins, self.p2_wins, self.draws)
    }
}

fn to_bucket(score: u32, size: usize) -> usize {
    let bucket = (score as f64 / MAX_SCORE as f64 * (size - 1) as f64).round() as usize;
    bucket.min(size - 1)
}

/// Print the score-frequency heatmap
///
/// Rows are player-1 score buckets (highest first), columns player-2
/// buckets. Zero-count cells on the diagonal show `.`, off-diagonal ones
/// are blank, and cells past 9 show `+` instead of multi-digit counts.
/// The frame carries each player's name and win count.
pub fn write_heatmap(
    out: &mut dyn Write,
    scores: &[ScorePair],
    names: &[String; 2],
    size: usize,
) -> Result<()> {
    let mut grid = vec![vec![0usize; size]; size];
    for pair in scores {
        grid[to_bucket(pair.p1, size)][to_bucket(pair.p2, size)] += 1;
    }
    let tally = MatchTally::from_scores(scores);

    let header = format!("{} : {}", names[0], tally.p1_wins);
    // Written without subtraction: long names must not underflow the width.
    if 2 * header.len() + 2 <= 2 * size {
        let padded = format!(" {} ", header);
        writeln!(out, "*{}{}*", padded, "-".repeat(2 * size - padded.len()))?;
    } else {
        writeln!(out, "{}", header)?;
        writeln!(out, "*{}*", "-".repeat(2 * size))?;
    }

    for r in (0..size).rev() {
        write!(out, "|")?;
        for c in 0..size {
            match grid[r][c] {
                0 if r == c => write!(out, ". ")?,
                0 => write!(out, "  ")?,
                n if n > 9 => write!(out, " +")?,
                n => write!(out, " {}", n)?,
            }
        }
        writeln!(out, "|")?;
    }

    let footer = format!("{} : {}", names[1], tally.p2_wins);
    if 2 * footer.len() + 2 <= 2 * size {
        let padded = format!(" {} ", footer);
        writeln!(out, "*{}{}*", "-".repeat(2 * size - padded.len()), padded)?;
    } else {
        writeln!(out, "*{}*", "-".repeat(2 * size))?;
        writeln!(out, "{}", footer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> [String; 2] {
        ["A".to_string(), "B".to_string()]
    }

    #[test]
    fn test_tally_counts() {
        let scores = vec![
            ScorePair::new(3, 1),
            ScorePair::new(0, 5),
            ScorePair::new(2, 2),
            ScorePair::new(4, 1),
        ];
        let tally = MatchTally::from_scores(&scores);
        assert_eq!(tally.p1_wins, 2);
        assert_eq!(tally.p2_wins, 1);
        assert_eq!(tally.draws, 1);
        assert!(tally.p1_wins + tally.p2_wins <= scores.len());
        assert_eq!(tally.summary_line(), "[2, 1, 1]");
    }

    #[test]
    fn test_bucket_rounding_and_aliasing() {
        // round(score / 50 * 25)
        assert_eq!(to_bucket(0, 26), 0);
        assert_eq!(to_bucket(50, 26), 25);
        assert_eq!(to_bucket(25, 26), 13); // 12.5 rounds away from zero
        // Out-of-range scores alias into the last bucket.
        assert_eq!(to_bucket(200, 26), 25);
    }

    #[test]
    fn test_heatmap_cells_sum_to_total() {
        let scores: Vec<ScorePair> = (0..40).map(|i| ScorePair::new(i, 40 - i)).collect();
        let size = HEATMAP_SIZE;
        let mut grid = vec![vec![0usize; size]; size];
        for pair in &scores {
            grid[to_bucket(pair.p1, size)][to_bucket(pair.p2, size)] += 1;
        }
        let total: usize = grid.iter().flatten().sum();
        assert_eq!(total, scores.len());
    }

    #[test]
    fn test_heatmap_grid_rows() {
        // "A : 0" does not fit inside a width-5 frame, so the name takes
        // its own line above a plain frame.
        let scores = vec![ScorePair::new(0, 0); 12];
        let mut out = Vec::new();
        write_heatmap(&mut out, &scores, &names(), 5).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "A : 0",
                "*----------*",
                "|        . |",
                "|      .   |",
                "|    .     |",
                "|  .       |",
                "| +        |",
                "*----------*",
                "B : 0",
            ]
        );
    }

    #[test]
    fn test_name_wider_than_frame_takes_its_own_line() {
        // The CLI passes bot file paths as names, so a name can exceed the
        // full frame width (2 * size). It must fall back to the
        // name-on-its-own-line branch, not misbehave on the width math.
        let wide = [
            "benchmarks/profiles/tournament/aggressive-opening-rusher-v2.toml".to_string(),
            "b".to_string(),
        ];
        assert!(wide[0].len() > 2 * HEATMAP_SIZE);

        let mut out = Vec::new();
        write_heatmap(&mut out, &[ScorePair::new(3, 1)], &wide, HEATMAP_SIZE).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), HEATMAP_SIZE + 3);
        assert_eq!(
            lines[0],
            "benchmarks/profiles/tournament/aggressive-opening-rusher-v2.toml : 1"
        );
        assert_eq!(lines[1], format!("*{}*", "-".repeat(2 * HEATMAP_SIZE)));
        // Short footer name still embeds in the frame.
        assert!(lines[HEATMAP_SIZE + 2].ends_with(" b : 0 *"));
    }

    #[test]
    fn test_names_embed_in_frame_when_they_fit() {
        let mut out = Vec::new();
        write_heatmap(&mut out, &[ScorePair::new(50, 0)], &names(), 8).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // 2 frame lines + 8 grid rows
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "* A : 1 ---------*");
        assert_eq!(lines[9], "*--------- B : 0 *");
        // p1 score 50 is the top bucket, p2 score 0 the first column.
        assert_eq!(lines[1], "| 1            . |");
    }
}
