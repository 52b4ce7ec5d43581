//! Run configuration
//!
//! One immutable snapshot of a run's parameters. A distributed run clones
//! this per work slice with `count`/`start` adjusted, so workers never
//! share mutable state.

use std::path::PathBuf;

/// How a finished match is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// No rendering at all
    Headless,
    /// Render after each match completes
    #[default]
    Render,
    /// Run the engine on its own thread so the calling thread can render
    /// the previous match while the next one computes
    ThreadedRender,
    /// Interactive terminal session, serialized across workers
    Interactive,
}

/// Parameters for one run (or one work slice of a run)
///
/// Pure value object: construction validates nothing beyond types.
/// Bad map paths or malformed seed lists surface when they are consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Bot profile files, player 1 then player 2
    pub bot_files: [PathBuf; 2],
    /// Map file; None selects the built-in default map
    pub map_path: Option<PathBuf>,
    pub display: DisplayMode,
    /// Animate turn-by-turn output when rendering
    pub animate: bool,
    /// Base value combined with the match index to derive per-match seeds
    pub game_seed: String,
    /// Explicit seeds for the first matches, indexed by global match index
    pub match_seeds: Option<Vec<String>>,
    /// 0-4, cumulative suppression (see `output::OutputGate`)
    pub quiet: u8,
    /// Mirrored spawn positions; false lets bots spawn randomly
    pub symmetric: bool,
    /// Matches in this run or slice
    pub count: usize,
    /// Global index of the first match, useful for resuming
    pub start: usize,
    /// Dump each match record as JSON into this directory
    pub record_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(player1: impl Into<PathBuf>, player2: impl Into<PathBuf>) -> Self {
        Self {
            bot_files: [player1.into(), player2.into()],
            map_path: None,
            display: DisplayMode::default(),
            animate: false,
            game_seed: "0".to_string(),
            match_seeds: None,
            quiet: 0,
            symmetric: true,
            count: 1,
            start: 0,
            record_dir: None,
        }
    }

    /// Seed for match `i` (global index)
    ///
    /// An explicit seed list overrides the derived value for the indices it
    /// covers; everything past the list falls back to the sequential,
    /// deterministic `"{game_seed}-{i}"` formula. Seeds are a pure function
    /// of this config, which is what makes reruns reproducible.
    pub fn match_seed(&self, i: usize) -> String {
        if let Some(seeds) = &self.match_seeds {
            if let Some(seed) = seeds.get(i) {
                return seed.clone();
            }
        }
        format!("{}-{}", self.game_seed, i)
    }

    /// Clone restricted to the sub-range `[start, start + count)`
    pub fn slice(&self, start: usize, count: usize) -> Self {
        let mut slice = self.clone();
        slice.start = start;
        slice.count = count;
        slice
    }
}
