//! Match engine contract
//!
//! The harness never looks inside a match: it hands an engine two bots, a
//! map, a seed string and flags, and gets back one record with the final
//! score pair. Anything implementing [`MatchEngine`] can sit behind the
//! orchestrator, which is also how the tests drive it with stubs.

pub mod skirmish;

pub use skirmish::SkirmishEngine;

use crate::bots::BotProfile;
use crate::core::error::Result;
use crate::core::types::{ScorePair, Turn};
use crate::map::GridMap;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Everything an engine needs to resolve one match
#[derive(Debug)]
pub struct MatchRequest<'a> {
    pub bots: &'a [BotProfile; 2],
    pub map: &'a GridMap,
    /// Controls all randomness within the match
    pub seed: &'a str,
    /// Mirrored spawns when true, seeded random placement otherwise
    pub symmetric: bool,
    /// Keep per-turn snapshots in the record
    pub record_turns: bool,
}

/// Scores at the end of one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSnapshot {
    pub turn: Turn,
    pub scores: ScorePair,
}

/// Outcome of one match, plus optional history for rendering/replay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub seed: String,
    pub scores: ScorePair,
    /// Empty unless the request asked for turn recording
    pub turns: Vec<TurnSnapshot>,
}

/// "Run one match" capability
///
/// Implementations must be deterministic in the request: the same request
/// must produce the same record, no matter which thread runs it. `bot_out`
/// receives bot and engine chatter so callers can silence it per quiet
/// level without touching process-wide streams.
pub trait MatchEngine: Sync {
    fn run_match(&self, request: &MatchRequest<'_>, bot_out: &mut dyn Write) -> Result<MatchRecord>;
}
