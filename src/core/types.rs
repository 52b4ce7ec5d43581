//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Which competitor a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    P1,
    P2,
}

/// Final scores of the two competitors for one match
///
/// Produced exactly once per match index and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorePair {
    pub p1: u32,
    pub p2: u32,
}

impl ScorePair {
    pub fn new(p1: u32, p2: u32) -> Self {
        Self { p1, p2 }
    }

    /// The winning side, or None for a draw
    pub fn winner(&self) -> Option<Side> {
        if self.p1 > self.p2 {
            Some(Side::P1)
        } else if self.p2 > self.p1 {
            Some(Side::P2)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ScorePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.p1, self.p2)
    }
}

/// Simulation turn counter within one match
pub type Turn = u32;
