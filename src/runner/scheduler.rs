//! Concurrent match distribution
//!
//! Splits a batch of matches into contiguous, non-overlapping slices, runs
//! one `MatchRunner` per slice on the rayon pool, and concatenates the
//! per-slice results in slice order. Slice starts are assigned
//! monotonically, so the concatenation is already in ascending global
//! match-index order. Seeds depend only on the config and the global
//! index, which keeps a distributed run outcome-identical to a sequential
//! one.

use crate::config::RunConfig;
use crate::core::error::Result;
use crate::core::types::ScorePair;
use crate::engine::MatchEngine;
use crate::output::OutputGate;
use crate::runner::orchestrator::MatchRunner;
use rayon::prelude::*;

/// Split `config`'s range into per-worker slices
///
/// The first slice absorbs the division remainder, so
/// `sum(slice.count) == config.count` exactly and the slice ranges union
/// to `[start, start + count)` with no gaps or overlaps. Workers that
/// would receive zero matches get no slice at all.
pub fn partition(config: &RunConfig, workers: usize) -> Vec<RunConfig> {
    let workers = workers.max(1);
    let base = config.count / workers;
    let remainder = config.count % workers;

    let mut slices = Vec::with_capacity(workers);
    let mut start = config.start;
    for k in 0..workers {
        let count = if k == 0 { base + remainder } else { base };
        if count == 0 {
            continue;
        }
        slices.push(config.slice(start, count));
        start += count;
    }
    slices
}

/// Run the whole batch, fanning out across workers when it pays off
///
/// Single-match runs, and hosts where the pool has only one thread, take
/// the sequential path. Otherwise each slice runs an independent
/// `MatchRunner` (which re-loads the bots from their source files), the
/// scheduler blocks until every worker finishes, and a failure in any
/// slice fails the whole run.
pub fn run_all<E: MatchEngine + Sync>(config: &RunConfig, engine: &E) -> Result<Vec<ScorePair>> {
    let gate = OutputGate::new(config.quiet);
    let workers = rayon::current_num_threads();

    if config.count <= 1 || workers <= 1 {
        return MatchRunner::new(config.clone(), engine)?.run(&gate);
    }

    let slices = partition(config, workers);
    tracing::debug!("dispatching {} slices across {} workers", slices.len(), workers);

    let per_slice = slices
        .into_par_iter()
        .map(|slice| MatchRunner::new(slice, engine)?.run(&gate))
        .collect::<Result<Vec<_>>>()?;

    Ok(per_slice.into_iter().flatten().collect())
}
