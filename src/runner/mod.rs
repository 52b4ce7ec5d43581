//! Match orchestration and distribution
//!
//! `orchestrator` runs one contiguous range of matches sequentially;
//! `scheduler` partitions a batch across parallel workers and merges the
//! results back into global match order.

pub mod orchestrator;
pub mod scheduler;

pub use orchestrator::MatchRunner;
pub use scheduler::{partition, run_all};
