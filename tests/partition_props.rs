//! Property tests for work-slice partitioning and seed determinism

use botgrid::config::{DisplayMode, RunConfig};
use botgrid::engine::SkirmishEngine;
use botgrid::output::OutputGate;
use botgrid::runner::{partition, MatchRunner};
use proptest::prelude::*;
use std::path::PathBuf;

fn bot_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data/bots")
        .join(format!("{}.toml", name))
}

fn config_with(count: usize, start: usize) -> RunConfig {
    let mut config = RunConfig::new(bot_file("rusher"), bot_file("guardian"));
    config.display = DisplayMode::Headless;
    config.game_seed = "prop".to_string();
    config.count = count;
    config.start = start;
    config.quiet = 4;
    config
}

proptest! {
    #[test]
    fn slices_partition_range_exactly(
        count in 0usize..500,
        workers in 1usize..32,
        start in 0usize..100,
    ) {
        let slices = partition(&config_with(count, start), workers);

        // No gaps, no overlaps: starts chain from the global start and the
        // counts sum to the requested total.
        let mut next = start;
        for slice in &slices {
            prop_assert!(slice.count > 0);
            prop_assert_eq!(slice.start, next);
            next += slice.count;
        }
        prop_assert_eq!(next, start + count);
        prop_assert!(slices.len() <= workers);

        // Remainder is front-loaded onto slice 0.
        if let Some(first) = slices.first() {
            for slice in &slices[1..] {
                prop_assert!(slice.count <= first.count);
            }
        }
    }

    #[test]
    fn sliced_runs_reproduce_sequential_outcomes(
        count in 1usize..12,
        workers in 1usize..6,
    ) {
        let config = config_with(count, 0);
        let gate = OutputGate::new(4);
        let engine = SkirmishEngine::new();

        let sequential = MatchRunner::new(config.clone(), &engine)
            .unwrap()
            .run(&gate)
            .unwrap();

        let mut flattened = Vec::new();
        for slice in partition(&config, workers) {
            let scores = MatchRunner::new(slice, &engine).unwrap().run(&gate).unwrap();
            flattened.extend(scores);
        }

        prop_assert_eq!(flattened, sequential);
    }
}
