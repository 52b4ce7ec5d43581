//! Botgrid - Entry Point
//!
//! Parses the CLI, builds one run configuration, hands it to the
//! scheduler, and prints the aggregated results.

use botgrid::config::{DisplayMode, RunConfig};
use botgrid::core::error::Result;
use botgrid::engine::SkirmishEngine;
use botgrid::output::OutputGate;
use botgrid::report::{self, MatchTally, HEATMAP_SIZE};
use botgrid::runner;

use clap::Parser;
use rand::Rng;
use std::io;
use std::path::PathBuf;

/// Largest auto-generated game seed
const MAX_SEED: u64 = 2_147_483_647;

/// Batch match runner for bot-vs-bot grid skirmishes
#[derive(Parser, Debug)]
#[command(name = "botgrid")]
#[command(about = "Run batches of deterministic bot-vs-bot matches")]
struct Args {
    /// File containing the first bot profile
    player1: PathBuf,

    /// File containing the second bot profile
    player2: PathBuf,

    /// Map file (built-in default map when omitted)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Match count; more than 1 distributes across workers
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Animate turn-by-turn output when rendering
    #[arg(short = 'A', long)]
    animate: bool,

    /// Quiet execution, cumulative:
    /// -q suppresses bot stdout, -qq also stderr,
    /// -qqq all tool output, -qqqq summary only
    #[arg(short, long, action = clap::ArgAction::Count, verbatim_doc_comment)]
    quiet: u8,

    /// Disable rendering entirely
    #[arg(short = 'H', long, group = "display")]
    headless: bool,

    /// Compute matches on a separate thread from rendering
    #[arg(short = 'T', long, group = "display")]
    play_in_thread: bool,

    /// Show each match in an interactive terminal session
    #[arg(short = 'C', long, group = "display")]
    console: bool,

    /// Base seed; combined with the match index for per-match seeds
    #[arg(long)]
    game_seed: Option<String>,

    /// Explicit seeds for the first matches, in order
    #[arg(long, num_args = 0..)]
    match_seeds: Option<Vec<String>>,

    /// Bots spawn randomly instead of symmetrically
    #[arg(short, long)]
    random: bool,

    /// Print a score heatmap after the run
    #[arg(short = 'M', long)]
    heatmap: bool,

    /// Global index of the first match, useful for resuming
    #[arg(short, long, default_value_t = 0)]
    start: usize,

    /// Dump per-match records as JSON into this directory
    #[arg(long)]
    record_dir: Option<PathBuf>,
}

impl Args {
    fn display_mode(&self) -> DisplayMode {
        if self.headless {
            DisplayMode::Headless
        } else if self.play_in_thread {
            DisplayMode::ThreadedRender
        } else if self.console {
            DisplayMode::Interactive
        } else {
            DisplayMode::Render
        }
    }

    fn into_config(self, game_seed: String) -> RunConfig {
        RunConfig {
            display: self.display_mode(),
            bot_files: [self.player1, self.player2],
            map_path: self.map,
            animate: self.animate,
            game_seed,
            match_seeds: self.match_seeds,
            quiet: self.quiet,
            symmetric: !self.random,
            count: self.count,
            start: self.start,
            record_dir: self.record_dir,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("botgrid=info")
        .init();

    let args = Args::parse();
    let heatmap = args.heatmap;
    let names = [
        args.player1.display().to_string(),
        args.player2.display().to_string(),
    ];

    let game_seed = args
        .game_seed
        .clone()
        .unwrap_or_else(|| rand::thread_rng().gen_range(0..=MAX_SEED).to_string());
    let config = args.into_config(game_seed);
    let gate = OutputGate::new(config.quiet);

    gate.info(&format!("Game seed: {}", config.game_seed));

    let engine = SkirmishEngine::new();
    let scores = match runner::run_all(&config, &engine) {
        Ok(scores) => scores,
        Err(e) => {
            // Error reporting is never gated by quiet levels.
            tracing::error!("run aborted: {}", e);
            return Err(e);
        }
    };

    if heatmap {
        report::write_heatmap(&mut io::stdout(), &scores, &names, HEATMAP_SIZE)?;
    }

    let tally = MatchTally::from_scores(&scores);
    gate.summary(&tally.summary_line());
    Ok(())
}
