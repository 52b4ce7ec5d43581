//! Sequential match orchestration
//!
//! A `MatchRunner` owns one `RunConfig` and a loaded pair of bots, and
//! plays the config's match range `[start, start + count)` in order. Each
//! match gets a seed that is a pure function of the config and the match
//! index, so reruns reproduce outcomes regardless of display mode or how
//! the range was sliced across workers.

use crate::bots::{load_bot, BotProfile};
use crate::config::{DisplayMode, RunConfig};
use crate::core::error::{BotgridError, Result};
use crate::core::types::ScorePair;
use crate::engine::{MatchEngine, MatchRecord, MatchRequest};
use crate::map::GridMap;
use crate::output::OutputGate;
use crate::render::{Renderer, TextRenderer};
use crate::viz::{lock_visualizer, TerminalVisualizer, Visualizer};
use std::fs;
use std::thread;

pub struct MatchRunner<'e, E: MatchEngine> {
    config: RunConfig,
    engine: &'e E,
    map: GridMap,
    bots: [BotProfile; 2],
    names: [String; 2],
    renderer: Box<dyn Renderer>,
    visualizer: Box<dyn Visualizer>,
}

impl<'e, E: MatchEngine> MatchRunner<'e, E> {
    /// Load everything the config points at
    ///
    /// Bad map or bot files surface here, before any match runs. Bots are
    /// loaded from their source files rather than passed in, so each
    /// distributed worker builds its own pair.
    pub fn new(config: RunConfig, engine: &'e E) -> Result<Self> {
        let map = GridMap::load(config.map_path.as_deref())?;
        let bots = [load_bot(&config.bot_files[0])?, load_bot(&config.bot_files[1])?];
        let names = [bots[0].name.clone(), bots[1].name.clone()];
        let renderer = Box::new(TextRenderer::new(config.animate));

        Ok(Self {
            config,
            engine,
            map,
            bots,
            names,
            renderer,
            visualizer: Box::new(TerminalVisualizer::new()),
        })
    }

    /// Play the configured match range, in ascending index order
    ///
    /// Returns one score pair per match. A failing match aborts the rest of
    /// the range; nothing is retried.
    pub fn run(&self, gate: &OutputGate) -> Result<Vec<ScorePair>> {
        let mut scores = Vec::with_capacity(self.config.count);
        let mut printed = Vec::with_capacity(self.config.count);
        let mut pending_render: Option<MatchRecord> = None;

        for i in self.config.start..self.config.start + self.config.count {
            let seed = self.config.match_seed(i);
            tracing::debug!("match {} starting with seed {}", i, seed);

            let record = self.play(&seed, pending_render.take(), gate)?;

            if let Some(dir) = &self.config.record_dir {
                save_record(dir, i, &record)?;
            }
            printed.push(format!("{} - seed: {}", record.scores, seed));
            scores.push(record.scores);

            if self.config.display == DisplayMode::ThreadedRender {
                pending_render = Some(record);
            }
        }

        // Threaded mode renders one match behind; flush the last one.
        if let Some(record) = pending_render {
            self.render(&record, gate)?;
        }

        gate.results(&printed);
        Ok(scores)
    }

    /// Resolve one match and drive the configured display mode
    ///
    /// `previous` is the not-yet-rendered record from the last match; in
    /// threaded mode it is rendered while the engine computes the current
    /// match on its own thread. The score pair is only taken after that
    /// thread has fully completed (no partial results).
    fn play(
        &self,
        seed: &str,
        previous: Option<MatchRecord>,
        gate: &OutputGate,
    ) -> Result<MatchRecord> {
        let request = MatchRequest {
            bots: &self.bots,
            map: &self.map,
            seed,
            symmetric: self.config.symmetric,
            record_turns: self.config.display != DisplayMode::Headless
                || self.config.record_dir.is_some(),
        };
        let mut bot_out = gate.bot_sink();

        match self.config.display {
            DisplayMode::Headless => self.engine.run_match(&request, &mut bot_out),
            DisplayMode::Render => {
                let record = self.engine.run_match(&request, &mut bot_out)?;
                self.render(&record, gate)?;
                Ok(record)
            }
            DisplayMode::ThreadedRender => thread::scope(|scope| {
                let engine = self.engine;
                let handle = scope.spawn(move || engine.run_match(&request, &mut bot_out));
                if let Some(record) = previous {
                    self.render(&record, gate)?;
                }
                handle
                    .join()
                    .map_err(|_| BotgridError::Engine("engine thread panicked".to_string()))?
            }),
            DisplayMode::Interactive => {
                let record = self.engine.run_match(&request, &mut bot_out)?;
                // One terminal session at a time across all workers; the
                // guard releases on every exit path.
                let _terminal = lock_visualizer();
                self.visualizer.run_session(&record, &self.names)?;
                Ok(record)
            }
        }
    }

    fn render(&self, record: &MatchRecord, gate: &OutputGate) -> Result<()> {
        let mut out = gate.tool_sink();
        self.renderer.render(record, &self.names, &mut out)
    }
}

fn save_record(dir: &std::path::Path, index: usize, record: &MatchRecord) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("match-{}.json", index));
    fs::write(&path, serde_json::to_string_pretty(record)?)?;
    tracing::debug!("recorded match {} to {:?}", index, path);
    Ok(())
}
