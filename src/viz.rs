//! Interactive terminal visualization
//!
//! "Drive an interactive session" capability plus the process-wide lock
//! that serializes sessions. Workers run matches in parallel, but only one
//! of them may own the terminal at a time; the lock guard is RAII, so it is
//! released on every exit path, including a failing session.

use crate::core::error::{BotgridError, Result};
use crate::engine::MatchRecord;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Terminal;
use std::io;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

static VISUALIZER_LOCK: Mutex<()> = Mutex::new(());

/// Acquire exclusive terminal ownership, blocking until free
///
/// A worker that panicked while drawing must not wedge every other worker,
/// so a poisoned lock is reclaimed.
pub fn lock_visualizer() -> MutexGuard<'static, ()> {
    VISUALIZER_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub trait Visualizer {
    fn run_session(&self, record: &MatchRecord, names: &[String; 2]) -> Result<()>;
}

/// Full-screen terminal session for one finished match
///
/// Shows both score trajectories and the final result; dismissed with any
/// key press.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalVisualizer;

impl TerminalVisualizer {
    pub fn new() -> Self {
        Self
    }

    fn draw_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        record: &MatchRecord,
        names: &[String; 2],
    ) -> Result<()> {
        let p1_series: Vec<u64> = record.turns.iter().map(|t| t.scores.p1 as u64).collect();
        let p2_series: Vec<u64> = record.turns.iter().map(|t| t.scores.p2 as u64).collect();

        loop {
            terminal.draw(|frame| {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3),
                        Constraint::Min(3),
                        Constraint::Min(3),
                    ])
                    .split(frame.size());

                let title = Paragraph::new(format!(
                    "{} {} - {} {}  (seed {}, any key to close)",
                    names[0], record.scores.p1, record.scores.p2, names[1], record.seed
                ))
                .block(Block::default().borders(Borders::ALL).title("match"));
                frame.render_widget(title, rows[0]);

                frame.render_widget(
                    Sparkline::default()
                        .block(Block::default().borders(Borders::ALL).title(names[0].clone()))
                        .data(&p1_series),
                    rows[1],
                );
                frame.render_widget(
                    Sparkline::default()
                        .block(Block::default().borders(Borders::ALL).title(names[1].clone()))
                        .data(&p2_series),
                    rows[2],
                );
            })?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(());
                    }
                }
            }
        }
    }
}

impl Visualizer for TerminalVisualizer {
    fn run_session(&self, record: &MatchRecord, names: &[String; 2]) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let session = Terminal::new(CrosstermBackend::new(stdout))
            .map_err(BotgridError::from)
            .and_then(|mut terminal| Self::draw_loop(&mut terminal, record, names));

        // Restore the terminal before surfacing any session error.
        let restored = execute!(io::stdout(), LeaveAlternateScreen);
        let raw = disable_raw_mode();
        session?;
        restored?;
        raw?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_is_exclusive() {
        let guard = lock_visualizer();
        assert!(VISUALIZER_LOCK.try_lock().is_err());
        drop(guard);
        assert!(VISUALIZER_LOCK.try_lock().is_ok());
    }
}
