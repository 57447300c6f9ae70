//! Terminal blockfall runner.
//!
//! Owns the frame loop: polls input, feeds elapsed time to the engine, and
//! renders after every tick. The engine itself never schedules anything.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::GameConfig;
use blockfall::core::Engine;
use blockfall::input::{map_key, should_quit};
use blockfall::term::TerminalRenderer;
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);

    let mut engine = Engine::new(GameConfig::default(), seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, engine: &mut Engine) -> Result<()> {
    engine.start();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        term.draw(engine)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        engine.apply_action(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            engine.tick(TICK_MS);
        }
    }
}
