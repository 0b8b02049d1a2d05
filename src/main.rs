//! Terminal Blockfall runner (default binary).
//!
//! Drives the engine with a wall-clock scheduler, maps `crossterm` key events
//! to commands and prints the render view. Configuration comes from the
//! environment (see `blockfall::core::config`); logging goes to stderr through
//! `env_logger`, so run with `RUST_LOG=debug 2>blockfall.log` to capture it.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::core::{GameConfig, GameEngine};
use blockfall::input::{handle_key_event, should_quit, should_restart};
use blockfall::term::{frame_lines, TerminalRenderer};

/// Input poll timeout while the clock is stopped (after game over)
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::from_env();
    info!("config: {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameEngine::from_config(config);
    game.start();

    loop {
        let view = game.render_view();
        term.draw(&frame_lines(&view, game.score(), game.is_game_over()))?;

        // Wait for input until the next tick is due.
        let timeout = game.scheduler().time_until_next().unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        game.stop();
                        return Ok(());
                    }
                    if should_restart(key) {
                        game.start();
                    } else if let Some(command) = handle_key_event(key) {
                        game.handle_input(command);
                    }
                }
            }
        }

        game.run_pending();
    }
}
