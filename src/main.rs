//! Terminal Snake runner (default binary).
//!
//! Reads the configuration, then drives the engine from crossterm input on a
//! fixed tick, rendering through the framebuffer renderer.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use tui_snake::cli::Cli;
use tui_snake::core::{GameConfig, GameEngine, GameSnapshot};
use tui_snake::input::{should_quit, TickInput};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Reject bad settings before the terminal is touched.
    let config = match cli.game_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = cli.init_logging() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, config, cli.seed));

    // Always try to restore terminal state.
    let restored = term.exit();
    match result.and(restored) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("terminal session failed: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut game = match seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let view = GameView::default();
    let mut input = TickInput::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = config.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit after {} ticks, length {}", game.ticks(), game.length());
                        return Ok(());
                    }
                    input.handle_key_press(key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if input.take_restart() {
                game.reset();
                input.clear();
                continue;
            }
            if let Some(direction) = input.take_turn() {
                game.queue_direction(direction);
            }
            game.tick();
        }
    }
}
