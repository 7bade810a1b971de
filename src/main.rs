//! Terminal walking demo (default binary).
//!
//! Loads the configured map and sprite sheet, then runs a fixed-timestep loop:
//! poll terminal input until the next tick, advance the player, render.
//! Logs go to a file because the terminal is owned by the renderer.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tui_tilequest::core::{MoveOutcome, Player};
use tui_tilequest::input::{should_quit, HeldKeys};
use tui_tilequest::term::{FrameBuffer, GameView, Scene, TerminalRenderer, Viewport};
use tui_tilequest::types::TICK_MS;
use tui_tilequest::{Cli, GameConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve()?;
    let _guard = setup_logging(&config.log_dir)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

/// Log to `<log_dir>/tilequest.log`. The returned guard flushes on drop.
fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log dir {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "tilequest.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(guard)
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let map = config.tile_map()?;
    let (start_x, start_y) = config.start_position();
    let mut player = Player::new(start_x, start_y, &config.sprite_path);
    tracing::info!(
        cols = map.cols(),
        rows = map.rows(),
        tile_size = config.tile_size,
        start_x,
        start_y,
        "world loaded"
    );

    let mut view = GameView::new(config.pixels_per_column);
    let mut fb = FrameBuffer::new(0, 0);
    let mut held = HeldKeys::with_key_release_timeout_ms(config.key_release_timeout_ms);
    let mut last_move = MoveOutcome::Idle;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scene = Scene {
            map: &map,
            player: &player,
            tile_size: config.tile_size,
            last_move,
        };
        view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        held.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => held.handle_key_release(key.code),
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            held.update(TICK_MS);
            last_move = player.tick(&held.keys(), &map, config.tile_size);
        }
    }
}
