//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `tui_memory::term`. Scores go to the JSON file named by
//! `MEMORY_SCORES_PATH`; logs go to `MEMORY_LOG_PATH` when it is set, since
//! the terminal itself is busy drawing the board.

use std::fs::OpenOptions;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_memory::core::{GameSnapshot, GameState};
use tui_memory::input::{handle_key_event, handle_prompt_key, should_quit};
use tui_memory::store::{JsonFileStore, StoreConfig};
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::TICK_MS;
use tui_memory::{App, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    // Reject bad dimensions before the terminal switches to raw mode.
    let config = args.game_config()?;
    init_logging()?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    let game = GameState::new(config, seed)?;
    let store_config = StoreConfig::from_env();
    info!(
        "starting {} board, seed {}, scores in {}",
        game.config().matrix_label(),
        seed,
        store_config.scores_path.display()
    );
    let mut app = App::new(game, JsonFileStore::new(store_config.scores_path));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App<JsonFileStore>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.snapshot_into(&mut snap);
        view.render_into(&snap, &app.status_view(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let prompt_active = app.prompt_active();
                    if should_quit(key, prompt_active) {
                        return Ok(());
                    }
                    if prompt_active {
                        if let Some(edit) = handle_prompt_key(key) {
                            app.apply_prompt_key(edit);
                        }
                    } else if let Some(action) = handle_key_event(key) {
                        app.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}

/// Send `log` output to the file in `MEMORY_LOG_PATH`; stay silent if unset.
///
/// Level filtering follows `RUST_LOG`, defaulting to `info`.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os("MEMORY_LOG_PATH").filter(|p| !p.is_empty()) else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.to_string_lossy()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| (d.as_secs() as u32) ^ d.subsec_nanos())
}
