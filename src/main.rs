//! Blockfall runner (default binary).
//!
//! `blockfall` / `blockfall play` runs the game in the terminal.
//! `blockfall headless` folds ticks or a command script through the engine
//! and prints every snapshot as a JSON line.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::{BoardConfig, GameState, PieceCatalog};
use blockfall::engine::{Engine, FixedSeed};
use blockfall::input::{command_for_event, should_quit};
use blockfall::runtime::{GameLoop, LoopHandle};
use blockfall::term::{BlockRegistry, GameView, TerminalRenderer, Viewport};
use blockfall::types::Command;

#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about = "Falling blocks in the terminal")]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Play in the terminal
    Play,
    /// Run without a terminal, printing each state as a JSON line
    Headless {
        #[arg(long, default_value_t = 1)]
        seed: u32,
        /// Number of ticks to run when no script is given
        #[arg(long, default_value_t = 100)]
        ticks: u64,
        /// File with one JSON command per line
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = BoardConfig::from_env();
    match cli.mode.unwrap_or(Mode::Play) {
        Mode::Play => play(config),
        Mode::Headless {
            seed,
            ticks,
            script,
        } => headless(config, seed, ticks, script.as_deref()),
    }
}

/// Log to the file named by `BLOCKFALL_LOG`, filtered by `RUST_LOG`.
///
/// The terminal is the game screen, so without a log file nothing is
/// installed.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("BLOCKFALL_LOG") else {
        return Ok(());
    };
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn headless(config: BoardConfig, seed: u32, ticks: u64, script: Option<&Path>) -> Result<()> {
    let catalog = PieceCatalog::from_choice(config.catalog);
    let tick_ms = u64::from(config.tick_ms);
    let mut engine = Engine::new(config, catalog, Box::new(FixedSeed(seed)))?;

    let commands = match script {
        Some(path) => read_script(path)?,
        None => (1..=ticks)
            .map(|n| Command::Tick {
                elapsed: n * tick_ms,
            })
            .collect(),
    };

    let initial = engine.initial_state();
    let snapshots = engine.run(&initial, commands);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for state in std::iter::once(&initial).chain(snapshots.iter()) {
        serde_json::to_writer(&mut out, state)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn read_script(path: &Path) -> Result<Vec<Command>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let line = line.trim();
            let parsed = match Command::from_str(line) {
                Some(command) => Ok(command),
                None => serde_json::from_str(line),
            };
            parsed.with_context(|| format!("{}:{}: invalid command", path.display(), i + 1))
        })
        .collect()
}

fn play(config: BoardConfig) -> Result<()> {
    let engine = Engine::from_config(config.clone())?;
    let rt = tokio::runtime::Runtime::new()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = rt.block_on(run_terminal(engine, &config, &mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn run_terminal(engine: Engine, config: &BoardConfig, term: &mut TerminalRenderer) -> Result<()> {
    let LoopHandle {
        commands,
        snapshots,
        task,
    } = GameLoop::with_initial_state(engine).spawn(32);

    let input = tokio::task::spawn_blocking(move || read_input(commands));

    // Dropping the receiver on a draw error stops the loop, which in turn
    // releases the input thread.
    let rendered = render_snapshots(snapshots, &GameView::new(config), term).await;
    let input_result = input.await?;
    let last = task.await?;

    info!(score = last.score, high_score = last.high_score, "session ended");
    rendered?;
    input_result
}

async fn render_snapshots(
    mut snapshots: mpsc::UnboundedReceiver<GameState>,
    view: &GameView,
    term: &mut TerminalRenderer,
) -> Result<()> {
    let mut registry = BlockRegistry::new();
    while let Some(state) = snapshots.recv().await {
        registry.sync(&state);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&view.render(&registry, &state, Viewport::new(w, h)))?;
    }
    Ok(())
}

/// Forward key presses until quit or until the loop goes away.
fn read_input(commands: mpsc::Sender<Command>) -> Result<()> {
    let poll = Duration::from_millis(100);
    while !commands.is_closed() {
        if !event::poll(poll)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Press && should_quit(key) {
            break;
        }
        if let Some(command) = command_for_event(key) {
            if commands.blocking_send(command).is_err() {
                break;
            }
        }
    }
    Ok(())
}
