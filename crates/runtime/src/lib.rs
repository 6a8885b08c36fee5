//! Async game loop.
//!
//! Merges a fixed-rate timer with a channel of player commands into one
//! ordered command stream and folds it through an [`Engine`]. Every
//! resulting snapshot goes out on an unbounded channel.
//!
//! The merge is a biased `select!` with the timer checked first, so a tick
//! and a command that become ready together always apply tick-first.
//! Tick `n` carries `elapsed = n * tick_ms`, which keeps replays independent
//! of wall-clock jitter.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

use crate::core::GameState;
use crate::engine::Engine;
use crate::types::Command;

pub struct GameLoop {
    engine: Engine,
    state: GameState,
}

/// Channels and task of a spawned loop.
///
/// Dropping `commands` stops the loop; `task` resolves to the final state.
pub struct LoopHandle {
    pub commands: mpsc::Sender<Command>,
    pub snapshots: mpsc::UnboundedReceiver<GameState>,
    pub task: JoinHandle<GameState>,
}

impl GameLoop {
    pub fn new(engine: Engine, state: GameState) -> Self {
        Self { engine, state }
    }

    /// Start from the engine's own seed source.
    pub fn with_initial_state(mut engine: Engine) -> Self {
        let state = engine.initial_state();
        Self::new(engine, state)
    }

    /// Run until `commands` closes or the snapshot receiver is dropped.
    ///
    /// The current state is sent once before the first command. Ticks are
    /// generated internally; `Command::Tick` arriving on `commands` is
    /// ignored.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        snapshots: mpsc::UnboundedSender<GameState>,
    ) -> GameState {
        let tick_ms = u64::from(self.engine.config().tick_ms);
        let period = Duration::from_millis(tick_ms);
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks: u64 = 0;

        if snapshots.send(self.state.clone()).is_err() {
            return self.state;
        }

        loop {
            let command = tokio::select! {
                biased;
                _ = ticker.tick() => {
                    ticks += 1;
                    Command::Tick { elapsed: ticks * tick_ms }
                }
                received = commands.recv() => match received {
                    Some(Command::Tick { elapsed }) => {
                        debug!(elapsed, "ignoring external tick");
                        continue;
                    }
                    Some(command) => command,
                    None => break,
                },
            };

            self.state = self.engine.apply(&self.state, command);
            if snapshots.send(self.state.clone()).is_err() {
                debug!("snapshot receiver dropped");
                break;
            }
        }

        info!(
            ticks,
            score = self.state.score,
            high_score = self.state.high_score,
            "game loop stopped"
        );
        self.state
    }

    /// Spawn [`GameLoop::run`] on the current runtime.
    ///
    /// `buffer` bounds the number of queued player commands.
    pub fn spawn(self, buffer: usize) -> LoopHandle {
        let (command_tx, command_rx) = mpsc::channel(buffer.max(1));
        let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(command_rx, snapshot_tx));

        LoopHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardConfig, PieceCatalog};
    use crate::engine::FixedSeed;

    fn game_loop() -> GameLoop {
        let engine = Engine::new(
            BoardConfig::default(),
            PieceCatalog::standard(),
            Box::new(FixedSeed(42)),
        )
        .unwrap();
        GameLoop::with_initial_state(engine)
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_carry_fixed_elapsed() {
        let mut handle = game_loop().spawn(8);

        let initial = handle.snapshots.recv().await.unwrap();
        assert_eq!(initial.time, 0);

        for n in 1..=3u64 {
            let snapshot = handle.snapshots.recv().await.unwrap();
            assert_eq!(snapshot.time, n * 500);
        }

        drop(handle.commands);
        let last = handle.task.await.unwrap();
        assert_eq!(last.time, 1500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands_apply_between_ticks() {
        let mut handle = game_loop().spawn(8);
        handle.commands.send(Command::MoveLeft).await.unwrap();

        let initial = handle.snapshots.recv().await.unwrap();
        let moved = handle.snapshots.recv().await.unwrap();
        assert_eq!(moved.time, 0);
        assert_eq!(
            moved.active_piece.unwrap(),
            initial.active_piece.unwrap().translated(-1, 0)
        );

        let ticked = handle.snapshots.recv().await.unwrap();
        assert_eq!(ticked.time, 500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_external_ticks_ignored() {
        let mut handle = game_loop().spawn(8);
        handle
            .commands
            .send(Command::Tick { elapsed: 99 })
            .await
            .unwrap();

        handle.snapshots.recv().await.unwrap();
        let next = handle.snapshots.recv().await.unwrap();
        assert_eq!(next.time, 500);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_commands_stops_loop() {
        let handle = game_loop().spawn(1);
        drop(handle.commands);
        let last = handle.task.await.unwrap();
        assert_eq!(last.time, 0);
    }
}
