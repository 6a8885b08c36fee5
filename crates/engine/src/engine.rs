//! Engine - the command reducer
//!
//! Owns the validated board configuration, the piece catalog, and the seed
//! source used by restarts. `apply` is the single entry point every command
//! goes through.

use tracing::{debug, info};

use crate::core::types::Command;
use crate::core::{BoardConfig, ConfigError, GameState, PieceCatalog};
use crate::seed::{ClockSeed, SeedSource};
use crate::transition::{restart, rotate, shift, tick};

pub struct Engine {
    config: BoardConfig,
    catalog: PieceCatalog,
    seeds: Box<dyn SeedSource + Send>,
}

impl Engine {
    /// Validate `config` against `catalog` and build an engine.
    pub fn new(
        config: BoardConfig,
        catalog: PieceCatalog,
        seeds: Box<dyn SeedSource + Send>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        catalog.check_spawn(&config)?;

        info!(
            width = config.width,
            height = config.height,
            tick_ms = config.tick_ms,
            kinds = catalog.len(),
            "engine ready"
        );

        Ok(Self {
            config,
            catalog,
            seeds,
        })
    }

    /// Engine for `config` with its configured catalog and clock seeding
    pub fn from_config(config: BoardConfig) -> Result<Self, ConfigError> {
        let catalog = PieceCatalog::from_choice(config.catalog);
        Self::new(config, catalog, Box::new(ClockSeed))
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    /// First state, seeded from the engine's seed source
    pub fn initial_state(&mut self) -> GameState {
        let seed = self.seeds.next_seed();
        self.initial_state_with_seed(seed)
    }

    pub fn initial_state_with_seed(&self, seed: u32) -> GameState {
        GameState::initial(&self.config, &self.catalog, seed)
    }

    /// Reduce one command against `state`.
    ///
    /// Never fails; disallowed moves come back as an unchanged copy.
    pub fn apply(&mut self, state: &GameState, command: Command) -> GameState {
        debug!(command = command.as_str(), time = state.time, "apply");

        match command {
            Command::Tick { elapsed } => tick(&self.config, &self.catalog, state, elapsed),
            Command::MoveLeft => shift(&self.config, state, -1),
            Command::MoveRight => shift(&self.config, state, 1),
            Command::Rotate => rotate(&self.config, state),
            Command::Restart => {
                let seed = self.seeds.next_seed();
                restart(&self.config, &self.catalog, state, seed)
            }
        }
    }

    /// Fold `commands` over `state`, returning every intermediate snapshot.
    pub fn run<I>(&mut self, state: &GameState, commands: I) -> Vec<GameState>
    where
        I: IntoIterator<Item = Command>,
    {
        let mut current = state.clone();
        commands
            .into_iter()
            .map(|command| {
                current = self.apply(&current, command);
                current.clone()
            })
            .collect()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("kinds", &self.catalog.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hash;
    use crate::seed::{FixedSeed, SeedList};

    fn engine(seed: u32) -> Engine {
        Engine::new(
            BoardConfig::default(),
            PieceCatalog::standard(),
            Box::new(FixedSeed(seed)),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = BoardConfig {
            width: 0,
            ..BoardConfig::default()
        };
        let err = Engine::new(config, PieceCatalog::standard(), Box::new(FixedSeed(1)));
        assert_eq!(err.unwrap_err(), ConfigError::InvalidWidth(0));
    }

    #[test]
    fn test_new_rejects_spawn_outside_walls() {
        let config = BoardConfig {
            spawn_column: 8,
            ..BoardConfig::default()
        };
        assert!(Engine::new(config, PieceCatalog::standard(), Box::new(FixedSeed(1))).is_err());
    }

    #[test]
    fn test_initial_state_uses_seed_source() {
        let mut engine = engine(42);
        let state = engine.initial_state();
        assert_eq!(state.rng_seed, hash(42));
        assert_eq!(state, engine.initial_state_with_seed(42));
    }

    #[test]
    fn test_apply_dispatches() {
        let mut engine = engine(42);
        let state = engine.initial_state();

        let ticked = engine.apply(&state, Command::Tick { elapsed: 500 });
        assert_eq!(ticked.time, 500);

        let left = engine.apply(&ticked, Command::MoveLeft);
        let right = engine.apply(&left, Command::MoveRight);
        assert_eq!(right.active_piece, ticked.active_piece);
    }

    #[test]
    fn test_restart_draws_new_seed() {
        let mut engine = Engine::new(
            BoardConfig::default(),
            PieceCatalog::standard(),
            Box::new(SeedList::new(vec![1, 2])),
        )
        .unwrap();
        let state = engine.initial_state();
        let restarted = engine.apply(&state, Command::Restart);
        assert_eq!(restarted.rng_seed, hash(2));
    }

    #[test]
    fn test_run_returns_every_snapshot() {
        let mut engine = engine(3);
        let state = engine.initial_state();
        let ticks = (1..=5).map(|i| Command::Tick { elapsed: i * 500 });
        let snapshots = engine.run(&state, ticks);

        assert_eq!(snapshots.len(), 5);
        assert_eq!(snapshots[4].time, 2500);
        assert_eq!(snapshots[4].active_piece.unwrap().max_y(), 5);
    }
}
