//! Board configuration.
//!
//! Grid size, tick rate and spawn column are passed to the engine as one
//! explicit value instead of being read from globals.

use std::env;

use crate::error::ConfigError;
use crate::types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SPAWN_COLUMN, DEFAULT_TICK_MS};

/// Which built-in piece catalog to play with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogChoice {
    /// Six kinds: O, I, J, L, S, T
    #[default]
    Standard,
    /// Standard plus Z
    Full,
}

impl CatalogChoice {
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(CatalogChoice::Standard),
            "full" => Ok(CatalogChoice::Full),
            other => Err(ConfigError::UnknownCatalog(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
    pub tick_ms: u32,
    /// Column the leftmost cell of a spawned piece lands on
    pub spawn_column: i32,
    pub catalog: CatalogChoice,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            spawn_column: DEFAULT_SPAWN_COLUMN,
            catalog: CatalogChoice::Standard,
        }
    }
}

impl BoardConfig {
    /// Create from environment variables, falling back to defaults.
    ///
    /// - `BLOCKFALL_WIDTH`, `BLOCKFALL_HEIGHT`: grid size
    /// - `BLOCKFALL_TICK_MS`: tick interval
    /// - `BLOCKFALL_SPAWN_COLUMN`: spawn column
    /// - `BLOCKFALL_CATALOG`: `standard` or `full`
    ///
    /// Unparsable values fall back to the default. The result is not
    /// validated; the engine does that on construction.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let width = env::var("BLOCKFALL_WIDTH")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.width);

        let height = env::var("BLOCKFALL_HEIGHT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.height);

        let tick_ms = env::var("BLOCKFALL_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.tick_ms);

        let spawn_column = env::var("BLOCKFALL_SPAWN_COLUMN")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.spawn_column);

        let catalog = env::var("BLOCKFALL_CATALOG")
            .ok()
            .and_then(|s| CatalogChoice::from_str(&s).ok())
            .unwrap_or(defaults.catalog);

        Self {
            width,
            height,
            tick_ms,
            spawn_column,
            catalog,
        }
    }

    /// Check the board dimensions and tick rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if self.height <= 0 {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Whether `(x, y)` lies on the board or above it.
    ///
    /// Rows above the top edge are open so pieces can enter from there.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y < self.height
    }
}
