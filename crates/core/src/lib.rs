//! Core game logic - pure, deterministic, and testable
//!
//! Everything the transition engine is built from: shapes, collision
//! predicates, row clearing, the seed sequence and the state value itself.
//! Nothing here does I/O or keeps hidden state.
//!
//! - **Deterministic**: the same seed and commands replay the same game
//! - **Immutable**: states and blocks are values; a move makes a new one
//! - **Configurable**: board size is a [`BoardConfig`], never a literal
//!
//! # Module Structure
//!
//! - [`config`]: board dimensions, tick rate, spawn column
//! - [`collision`]: boundary, stack and top-overflow checks
//! - [`game_state`]: the `GameState` snapshot
//! - [`pieces`]: shape catalog and pivot rotation
//! - [`rng`]: LCG seed sequence and kind selection
//! - [`rows`]: full-row detection and compaction
//!
//! # Example
//!
//! ```
//! use blockfall_core::{BoardConfig, GameState, PieceCatalog};
//!
//! let config = BoardConfig::default();
//! let catalog = PieceCatalog::standard();
//! let state = GameState::initial(&config, &catalog, 12345);
//!
//! assert!(state.playable());
//! assert_eq!(state.active_blocks().len(), 4);
//! ```

pub mod collision;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rows;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use config::{BoardConfig, CatalogChoice};
pub use error::ConfigError;
pub use game_state::GameState;
pub use pieces::{Piece, PieceCatalog, PieceShape, Pivot};
pub use rng::{hash, scale, select_index};
pub use rows::{resolve_rows, RowClear};
