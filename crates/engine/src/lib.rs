//! Transition engine - commands in, states out
//!
//! Every game change is `(GameState, Command) -> GameState`. The functions
//! in [`transition`] are pure; [`Engine`] bundles them with a validated
//! configuration and a [`SeedSource`] for restarts.
//!
//! # Module Structure
//!
//! - [`engine`]: the `Engine` reducer
//! - [`transition`]: tick, shift, rotate and restart
//! - [`seed`]: seed sources for new games

pub mod engine;
pub mod seed;
pub mod transition;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use engine::Engine;
pub use seed::{ClockSeed, FixedSeed, SeedList, SeedSource};
