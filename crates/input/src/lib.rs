//! Terminal input mapping.
//!
//! Turns `crossterm` key events into engine [`Command`](crate::types::Command)s.
//! Moves are edge-triggered: only key presses count, terminal auto-repeat
//! and releases are dropped.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_event, handle_key_event, should_quit};
