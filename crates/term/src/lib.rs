//! Terminal front-end for the block-fall engine.
//!
//! Snapshots from the engine are folded into a [`BlockRegistry`] (one
//! retained cell per block id), which [`GameView`] paints into a
//! [`FrameBuffer`]. [`TerminalRenderer`] is the only part that does I/O.
//!
//! # Module Structure
//!
//! - [`fb`]: framebuffer and cell styles
//! - [`registry`]: block id to cell handle map
//! - [`game_view`]: board, side panel and overlays
//! - [`renderer`]: crossterm output with per-row diffing

pub mod fb;
pub mod game_view;
pub mod registry;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use registry::{BlockRegistry, CellHandle, SyncStats};
pub use renderer::TerminalRenderer;
