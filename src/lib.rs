//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace members under short module names so binaries,
//! integration tests and benches use one set of paths:
//! `blockfall::{types, core, engine, runtime, input, term}`.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_runtime as runtime;
pub use blockfall_term as term;
pub use blockfall_types as types;
