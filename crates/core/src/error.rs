//! Configuration errors.
//!
//! These are programmer errors caught once, when an engine is built. Game
//! transitions themselves never fail.

use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid width must be positive, got {0}")]
    InvalidWidth(i32),

    #[error("grid height must be positive, got {0}")]
    InvalidHeight(i32),

    #[error("tick interval must be at least 1ms")]
    ZeroTickRate,

    #[error("piece catalog is empty")]
    EmptyCatalog,

    #[error("piece {kind:?} has overlapping cells")]
    OverlappingCells { kind: PieceKind },

    #[error("piece {kind:?} pivot does not rotate cells onto the grid")]
    MisalignedPivot { kind: PieceKind },

    #[error("piece {kind:?} does not fit the board when spawned at column {column}")]
    SpawnOutOfBounds { kind: PieceKind, column: i32 },

    #[error("unknown piece catalog: {0}")]
    UnknownCatalog(String),
}
