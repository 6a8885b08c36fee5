//! Core types shared across the workspace
//! Pure value types: blocks, piece kinds, commands, and board defaults

use serde::{Deserialize, Serialize};

/// Default board dimensions
pub const DEFAULT_GRID_WIDTH: i32 = 10;
pub const DEFAULT_GRID_HEIGHT: i32 = 20;

/// Default tick interval (milliseconds)
pub const DEFAULT_TICK_MS: u32 = 500;

/// Default column of a freshly spawned piece's leftmost cell
pub const DEFAULT_SPAWN_COLUMN: i32 = 4;

/// Identifier of a single block; unique across the lifetime of a process
pub type BlockId = u64;

/// Display tag carried by each block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Cyan,
    Blue,
    Orange,
    Green,
    Purple,
    Red,
}

/// Piece kinds, numbered in catalog order starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    O,
    I,
    J,
    L,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Color every block of this kind is tagged with
    pub fn color(&self) -> Color {
        match self {
            PieceKind::O => Color::Yellow,
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
            PieceKind::Z => Color::Red,
        }
    }
}

/// A single unit cell on the board.
///
/// `y` grows downward and may be negative while a piece is still entering
/// the board from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Block {
    pub fn new(id: BlockId, x: i32, y: i32, color: Color) -> Self {
        Self { id, x, y, color }
    }

    /// Same block moved by `(dx, dy)`
    #[inline]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same block placed at `(x, y)`
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> Self {
        Self { x, y, ..*self }
    }

    #[inline]
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Commands accepted by the transition engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Advance time by one step; carries the elapsed time in milliseconds
    Tick { elapsed: u64 },
    MoveLeft,
    MoveRight,
    Rotate,
    Restart,
}

impl Command {
    /// Parse a command name (for the headless driver and tests)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "rotate" => Some(Command::Rotate),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Tick { .. } => "tick",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::Rotate => "rotate",
            Command::Restart => "restart",
        }
    }
}
