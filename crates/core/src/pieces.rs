//! Pieces module - shape catalog and pivot rotation
//!
//! Every shape is four cell offsets plus a pivot. Offsets put the shape's
//! bottom row at `y = 0`, so a freshly spawned piece occupies rows `-1..=0`
//! and enters the board from above.
//!
//! Pivots may sit between cells, so they are stored in half-cell units. A
//! 90° turn about a pivot lands cells back on the grid exactly when
//! `x2 + y2` is even; the catalog rejects shapes that break this.

use serde::{Deserialize, Serialize};

use crate::config::{BoardConfig, CatalogChoice};
use crate::error::ConfigError;
use crate::rng::select_index;
use crate::types::{Block, BlockId, PieceKind};

/// Offset of a single cell relative to the spawn column and row 0
pub type CellOffset = (i32, i32);

/// Rotation center in half-cell units (`x2 = 2 * px`, `y2 = 2 * py`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pivot {
    pub x2: i32,
    pub y2: i32,
}

impl Pivot {
    pub const fn from_halves(x2: i32, y2: i32) -> Self {
        Self { x2, y2 }
    }

    #[inline]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x2: self.x2 + 2 * dx,
            y2: self.y2 + 2 * dy,
        }
    }

    /// True when rotating about this pivot maps grid cells onto grid cells.
    pub fn is_grid_aligned(&self) -> bool {
        (self.x2 + self.y2).rem_euclid(2) == 0
    }

    /// Rotate the cell `(x, y)` by 90° about this pivot.
    ///
    /// With θ = 90°: `x' = px - (y - py)`, `y' = (x - px) + py`.
    #[inline]
    pub fn rotate_cell(&self, x: i32, y: i32) -> (i32, i32) {
        let nx = (self.x2 + self.y2).div_euclid(2) - y;
        let ny = x + (self.y2 - self.x2).div_euclid(2);
        (nx, ny)
    }
}

/// Static definition of one playable shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    pub kind: PieceKind,
    pub cells: [CellOffset; 4],
    pub pivot: Pivot,
}

const O_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::O,
    cells: [(0, -1), (1, -1), (0, 0), (1, 0)],
    pivot: Pivot::from_halves(1, -1),
};

const I_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::I,
    cells: [(0, 0), (1, 0), (2, 0), (3, 0)],
    pivot: Pivot::from_halves(3, 1),
};

const J_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::J,
    cells: [(0, -1), (0, 0), (1, 0), (2, 0)],
    pivot: Pivot::from_halves(2, 0),
};

const L_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::L,
    cells: [(2, -1), (0, 0), (1, 0), (2, 0)],
    pivot: Pivot::from_halves(2, 0),
};

const S_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::S,
    cells: [(1, -1), (2, -1), (0, 0), (1, 0)],
    pivot: Pivot::from_halves(2, 0),
};

const T_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::T,
    cells: [(1, -1), (0, 0), (1, 0), (2, 0)],
    pivot: Pivot::from_halves(2, 0),
};

const Z_SHAPE: PieceShape = PieceShape {
    kind: PieceKind::Z,
    cells: [(0, -1), (1, -1), (1, 0), (2, 0)],
    pivot: Pivot::from_halves(2, 0),
};

/// The six kinds reachable through `scale`, numbered 1..=6 in this order
pub const STANDARD_SHAPES: [PieceShape; 6] =
    [O_SHAPE, I_SHAPE, J_SHAPE, L_SHAPE, S_SHAPE, T_SHAPE];

/// Standard shapes plus Z as kind 7
pub const FULL_SHAPES: [PieceShape; 7] = [
    O_SHAPE, I_SHAPE, J_SHAPE, L_SHAPE, S_SHAPE, T_SHAPE, Z_SHAPE,
];

/// Falling piece: four blocks and the pivot they turn around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub blocks: [Block; 4],
    pub pivot: Pivot,
}

impl Piece {
    /// Place `shape` with its cell offsets relative to `(column, 0)`.
    ///
    /// Blocks get ids `first_id..first_id + 4` in cell order.
    pub fn spawn(shape: &PieceShape, column: i32, first_id: BlockId) -> Self {
        let color = shape.kind.color();
        let blocks = std::array::from_fn(|i| {
            let (dx, dy) = shape.cells[i];
            Block::new(first_id + i as BlockId, column + dx, dy, color)
        });

        Self {
            kind: shape.kind,
            blocks,
            pivot: shape.pivot.translated(column, 0),
        }
    }

    /// Same piece moved by `(dx, dy)`, pivot included
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            kind: self.kind,
            blocks: self.blocks.map(|b| b.translated(dx, dy)),
            pivot: self.pivot.translated(dx, dy),
        }
    }

    /// Candidate after a 90° turn about the pivot; not checked for fit
    pub fn rotated(&self) -> Self {
        let pivot = self.pivot;
        Self {
            kind: self.kind,
            blocks: self.blocks.map(|b| {
                let (x, y) = pivot.rotate_cell(b.x, b.y);
                b.at(x, y)
            }),
            pivot,
        }
    }

    pub fn min_x(&self) -> i32 {
        self.blocks.iter().map(|b| b.x).min().unwrap_or(0)
    }

    pub fn max_x(&self) -> i32 {
        self.blocks.iter().map(|b| b.x).max().unwrap_or(0)
    }

    pub fn min_y(&self) -> i32 {
        self.blocks.iter().map(|b| b.y).min().unwrap_or(0)
    }

    pub fn max_y(&self) -> i32 {
        self.blocks.iter().map(|b| b.y).max().unwrap_or(0)
    }
}

/// Validated list of playable shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    shapes: Vec<PieceShape>,
}

impl PieceCatalog {
    /// Build a catalog, rejecting empty lists and malformed shapes.
    pub fn new(shapes: Vec<PieceShape>) -> Result<Self, ConfigError> {
        if shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        for shape in &shapes {
            for (i, a) in shape.cells.iter().enumerate() {
                if shape.cells[i + 1..].contains(a) {
                    return Err(ConfigError::OverlappingCells { kind: shape.kind });
                }
            }
            if !shape.pivot.is_grid_aligned() {
                return Err(ConfigError::MisalignedPivot { kind: shape.kind });
            }
        }

        Ok(Self { shapes })
    }

    pub fn standard() -> Self {
        Self {
            shapes: STANDARD_SHAPES.to_vec(),
        }
    }

    pub fn full() -> Self {
        Self {
            shapes: FULL_SHAPES.to_vec(),
        }
    }

    pub fn from_choice(choice: CatalogChoice) -> Self {
        match choice {
            CatalogChoice::Standard => Self::standard(),
            CatalogChoice::Full => Self::full(),
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shape(&self, kind: PieceKind) -> Option<&PieceShape> {
        self.shapes.iter().find(|s| s.kind == kind)
    }

    /// Shape picked by a hash value from the seed sequence
    pub fn select(&self, hash: u32) -> &PieceShape {
        &self.shapes[select_index(hash, self.shapes.len())]
    }

    /// Check that every shape spawns inside the side walls.
    pub fn check_spawn(&self, config: &BoardConfig) -> Result<(), ConfigError> {
        for shape in &self.shapes {
            let fits = shape
                .cells
                .iter()
                .all(|&(dx, dy)| config.contains(config.spawn_column + dx, dy));
            if !fits {
                return Err(ConfigError::SpawnOutOfBounds {
                    kind: shape.kind,
                    column: config.spawn_column,
                });
            }
        }
        Ok(())
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
