//! Collision module - boundary and stack predicates
//!
//! Coordinates: x grows to the right in `0..width`, y grows downward and the
//! bottom row is `height - 1`. Rows above the board (`y < 0`) are open.
//!
//! Settled blocks are scanned linearly; boards are small and nothing here
//! allocates.

use crate::config::BoardConfig;
use crate::pieces::Piece;
use crate::types::Block;

/// The piece has reached the bottom row.
#[inline]
pub fn bottom_boundary_hit(piece: &Piece, height: i32) -> bool {
    piece.max_y() >= height - 1
}

/// The piece's leftmost block is in column 0.
#[inline]
pub fn left_boundary_hit(piece: &Piece) -> bool {
    piece.min_x() <= 0
}

/// The piece's rightmost block is in the last column.
#[inline]
pub fn right_boundary_hit(piece: &Piece, width: i32) -> bool {
    piece.max_x() >= width - 1
}

/// Whether `(x, y)` is taken by a settled block.
#[inline]
pub fn is_occupied(settled: &[Block], x: i32, y: i32) -> bool {
    settled.iter().any(|s| s.x == x && s.y == y)
}

/// Translating the piece by `(dx, dy)` would overlap a settled block.
pub fn stack_collision(piece: &Piece, settled: &[Block], dx: i32, dy: i32) -> bool {
    piece
        .blocks
        .iter()
        .any(|b| is_occupied(settled, b.x + dx, b.y + dy))
}

/// Some settled block sits above the visible board.
pub fn top_overflow(settled: &[Block]) -> bool {
    settled.iter().any(|b| b.y < 0)
}

/// The piece cannot fall one more row.
pub fn landed(piece: &Piece, settled: &[Block], height: i32) -> bool {
    bottom_boundary_hit(piece, height) || stack_collision(piece, settled, 0, 1)
}

/// A one-column move in the direction of `dx` is blocked.
pub fn horizontal_blocked(piece: &Piece, settled: &[Block], width: i32, dx: i32) -> bool {
    let wall = if dx < 0 {
        left_boundary_hit(piece)
    } else {
        right_boundary_hit(piece, width)
    };
    wall || stack_collision(piece, settled, dx, 0)
}

/// Every block is inside the side walls and floor and on a free cell.
pub fn fits(blocks: &[Block], settled: &[Block], config: &BoardConfig) -> bool {
    blocks
        .iter()
        .all(|b| config.contains(b.x, b.y) && !is_occupied(settled, b.x, b.y))
}
