//! Game state module - the single source of truth
//!
//! A `GameState` is an immutable snapshot. Transitions never edit one in
//! place; they build the next value and the previous one stays valid, which
//! is also what gets handed to renderers.

use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::pieces::{Piece, PieceCatalog};
use crate::rng::hash;
use crate::types::{Block, BlockId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Elapsed time carried by the last tick
    pub time: u64,
    /// Latched on game over until restart
    pub game_ended: bool,
    /// Falling piece; `None` only after a spawn was blocked
    pub active_piece: Option<Piece>,
    /// The stack; no two blocks share a cell
    pub settled_blocks: Vec<Block>,
    /// Blocks removed by the last transition, for renderers to erase
    pub last_cleared_blocks: Vec<Block>,
    pub score: u32,
    pub high_score: u32,
    pub rng_seed: u32,
    /// Id handed to the first block of the next spawned piece
    pub next_block_id: BlockId,
}

impl GameState {
    /// Fresh board with one piece chosen from `seed`.
    ///
    /// Block ids start at `next_block_id`, so ids stay unique across
    /// restarts within one process.
    pub fn fresh(
        config: &BoardConfig,
        catalog: &PieceCatalog,
        seed: u32,
        next_block_id: BlockId,
    ) -> Self {
        let rng_seed = hash(seed);
        let piece = Piece::spawn(catalog.select(rng_seed), config.spawn_column, next_block_id);

        Self {
            time: 0,
            game_ended: false,
            active_piece: Some(piece),
            settled_blocks: Vec::new(),
            last_cleared_blocks: Vec::new(),
            score: 0,
            high_score: 0,
            rng_seed,
            next_block_id: next_block_id + piece.blocks.len() as BlockId,
        }
    }

    /// State at process start
    pub fn initial(config: &BoardConfig, catalog: &PieceCatalog, seed: u32) -> Self {
        Self::fresh(config, catalog, seed, 0)
    }

    pub fn active_blocks(&self) -> &[Block] {
        match &self.active_piece {
            Some(piece) => &piece.blocks,
            None => &[],
        }
    }

    /// Active then settled blocks
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.active_blocks().iter().chain(self.settled_blocks.iter())
    }

    /// Whether the game still accepts moves
    pub fn playable(&self) -> bool {
        !self.game_ended && self.active_piece.is_some()
    }
}
