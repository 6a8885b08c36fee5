//! Block registry: retained render handles keyed by block id.
//!
//! The engine hands out whole snapshots. A renderer that keeps one visual
//! element per block needs to know which elements to drop, move or create;
//! [`BlockRegistry::sync`] works that out from `last_cleared_blocks` and the
//! blocks present in the snapshot.

use std::collections::HashMap;

use crate::core::GameState;
use crate::types::{Block, BlockId, Color};

/// Where one block is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellHandle {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl From<&Block> for CellHandle {
    fn from(block: &Block) -> Self {
        Self {
            x: block.x,
            y: block.y,
            color: block.color,
        }
    }
}

/// What a sync changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncStats {
    pub removed: usize,
    pub added: usize,
    pub moved: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    handles: HashMap<BlockId, CellHandle>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the registry in line with `state`.
    ///
    /// Cleared ids are erased first, then every active and settled block is
    /// inserted or moved.
    pub fn sync(&mut self, state: &GameState) -> SyncStats {
        let mut stats = SyncStats::default();

        for block in &state.last_cleared_blocks {
            if self.handles.remove(&block.id).is_some() {
                stats.removed += 1;
            }
        }

        for block in state.blocks() {
            let handle = CellHandle::from(block);
            match self.handles.insert(block.id, handle) {
                None => stats.added += 1,
                Some(old) if old != handle => stats.moved += 1,
                Some(_) => {}
            }
        }

        stats
    }

    pub fn get(&self, id: BlockId) -> Option<&CellHandle> {
        self.handles.get(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BlockId, &CellHandle)> {
        self.handles.iter()
    }
}
