//! Row-clear resolver
//!
//! Given every settled block (including a piece that just landed), finds the
//! full rows, removes them and drops each remaining block by the number of
//! cleared rows below it. Input is never modified; cleared blocks keep their
//! ids so a renderer can erase exactly those cells.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::Block;

/// Outcome of one row-clear pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowClear {
    /// Blocks removed, in input order
    pub cleared: Vec<Block>,
    /// Surviving blocks after compaction, in input order
    pub remaining: Vec<Block>,
    /// Indices of the cleared rows, ascending
    pub rows: Vec<i32>,
}

impl RowClear {
    pub fn lines(&self) -> usize {
        self.rows.len()
    }
}

/// Rows (by `y`) holding a block in each of the `width` columns, ascending.
pub fn full_rows(blocks: &[Block], width: i32) -> Vec<i32> {
    let mut columns: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
    for b in blocks {
        columns.entry(b.y).or_default().insert(b.x);
    }

    columns
        .into_iter()
        .filter(|(_, xs)| xs.len() == width as usize)
        .map(|(y, _)| y)
        .collect()
}

/// Clear full rows and compact the rest.
pub fn resolve_rows(blocks: &[Block], width: i32) -> RowClear {
    let rows = full_rows(blocks, width);
    if rows.is_empty() {
        return RowClear {
            cleared: Vec::new(),
            remaining: blocks.to_vec(),
            rows,
        };
    }

    let (cleared, kept): (Vec<Block>, Vec<Block>) =
        blocks.iter().copied().partition(|b| rows.contains(&b.y));

    let remaining = kept
        .into_iter()
        .map(|b| {
            let below = rows.iter().filter(|&&r| r > b.y).count() as i32;
            b.translated(0, below)
        })
        .collect();

    RowClear {
        cleared,
        remaining,
        rows,
    }
}
