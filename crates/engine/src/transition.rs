//! Transition functions, one per command kind.
//!
//! Each takes the current state by reference and returns the next one.
//! None of them fail: a move that is not allowed returns an unchanged copy.
//! Once `game_ended` is set, only `tick` (time and seed) and `restart`
//! change anything.

use tracing::{debug, info};

use crate::core::collision::{fits, horizontal_blocked, landed, top_overflow};
use crate::core::types::BlockId;
use crate::core::{hash, resolve_rows, BoardConfig, GameState, Piece, PieceCatalog};

/// Advance one step: fall a row, or lock, clear and spawn.
///
/// The seed advances exactly once per call, whether or not a piece spawns.
pub fn tick(
    config: &BoardConfig,
    catalog: &PieceCatalog,
    state: &GameState,
    elapsed: u64,
) -> GameState {
    let mut next = GameState {
        time: elapsed,
        rng_seed: hash(state.rng_seed),
        last_cleared_blocks: Vec::new(),
        ..state.clone()
    };

    if state.game_ended {
        return next;
    }
    let Some(active) = state.active_piece else {
        return next;
    };

    if !landed(&active, &state.settled_blocks, config.height) {
        next.active_piece = Some(active.translated(0, 1));
        return next;
    }

    lock_piece(config, catalog, next, &active)
}

/// Merge the landed piece, clear rows, score, and spawn the next piece.
fn lock_piece(
    config: &BoardConfig,
    catalog: &PieceCatalog,
    mut next: GameState,
    landed_piece: &Piece,
) -> GameState {
    let mut merged = std::mem::take(&mut next.settled_blocks);
    merged.extend_from_slice(&landed_piece.blocks);

    // Checked before clearing: a landing above the top ends the game even if
    // it also completes a row.
    let overflow = top_overflow(&merged);
    let clear = resolve_rows(&merged, config.width);

    // Score counts cleared blocks, not rows.
    if !overflow {
        next.score += clear.cleared.len() as u32;
    }
    next.high_score = next.high_score.max(next.score);

    if clear.lines() > 0 {
        debug!(rows = ?clear.rows, score = next.score, "rows cleared");
    }

    let spawned = Piece::spawn(
        catalog.select(next.rng_seed),
        config.spawn_column,
        next.next_block_id,
    );
    let blocked = !fits(&spawned.blocks, &clear.remaining, config);

    next.settled_blocks = clear.remaining;
    next.last_cleared_blocks = clear.cleared;
    next.game_ended = overflow || blocked;

    if blocked {
        next.active_piece = None;
    } else {
        next.active_piece = Some(spawned);
        next.next_block_id += spawned.blocks.len() as BlockId;
    }

    if next.game_ended {
        info!(
            score = next.score,
            high_score = next.high_score,
            overflow,
            blocked,
            "game over"
        );
    } else {
        debug!(kind = spawned.kind.as_str(), "piece locked");
    }

    next
}

/// Move the active piece one column; `dx` is -1 (left) or +1 (right).
pub fn shift(config: &BoardConfig, state: &GameState, dx: i32) -> GameState {
    let Some(active) = state.active_piece.filter(|_| !state.game_ended) else {
        return state.clone();
    };

    if horizontal_blocked(&active, &state.settled_blocks, config.width, dx) {
        return state.clone();
    }

    GameState {
        active_piece: Some(active.translated(dx, 0)),
        ..state.clone()
    }
}

/// Turn the active piece 90° about its pivot, or leave it if the result
/// would leave the board or overlap the stack.
pub fn rotate(config: &BoardConfig, state: &GameState) -> GameState {
    let Some(active) = state.active_piece.filter(|_| !state.game_ended) else {
        return state.clone();
    };

    let candidate = active.rotated();
    if !fits(&candidate.blocks, &state.settled_blocks, config) {
        return state.clone();
    }

    GameState {
        active_piece: Some(candidate),
        ..state.clone()
    }
}

/// New game from `seed`, keeping the high score.
///
/// Every block of the old board is reported in `last_cleared_blocks` so
/// renderers can wipe it.
pub fn restart(
    config: &BoardConfig,
    catalog: &PieceCatalog,
    state: &GameState,
    seed: u32,
) -> GameState {
    let mut next = GameState::fresh(config, catalog, seed, state.next_block_id);
    next.high_score = state.high_score.max(state.score);
    next.last_cleared_blocks = state.blocks().copied().collect();

    info!(seed, high_score = next.high_score, "restart");
    next
}
