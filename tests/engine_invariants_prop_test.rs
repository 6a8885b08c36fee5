//! Property tests over generated command sequences.
//!
//! Invariants checked after every command:
//! - no two settled blocks share a cell, and the active piece never overlaps
//!   the stack or leaves the side walls and floor
//! - block ids are unique across the whole board
//! - `high_score >= score`, and `high_score` never decreases (restarts
//!   included)
//! - once `game_ended` is set, moves and rotations are no-ops

use std::collections::HashSet;

use proptest::prelude::*;

use blockfall::core::{BoardConfig, CatalogChoice, GameState, PieceCatalog};
use blockfall::engine::{Engine, SeedList};
use blockfall::types::Command;

#[derive(Debug, Clone, Copy)]
enum Step {
    Tick,
    Left,
    Right,
    Rotate,
    Restart,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => Just(Step::Tick),
        3 => Just(Step::Left),
        3 => Just(Step::Right),
        3 => Just(Step::Rotate),
        1 => Just(Step::Restart),
    ]
}

fn assert_board_consistent(state: &GameState, config: &BoardConfig) {
    let settled: HashSet<_> = state.settled_blocks.iter().map(|b| b.pos()).collect();
    assert_eq!(settled.len(), state.settled_blocks.len(), "settled cells collide");

    for block in state.active_blocks() {
        assert!(!settled.contains(&block.pos()), "active overlaps stack");
        assert!(config.contains(block.x, block.y), "active out of bounds");
    }

    let ids: HashSet<_> = state.blocks().map(|b| b.id).collect();
    assert_eq!(ids.len(), state.blocks().count(), "duplicate block ids");

    assert!(state.high_score >= state.score);
}

fn play(seed: u32, catalog: CatalogChoice, steps: &[Step]) -> GameState {
    let config = BoardConfig {
        catalog,
        ..BoardConfig::default()
    };
    let mut engine = Engine::new(
        config.clone(),
        PieceCatalog::from_choice(catalog),
        Box::new(SeedList::new(vec![seed, seed.wrapping_add(1)])),
    )
    .unwrap();

    let mut state = engine.initial_state();
    let mut elapsed = 0u64;
    assert_board_consistent(&state, &config);

    for step in steps {
        let command = match step {
            Step::Tick => {
                elapsed += u64::from(config.tick_ms);
                Command::Tick { elapsed }
            }
            Step::Left => Command::MoveLeft,
            Step::Right => Command::MoveRight,
            Step::Rotate => Command::Rotate,
            Step::Restart => Command::Restart,
        };

        let next = engine.apply(&state, command);
        assert_board_consistent(&next, &config);
        assert!(next.high_score >= state.high_score);

        if state.game_ended && !matches!(command, Command::Tick { .. } | Command::Restart) {
            assert_eq!(next, state);
        }
        if state.game_ended && matches!(command, Command::Tick { .. }) {
            assert!(next.game_ended);
            assert_eq!(next.settled_blocks, state.settled_blocks);
        }

        state = next;
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_games_keep_board_invariants(
        seed in any::<u32>(),
        full in any::<bool>(),
        steps in prop::collection::vec(step(), 1..600),
    ) {
        let catalog = if full { CatalogChoice::Full } else { CatalogChoice::Standard };
        play(seed, catalog, &steps);
    }
}

#[test]
fn long_tick_only_game_reaches_game_over() {
    let steps = vec![Step::Tick; 5000];
    let last = play(20260228, CatalogChoice::Standard, &steps);
    // Nothing moves sideways, so the spawn columns fill up.
    assert!(last.game_ended);
    assert_eq!(last.time, 5000 * 500);
}
