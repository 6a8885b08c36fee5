use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{resolve_rows, BoardConfig, GameState, PieceCatalog};
use blockfall::engine::transition::{rotate, shift, tick};
use blockfall::types::{Block, Color};

fn setup() -> (BoardConfig, PieceCatalog, GameState) {
    let config = BoardConfig::default();
    let catalog = PieceCatalog::standard();
    let state = GameState::initial(&config, &catalog, 12345);
    (config, catalog, state)
}

fn bench_tick(c: &mut Criterion) {
    let (config, catalog, state) = setup();

    c.bench_function("tick_fall", |b| {
        b.iter(|| tick(&config, &catalog, black_box(&state), 500))
    });
}

fn bench_tick_game(c: &mut Criterion) {
    let (config, catalog, state) = setup();

    // Ticks only, until the stack reaches the top.
    c.bench_function("tick_until_game_over", |b| {
        b.iter(|| {
            let mut s = state.clone();
            let mut elapsed = 0;
            while !s.game_ended {
                elapsed += 500;
                s = tick(&config, &catalog, &s, elapsed);
            }
            s
        })
    });
}

fn bench_row_clear(c: &mut Criterion) {
    let mut blocks = Vec::new();
    for y in 0..20 {
        for x in 0..10 {
            if y < 16 && (x + y) % 3 == 0 {
                continue;
            }
            blocks.push(Block::new((y * 10 + x) as u64, x, y, Color::Cyan));
        }
    }

    c.bench_function("resolve_4_rows", |b| {
        b.iter(|| resolve_rows(black_box(&blocks), 10))
    });
}

fn bench_moves(c: &mut Criterion) {
    let (config, _, state) = setup();
    let state = GameState {
        active_piece: state.active_piece.map(|p| p.translated(0, 8)),
        ..state
    };

    c.bench_function("shift", |b| b.iter(|| shift(&config, black_box(&state), 1)));
    c.bench_function("rotate", |b| b.iter(|| rotate(&config, black_box(&state))));
}

criterion_group!(
    benches,
    bench_tick,
    bench_tick_game,
    bench_row_clear,
    bench_moves
);
criterion_main!(benches);
