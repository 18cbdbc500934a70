use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{place_apple, Board, GameState, SimpleRng, SnakeSeq};
use tui_snake::types::{BoardInfo, Movement, Point};

const INFO: BoardInfo = BoardInfo::new(20, 30);

fn bench_tick(c: &mut Criterion) {
    let state = GameState::new(INFO, 12345).unwrap();

    c.bench_function("snake_tick", |b| {
        b.iter(|| black_box(state.clone()).tick(black_box(INFO)))
    });
}

fn bench_place_apple_crowded(c: &mut Criterion) {
    // Fill every row but the last, serpentine, leaving 30 free cells.
    let mut cells = Vec::new();
    for row in 1..INFO.height {
        let cols: Vec<u16> = if row % 2 == 1 {
            (1..=INFO.width).collect()
        } else {
            (1..=INFO.width).rev().collect()
        };
        cells.extend(cols.into_iter().map(|col| Point::new(row, col)));
    }
    let snake = SnakeSeq::from_cells(&cells).unwrap();

    c.bench_function("place_apple_crowded", |b| {
        b.iter(|| place_apple(INFO, black_box(&snake), black_box(SimpleRng::new(7))))
    });
}

fn bench_board_apply(c: &mut Criterion) {
    let state = GameState::new(INFO, 12345).unwrap();
    let board = Board::from_state(&state, INFO);
    let tick = state.with_heading(Movement::South).tick(INFO).unwrap();
    let delta = tick.delta().to_vec();

    c.bench_function("board_apply_delta", |b| {
        b.iter(|| {
            let mut board = board.clone();
            board.apply(black_box(&delta));
            board
        })
    });
}

criterion_group!(benches, bench_tick, bench_place_apple_crowded, bench_board_apply);
criterion_main!(benches);
