use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_stack::core::{GameSnapshot, GameState};
use tetris_stack::types::GameAction;

fn bench_play(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("play_front_piece", |b| {
        b.iter(|| {
            // Dequeue plus refill; the queue stays full so this never fails.
            state.apply_action(black_box(GameAction::Play)).unwrap();
        })
    });
}

fn bench_reserve_cycle(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("reserve_then_use", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::Reserve)).unwrap();
            state.apply_action(black_box(GameAction::UseReserved)).unwrap();
        })
    });
}

fn bench_block_swap(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    for _ in 0..3 {
        state.apply_action(GameAction::Reserve).unwrap();
    }

    c.bench_function("block_swap", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::SwapMultiple)).unwrap();
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.apply_action(GameAction::Reserve).unwrap();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_play,
    bench_reserve_cycle,
    bench_block_swap,
    bench_snapshot_into
);
criterion_main!(benches);
