//! Criterion benchmarks for the lineup board.
//!
//! Benchmarks:
//!   - filling an 11-slot formation from the roster
//!   - a slot-to-slot swap on a full board
//!   - building the call-up from a full board
//!
//! Run with: cargo bench -p lineup_core --bench drop_bench

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lineup_core::{BoardMode, DragGesture, FormationCatalog, LineupBoard};

fn full_board() -> LineupBoard {
    let formation = FormationCatalog::default_formation().clone();
    let gestures: Vec<DragGesture> = formation
        .slots
        .iter()
        .enumerate()
        .map(|(i, slot)| DragGesture::place(format!("p{}", i), slot.id.as_str()))
        .collect();
    let mut board = LineupBoard::new(formation, BoardMode::CallUp);
    for g in &gestures {
        board.apply_drop(g);
    }
    board
}

fn bench_fill(c: &mut Criterion) {
    let formation = FormationCatalog::default_formation().clone();
    let gestures: Vec<DragGesture> = formation
        .slots
        .iter()
        .enumerate()
        .map(|(i, slot)| DragGesture::place(format!("p{}", i), slot.id.as_str()))
        .collect();

    c.bench_function("fill_433_from_roster", |b| {
        b.iter(|| {
            let mut board = LineupBoard::new(formation.clone(), BoardMode::CallUp);
            for g in &gestures {
                black_box(board.apply_drop(black_box(g)));
            }
            board
        });
    });
}

fn bench_swap(c: &mut Criterion) {
    let mut board = full_board();
    let there = DragGesture::shift("p8", "lw", "rw");
    let back = DragGesture::shift("p8", "rw", "lw");

    c.bench_function("swap_wingers", |b| {
        b.iter(|| {
            black_box(board.apply_drop(&there));
            black_box(board.apply_drop(&back));
        });
    });
}

fn bench_build_call_up(c: &mut Criterion) {
    let board = full_board();
    let when = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    c.bench_function("build_call_up", |b| {
        b.iter(|| black_box(board.build_call_up(black_box("Sub-12"), when)));
    });
}

criterion_group!(benches, bench_fill, bench_swap, bench_build_call_up);
criterion_main!(benches);
