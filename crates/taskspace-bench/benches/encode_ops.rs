//! Criterion micro-benchmarks for enumeration and tuple encoding.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use taskspace_bench::grid_profile;
use taskspace_encode::{SpaceEncoder, StateActionEncoder};
use taskspace_test_utils::grid_actions;

/// Benchmark: Enumerate a 100x100 grid.
fn bench_items_grid_10k(c: &mut Criterion) {
    let grid = grid_profile(100);

    c.bench_function("items_grid_10k", |b| {
        b.iter(|| {
            let items = grid.items().unwrap();
            black_box(&items);
        });
    });
}

/// Benchmark: Encode and decode every cell of a 100x100 grid.
fn bench_space_encoder_10k(c: &mut Criterion) {
    let enc = SpaceEncoder::new(grid_profile(100));
    let cells = enc.space().items().unwrap();

    c.bench_function("space_encoder_roundtrip_10k", |b| {
        b.iter(|| {
            for cell in &cells {
                let key = enc.encode(cell).unwrap();
                black_box(enc.decode(&key).unwrap());
            }
        });
    });
}

/// Benchmark: Encode all state-action pairs of a 50x50 grid.
fn bench_state_action_10k(c: &mut Criterion) {
    let enc = StateActionEncoder::new(grid_profile(50), grid_actions());
    let states = enc.state().space().items().unwrap();
    let actions = enc.action().space().items().unwrap();

    c.bench_function("state_action_encode_10k", |b| {
        b.iter(|| {
            for s in &states {
                for a in &actions {
                    black_box(enc.encode((s.clone(), a.clone())).unwrap());
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_items_grid_10k,
    bench_space_encoder_10k,
    bench_state_action_10k
);
criterion_main!(benches);
