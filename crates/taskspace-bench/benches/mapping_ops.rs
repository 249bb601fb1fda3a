//! Criterion micro-benchmarks for mappings.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use taskspace_bench::grid_profile;
use taskspace_core::item;
use taskspace_map::{Mapping, OffsetMapping, TileConfig, TileMapping};
use taskspace_test_utils::continuous_state;

/// Benchmark: Tile 10K evenly spaced continuous states (checked).
fn bench_tile_value_10k(c: &mut Criterion) {
    let tile = TileMapping::new(continuous_state(), &TileConfig::uniform(16)).unwrap();
    let states: Vec<_> = (0..10_000)
        .map(|i| {
            let t = f64::from(i) / 10_000.0;
            item! { "position" => -1.2 + 1.7 * t, "velocity" => -0.07 + 0.14 * t }
        })
        .collect();

    c.bench_function("tile_value_10k", |b| {
        b.iter(|| {
            for s in &states {
                black_box(tile.value(s).unwrap());
            }
        });
    });
}

/// Benchmark: Invert every bucket of a 16x16 tiling.
fn bench_tile_inverse_256(c: &mut Criterion) {
    let tile = TileMapping::new(continuous_state(), &TileConfig::uniform(16)).unwrap();
    let cells = tile.image().items().unwrap();

    c.bench_function("tile_inverse_256", |b| {
        b.iter(|| {
            for cell in &cells {
                black_box(tile.inverse(cell).unwrap());
            }
        });
    });
}

/// Benchmark: Offset every cell of a 100x100 grid.
fn bench_offset_grid_10k(c: &mut Criterion) {
    let grid = grid_profile(100);
    let offset = OffsetMapping::new(grid.clone()).unwrap();
    let cells = grid.items().unwrap();

    c.bench_function("offset_grid_10k", |b| {
        b.iter(|| {
            for cell in &cells {
                black_box(offset.forward(cell));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tile_value_10k,
    bench_tile_inverse_256,
    bench_offset_grid_10k
);
criterion_main!(benches);
