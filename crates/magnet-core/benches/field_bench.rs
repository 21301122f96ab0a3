// -------------------------------------------------------------------------
// SCPN Magnetics -- Field Kernel Benchmark
// Single-loop analytic kernel vs a 100-loop solenoid superposition,
// scalar and batched over a 32x32x8 coordinate grid.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use magnet_core::batch::field_batch;
use magnet_core::loop_field::CurrentLoop;
use magnet_core::solenoid::Solenoid;
use magnet_core::source::FieldSource;
use ndarray::Array3;
use std::hint::black_box;

/// Coordinate grid spanning the near field of a unit-radius winding.
fn make_grid(n: usize) -> (Array3<f64>, Array3<f64>, Array3<f64>) {
    let x = Array3::from_shape_fn((n, n, 8), |(i, _, _)| -1.5 + 3.0 * i as f64 / n as f64);
    let y = Array3::from_shape_fn((n, n, 8), |(_, j, _)| -1.5 + 3.0 * j as f64 / n as f64);
    let z = Array3::from_shape_fn((n, n, 8), |(_, _, k)| -1.0 + 2.0 * k as f64 / 8.0);
    (x, y, z)
}

fn bench_loop_scalar(c: &mut Criterion) {
    let tile = CurrentLoop::new(1.0, 0.0, 0.0, 0.0, 1.0).unwrap();
    c.bench_function("loop_field_scalar", |bench| {
        bench.iter(|| black_box(tile.field(black_box(0.7), black_box(0.2), black_box(0.4))))
    });
}

fn bench_batch(c: &mut Criterion) {
    let tile = CurrentLoop::new(1.0, 0.0, 0.0, 0.0, 1.0).unwrap();
    let sol = Solenoid::new(400.0, 1.0, 100.0, 0.0, 0.0, 0.0, 1.0).unwrap();
    let (x, y, z) = make_grid(32);

    let mut group = c.benchmark_group("field_batch");
    group.bench_with_input(BenchmarkId::new("loop", "32x32x8"), &(), |bench, _| {
        bench.iter(|| field_batch(&tile, black_box(&x), black_box(&y), black_box(&z)).unwrap())
    });
    group.bench_with_input(
        BenchmarkId::new("solenoid_100", "32x32x8"),
        &(),
        |bench, _| {
            bench.iter(|| field_batch(&sol, black_box(&x), black_box(&y), black_box(&z)).unwrap())
        },
    );
    group.finish();
}

criterion_group!(benches, bench_loop_scalar, bench_batch);
criterion_main!(benches);
