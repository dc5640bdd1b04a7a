//! Benchmarks for layer rotation, inference and session playback.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rubik::geometry::{Axis, Coord, Face};
use rubik::scramble::scramble;
use rubik::{infer_rotation, CubeState, Pick, Session, SessionConfig};

/// Benchmark a single quarter turn of an outer layer.
fn bench_rotate_layer(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate_layer");
    for size in [3, 20] {
        let mut cube = CubeState::solved(size).unwrap();
        group.bench_function(format!("{size}x{size}x{size}"), |b| {
            b.iter(|| cube.rotate_layer(black_box(Axis::TopBottom), black_box(0), true))
        });
    }
    group.finish();
}

/// Benchmark inferring a drag on the top face.
fn bench_infer(c: &mut Criterion) {
    let a = Pick::new(Coord::new(0, 0, 0), Face::Up);
    let b = Pick::new(Coord::new(1, 0, 0), Face::Up);

    c.bench_function("infer_rotation", |bench| {
        bench.iter(|| infer_rotation(black_box(3), black_box(a), black_box(b)))
    });
}

/// Benchmark generating a 100-move scramble.
fn bench_scramble(c: &mut Criterion) {
    let mut rng = fastrand::Rng::with_seed(0);

    c.bench_function("scramble_100", |b| {
        b.iter(|| scramble(black_box(7), 100, &mut rng))
    });
}

/// Benchmark playing 50 queued moves out through `tick`.
fn bench_session_playback(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    group.sample_size(20);
    group.bench_function("play_50_moves", |b| {
        b.iter(|| {
            let mut session = Session::new(SessionConfig {
                size: 5,
                step_count: 12,
            })
            .unwrap();
            session.enqueue_randomized(50, 1).unwrap();
            while session.tick(Duration::ZERO).unwrap() {}
            session
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_rotate_layer,
    bench_infer,
    bench_scramble,
    bench_session_playback
);
criterion_main!(benches);
