use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rocket_space::prelude::*;

/// Pre-draw `n` vectors from `space` so the benchmark measures decoding only.
fn build_vectors(space: &SampleSpace, n: usize) -> Vec<Vec<f64>> {
    let sampler = RandomSampler::with_seed(42);
    (0..n).map(|_| space.draw(&sampler).unwrap()).collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for preset in Preset::ALL {
        let vectors = build_vectors(preset.space(), 256);
        group.bench_with_input(
            BenchmarkId::new("preset", preset.name()),
            &vectors,
            |b, vectors| {
                b.iter(|| {
                    for values in vectors {
                        black_box(decode(black_box(values)).unwrap());
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    let sampler = RandomSampler::with_seed(42);

    for preset in Preset::ALL {
        group.bench_with_input(
            BenchmarkId::new("preset", preset.name()),
            preset.space(),
            |b, space| {
                b.iter(|| space.draw_design(&sampler).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_body_space", |b| {
        b.iter(|| Preset::Body.build(black_box(FixPolicy::Explicit)));
    });
}

criterion_group!(benches, bench_decode, bench_draw, bench_build);
criterion_main!(benches);
