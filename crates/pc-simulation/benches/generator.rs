use criterion::{criterion_group, criterion_main, Criterion};
use pc_math::StandardNormal;
use pc_simulation::{build, generate};

fn bench_pipeline(c: &mut Criterion) {
    c.bench_function("generate 30x10000", |b| {
        b.iter(|| generate(30, 10_000, &StandardNormal, 0.0005, 0.012, Some(42)).unwrap())
    });

    let factors = generate(30, 10_000, &StandardNormal, 0.0005, 0.012, Some(42)).unwrap();
    c.bench_function("build 30x10000", |b| {
        b.iter(|| build(&factors, 104.0).unwrap())
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
