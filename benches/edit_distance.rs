use clap::ValueEnum;
use criterion::measurement::Measurement;
use criterion::{criterion_group, criterion_main, BenchmarkGroup, BenchmarkId, Criterion};
use edit_distance::prelude::*;

const E: f32 = 0.05;

fn engines<M: Measurement>(a: &Sequence, b: &Sequence, c: &mut BenchmarkGroup<M>, n: usize) {
    let config = EngineConfig::default();
    let d = edit_distance(a, b, &config);
    c.bench_function(BenchmarkId::new("Full", n), |bb| {
        bb.iter(|| assert_eq!(EditDistance::with_config(a, b, &config).distance(), d))
    });
    c.bench_function(BenchmarkId::new("CostOnly", n), |bb| {
        bb.iter(|| assert_eq!(edit_distance(a, b, &config), d))
    });
}

fn bench(c: &mut Criterion) {
    let c = &mut c.benchmark_group("edit_distance");
    engines(&b"PLASMA".to_vec(), &b"ALTRUISM".to_vec(), c, 6);
    for n in [100, 1000] {
        let (ref a, ref b) = setup_sequences(n, E);
        engines(a, b, c, n);
    }
}

/// Cost of the traceback for each error model.
fn bench_models(c: &mut Criterion) {
    let c = &mut c.benchmark_group("error_model");
    let n = 1000;
    for &model in ErrorModel::value_variants() {
        let (ref a, ref b) = setup_sequences_with_model(31415, n, E, model);
        c.bench_function(BenchmarkId::new(format!("{model:?}"), n), |bb| {
            bb.iter(|| EditDistance::new(a, b).operations().len())
        });
    }
}

criterion_group!(benches, bench, bench_models);
criterion_main!(benches);
