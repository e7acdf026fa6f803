use criterion::{criterion_group, criterion_main, Criterion};

use causeway_core::config::SkeletonConfig;
use causeway_core::model::EdgePair;
use causeway_discovery::SkeletonBuilder;
use causeway_stats::PartialCorrelationOracle;
use test_fixtures::noisy_dataset;

/// 7 variables, all 21 candidate edges, 32 conditioning sets per edge:
/// 672 partial-correlation evaluations per build.
fn bench_inputs() -> (causeway_core::dataset::Dataset, Vec<String>, Vec<EdgePair>) {
    let vars = 7;
    let data = noisy_dataset(vars, 120, 7);
    let variables: Vec<String> = (0..vars).map(|i| format!("v{i}")).collect();
    let mut candidates = Vec::new();
    for (i, a) in variables.iter().enumerate() {
        for b in &variables[i + 1..] {
            candidates.push(EdgePair::new(a.clone(), b.clone()));
        }
    }
    (data, variables, candidates)
}

fn bench_sequential_skeleton(c: &mut Criterion) {
    let (data, variables, candidates) = bench_inputs();
    let oracle = PartialCorrelationOracle::new();
    let builder = SkeletonBuilder::new(&oracle);

    c.bench_function("skeleton_7vars_sequential", |b| {
        b.iter(|| builder.build(&data, &variables, &candidates).unwrap());
    });
}

fn bench_parallel_skeleton(c: &mut Criterion) {
    let (data, variables, candidates) = bench_inputs();
    let oracle = PartialCorrelationOracle::new();
    let config = SkeletonConfig {
        parallel: true,
        ..Default::default()
    };
    let builder = SkeletonBuilder::with_config(&oracle, config);

    c.bench_function("skeleton_7vars_parallel", |b| {
        b.iter(|| builder.build(&data, &variables, &candidates).unwrap());
    });
}

criterion_group!(benches, bench_sequential_skeleton, bench_parallel_skeleton);
criterion_main!(benches);
