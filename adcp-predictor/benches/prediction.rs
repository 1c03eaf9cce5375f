//! Benchmarks for the prediction engines
//!
//! Run with: cargo bench -p adcp-predictor --bench prediction

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use adcp_predictor::{
    hardware::VARIANTS, predict_burst, predict_continuous, resolve, tables, Burst, DeploymentConfig,
    PlausibilityValidator, SubsystemCode, TransmitMode, Validator,
};

// ============================================================================
// Continuous Mode
// ============================================================================

fn bench_continuous(c: &mut Criterion) {
    let mut group = c.benchmark_group("continuous");

    for code in ['2', '4', 'F', 'C'] {
        let config = resolve(Some(SubsystemCode(code)), None);
        group.bench_with_input(BenchmarkId::new("broadband", code), &config, |b, config| {
            b.iter(|| predict_continuous(black_box(config)))
        });

        let narrowband = config.with_transmit(TransmitMode::Narrowband);
        group.bench_with_input(BenchmarkId::new("narrowband", code), &narrowband, |b, config| {
            b.iter(|| predict_continuous(black_box(config)))
        });
    }

    group.finish();
}

fn bench_table_selection(c: &mut Criterion) {
    c.bench_function("table_weighted_sum", |b| {
        b.iter(|| tables::weighted_sum(black_box(307_200.0), |t| t.range_m))
    });
}

// ============================================================================
// Resolver and Burst
// ============================================================================

fn bench_resolve_all_variants(c: &mut Criterion) {
    c.bench_function("resolve_all_variants", |b| {
        b.iter(|| {
            for v in VARIANTS.iter() {
                black_box(resolve(Some(SubsystemCode(v.code)), None));
            }
        })
    });
}

fn bench_burst(c: &mut Criterion) {
    let config = DeploymentConfig::default().with_duration_days(365.0).with_burst(Burst {
        ensembles_per_burst: 2048,
        burst_interval_s: 3600.0,
        secondary: Some(SubsystemCode('C')),
        ..Burst::default()
    });
    c.bench_function("burst", |b| b.iter(|| predict_burst(black_box(&config))));
}

fn bench_validation(c: &mut Criterion) {
    let config = DeploymentConfig::default();
    let strict = PlausibilityValidator::strict();
    c.bench_function("validate_strict", |b| b.iter(|| strict.validate(black_box(&config))));
    c.bench_function("report_strict", |b| b.iter(|| strict.report(black_box(&config))));
}

criterion_group!(
    benches,
    bench_continuous,
    bench_table_selection,
    bench_resolve_all_variants,
    bench_burst,
    bench_validation
);
criterion_main!(benches);
