use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use harmonograph::{
    DualAxisConfig, Harmonograph, PlanarPendulum, SpatialConfig, SpatialHarmonograph,
    TraceSettings,
};

fn dual_axis(index: u32) -> DualAxisConfig {
    let offset = f64::from(index);
    DualAxisConfig {
        x_amplitude: 100.0 - offset,
        y_amplitude: 90.0 - offset,
        x_frequency: 180.0 + offset,
        y_frequency: 181.0 - offset,
        phase: 15.0 * offset,
        decay: 0.01 + offset * 0.005,
    }
}

fn bench_pendulum(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonograph/pendulum");

    let config = dual_axis(0);
    group.bench_function("PlanarPendulum::from", |b| {
        b.iter(|| black_box(PlanarPendulum::from(black_box(config))));
    });

    let pendulum = PlanarPendulum::from(config);
    group.bench_function("Pendulum::calculate", |b| {
        b.iter(|| black_box(pendulum.calculate(black_box(12.5))));
    });

    group.finish();
}

fn bench_harmonograph(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonograph/calculate");

    for count in [1u32, 4, 16] {
        let harmonograph = Harmonograph::<2>::from_configs((0..count).map(dual_axis));
        group.bench_with_input(BenchmarkId::new("planar", count), &harmonograph, |b, h| {
            b.iter(|| black_box(h.calculate(black_box(12.5))));
        });
    }

    let spatial = SpatialHarmonograph::from_configs([
        SpatialConfig {
            x_amplitude: 100.0,
            y_amplitude: 100.0,
            z_amplitude: 60.0,
            x_frequency: 180.0,
            y_frequency: 181.0,
            z_frequency: 90.0,
            phase: 0.0,
            decay: 0.02,
        };
        4
    ]);
    group.bench_function("spatial/4", |b| {
        b.iter(|| black_box(spatial.calculate(black_box(12.5))));
    });

    group.finish();
}

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonograph/trace");
    let harmonograph = Harmonograph::<2>::from_configs((0..3).map(dual_axis));

    let samples: u32 = 10_000;
    let times: Vec<f64> = (0..samples).map(|i| f64::from(i) * 0.01).collect();
    group.throughput(Throughput::Elements(u64::from(samples)));

    group.bench_function("sample", |b| {
        b.iter(|| black_box(harmonograph.sample(black_box(&times))));
    });

    group.bench_function("trace", |b| {
        b.iter(|| {
            let settings = TraceSettings::new().with_step(0.01).with_end(99.99);
            let trace = harmonograph.trace(settings).expect("valid settings");
            black_box(trace.count())
        });
    });

    #[cfg(feature = "parallel")]
    group.bench_function("par_sample", |b| {
        b.iter(|| black_box(harmonograph.par_sample(black_box(&times))));
    });

    group.finish();
}

criterion_group!(benches, bench_pendulum, bench_harmonograph, bench_trace);
criterion_main!(benches);
