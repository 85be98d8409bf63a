use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use escape_field::{
    Complex, ComputeStrategy, MandelbrotConfig, NeverCancel, NoProgress, Viewport,
    compute_field_using,
};

fn bench_strategies(c: &mut Criterion) {
    let full_set = MandelbrotConfig {
        pixel_width: 320,
        pixel_height: 240,
        ..MandelbrotConfig::default()
    }
    .viewport();
    let seahorse_valley = Viewport::new(Complex::new(-0.743, 0.131), 0.02, 0.015, 320, 240, 1000);

    let mut group = c.benchmark_group("compute_field");

    for (name, viewport) in [("full_set", full_set), ("seahorse_valley", seahorse_valley)] {
        for strategy in [ComputeStrategy::Serial, ComputeStrategy::ParallelRayon] {
            group.bench_with_input(
                BenchmarkId::new(name, strategy),
                &viewport,
                |b, viewport| {
                    b.iter(|| {
                        compute_field_using(strategy, black_box(viewport), &NeverCancel, &NoProgress)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
