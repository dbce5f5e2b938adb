use criterion::{black_box, BenchmarkId, Criterion};
use criterion::{criterion_group, criterion_main};

use timeline_layout::timeline::time_point_from_millis;
use timeline_layout::{timeline_for_seed, Timeline};

fn bench_point_query(c: &mut Criterion) {
    let canonical = timeline_for_seed(42).expect("generate");
    let representations = [
        Timeline::ObjectGraph(canonical.clone()),
        Timeline::Flattened(canonical.to_flattened()),
        Timeline::Columnar(canonical.to_columnar()),
    ];
    let probes: Vec<_> = (0..2_000_000i64)
        .step_by(37_123)
        .map(|ms| time_point_from_millis(ms).expect("time point"))
        .collect();

    let mut group = c.benchmark_group("point_query");
    for timeline in &representations {
        group.bench_with_input(
            BenchmarkId::from_parameter(timeline.variant_name()),
            timeline,
            |b, timeline| {
                b.iter(|| {
                    for &t in &probes {
                        black_box(timeline.value_at_time(black_box(t)));
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_point_query);
criterion_main!(benches);
