use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use strand::cluster::{Clustering, Dbscan, Metric};
use strand::geometry::Segment;

fn random_segments(n: usize, seed: u64) -> Vec<Segment> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Segment::new(
                rng.random::<f64>() * 10.0,
                rng.random::<f64>() * 10.0,
                rng.random::<f64>() * 10.0,
                rng.random::<f64>() - 0.5,
                rng.random::<f64>() - 0.5,
                rng.random::<f64>() - 0.5,
            )
        })
        .collect()
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    let segments = random_segments(500, 42);

    for metric in Metric::ALL {
        group.bench_function(format!("fit_predict_n500_{metric}"), |b| {
            let model = Dbscan::new(metric).with_eps(0.8);
            b.iter(|| model.fit_predict_with_noise(black_box(&segments)).unwrap())
        });
    }

    group.bench_function("k_distance_plot_n500", |b| {
        let model = Dbscan::new(Metric::Euclidean);
        b.iter(|| {
            model
                .distance_values_for_epsilon_estimate(black_box(&segments))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
