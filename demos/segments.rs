//! DBSCAN on two bundles of segments and a stray one.
//!
//! Run with `RUST_LOG=strand=debug cargo run --example segments` to see the engine's events.

use strand::cluster::{Clustering, Dbscan, Metric};
use strand::geometry::{Segment, NO_CLUSTER};
use tracing_subscriber::EnvFilter;

fn bundle(x: f64, y: f64, z: f64) -> Vec<Segment> {
    (0..6)
        .map(|i| {
            let wobble = i as f64 * 0.02;
            Segment::new(x + wobble, y, z - wobble, -1.0, -0.5, 0.1)
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut segments = bundle(0.0, 0.0, 0.0);
    segments.extend(bundle(5.0, 5.0, 5.0));
    segments.push(Segment::new(-8.0, 3.0, 9.0, 0.0, 0.0, 1.0));

    let estimator = Dbscan::new(Metric::Euclidean);
    let plot = estimator
        .distance_values_for_epsilon_estimate(&segments)
        .unwrap();
    println!("=== k-distance plot (descending) ===");
    for (i, d) in plot.iter().enumerate() {
        println!("  {:2} {:8.4}", i, d);
    }

    for metric in Metric::ALL {
        let dbscan = Dbscan::new(metric).with_eps(0.2);
        let n_clusters = dbscan.perform_clustering(&mut segments).unwrap();

        println!("\n=== DBSCAN ({metric}, eps=0.2) => {n_clusters} clusters ===");
        for (i, s) in segments.iter().enumerate() {
            let start = s.start();
            let tag = if s.cluster() == NO_CLUSTER {
                "NOISE".to_string()
            } else {
                format!("cluster {}", s.cluster())
            };
            println!(
                "  segment {:2} ({:5.2}, {:5.2}, {:5.2}) => {}",
                i, start.x, start.y, start.z, tag
            );
        }
    }
}
