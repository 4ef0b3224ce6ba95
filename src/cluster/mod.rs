//! Density clustering of line segments.
//!
//! ## Distance Between Segments
//!
//! Two segments are as close as their closest points. Every
//! [`DistanceMeasure`] here first asks the closest-point solver for that pair
//! and then reduces the coordinate differences with a norm:
//!
//! - [`Euclidean`] (L2), the default
//! - [`Manhattan`] (L1)
//! - [`Chebyshev`] (L∞)
//!
//! [`Metric`] selects one of them at runtime (and from configuration).
//!
//! ## DBSCAN
//!
//! Density-based clustering that discovers clusters of arbitrary shape and
//! labels outliers as noise. It does not need the number of clusters in
//! advance, but it does need a radius `eps`; the k-distance helper
//! ([`Dbscan::distance_values_for_epsilon_estimate`]) produces the data for
//! picking one.
//!
//! **Assumptions**:
//! - Clusters have similar density
//! - `eps` is meaningful in the units of the chosen norm
//!
//! ## Usage
//!
//! ```rust
//! use strand::cluster::{Clustering, Dbscan, Metric};
//! use strand::geometry::{Segment, NO_CLUSTER};
//!
//! // Five nearly coincident unit segments along x, plus one far away.
//! let mut segments: Vec<Segment> = (0..5)
//!     .map(|i| Segment::new(0.0, i as f64 * 0.01, 0.0, -1.0, 0.0, 0.0))
//!     .collect();
//! segments.push(Segment::new(0.0, 0.0, 20.0, -1.0, 0.0, 0.0));
//!
//! let dbscan = Dbscan::new(Metric::Euclidean).with_eps(0.1);
//! let n_clusters = dbscan.perform_clustering(&mut segments).unwrap();
//!
//! assert_eq!(n_clusters, 1);
//! assert!(segments[..5].iter().all(|s| s.cluster() == 0));
//! assert_eq!(segments[5].cluster(), NO_CLUSTER);
//! ```

mod config;
mod dbscan;
mod measure;
mod traits;
mod util;

pub use config::{DbscanConfig, DEFAULT_DIMENSION};
pub use dbscan::{min_pts, Dbscan};
pub use measure::{Chebyshev, Euclidean, Manhattan, Metric};
pub use traits::{Clustering, DistanceMeasure};
pub use util::{cluster_members, same_partition, segment_labels};
