//! Density clustering of 3-D line segments.
//!
//! `strand` groups line segments with DBSCAN, where the distance between two
//! segments is the distance between their closest points under a pluggable norm.
//!
//! The public API is split in two:
//! - [`geometry`]: points, segments, the exact closest-point solver and
//!   line-relation predicates
//! - [`cluster`]: distance measures (Euclidean, Manhattan, Chebyshev), the DBSCAN
//!   engine and the k-distance helper for choosing `eps`
//!
//! The library logs through `tracing` and never installs a subscriber.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod geometry;

pub use cluster::{
    cluster_members, min_pts, same_partition, segment_labels, Chebyshev, Clustering, Dbscan,
    DbscanConfig, DistanceMeasure, Euclidean, Manhattan, Metric,
};
pub use error::{Error, Result};
pub use geometry::{closest_points, ClosestPointPair, LineRelation, Segment, Vec3, NO_CLUSTER};
