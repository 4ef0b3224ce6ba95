//! Segment geometry.
//!
//! Everything the clustering layer needs to measure "how close" two segments are:
//!
//! - [`Vec3`] points/vectors and the small determinants built on them
//! - [`Segment`], the labeled record that gets clustered
//! - [`closest_points`], the exact segment–segment closest-point solver
//! - line-relation predicates (skew / intersecting / parallel / overlapping)
//!
//! ## Usage
//!
//! ```rust
//! use strand::geometry::{closest_points, LineRelation, Segment, Vec3};
//!
//! let a = Segment::between(Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
//! let b = Segment::between(Vec3::new(0.0, -1.0, 1.0), Vec3::new(0.0, 1.0, 1.0));
//!
//! let pair = closest_points(&a, &b);
//! assert_eq!(pair.first, Vec3::new(0.0, 0.0, 0.0));
//! assert_eq!(pair.second, Vec3::new(0.0, 0.0, 1.0));
//! assert_eq!(LineRelation::classify(&a, &b), LineRelation::Skew);
//! ```

mod closest;
mod relation;
mod segment;
mod vector;

pub use closest::{closest_parameters, closest_points, ClosestPointPair, PARALLEL_TOLERANCE};
pub use relation::{
    lines_are_parallel, lines_are_skew, lines_intersect, lines_overlap, LineRelation,
};
pub use segment::{reset_clusters, Segment, NO_CLUSTER};
pub use vector::{determinant_2d, determinant_3d, rank_of_pair, scalar_triple_product, Vec3};
