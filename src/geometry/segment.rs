//! The line segment record that gets clustered.

use std::hash::{Hash, Hasher};

use super::vector::{hash_f64, Vec3};

/// Cluster label of a segment that belongs to no cluster.
///
/// Before clustering this means "unvisited"; after clustering it means noise.
pub const NO_CLUSTER: i32 = -1;

/// A finite 3-D line segment with a mutable cluster label.
///
/// The segment is stored as an absolute start point and a direction vector.
/// Its endpoint is `start - direction`.
///
/// Equality compares the six coordinates *and* the cluster label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Vec3,
    direction: Vec3,
    cluster: i32,
}

impl Segment {
    /// Create an unlabeled segment from its start point and direction.
    pub fn new(ax: f64, ay: f64, az: f64, dx: f64, dy: f64, dz: f64) -> Self {
        Self::from_vectors(Vec3::new(ax, ay, az), Vec3::new(dx, dy, dz))
    }

    /// Create an unlabeled segment from a start point and a direction vector.
    pub fn from_vectors(start: Vec3, direction: Vec3) -> Self {
        Self {
            start,
            direction,
            cluster: NO_CLUSTER,
        }
    }

    /// Create an unlabeled segment running from `start` to `end`.
    pub fn between(start: Vec3, end: Vec3) -> Self {
        Self::from_vectors(start, start - end)
    }

    #[inline]
    pub fn start(&self) -> Vec3 {
        self.start
    }

    /// Endpoint of the segment, `start - direction`.
    #[inline]
    pub fn end(&self) -> Vec3 {
        self.start - self.direction
    }

    /// The stored direction vector (points from the endpoint back to the start).
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Vector from the start point to the endpoint.
    #[inline]
    pub fn span(&self) -> Vec3 {
        -self.direction
    }

    /// Point at parameter `t`: `start` for 0, `end` for 1.
    #[inline]
    pub fn point_at(&self, t: f64) -> Vec3 {
        self.start + self.span() * t
    }

    pub fn length(&self) -> f64 {
        self.direction.dot(self.direction).sqrt()
    }

    /// Current cluster label (`NO_CLUSTER` or a non-negative id).
    #[inline]
    pub fn cluster(&self) -> i32 {
        self.cluster
    }

    #[inline]
    pub fn set_cluster(&mut self, cluster: i32) {
        self.cluster = cluster;
    }

    /// Clear the label back to `NO_CLUSTER`.
    #[inline]
    pub fn reset_cluster(&mut self) {
        self.cluster = NO_CLUSTER;
    }

    /// `true` while the segment carries no cluster id.
    #[inline]
    pub fn is_noise(&self) -> bool {
        self.cluster == NO_CLUSTER
    }
}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in self.start.to_array().into_iter().chain(self.direction.to_array()) {
            hash_f64(v, state);
        }
        self.cluster.hash(state);
    }
}

/// Reset every label in `segments` to `NO_CLUSTER`.
pub fn reset_clusters(segments: &mut [Segment]) {
    segments.iter_mut().for_each(Segment::reset_cluster);
}
