//! DBSCAN over line segments.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups objects whose neighborhoods are dense and leaves sparse
//! objects unclustered. Here the objects are [`Segment`]s and "distance" is
//! whatever [`DistanceMeasure`] the engine was built with; every measure in
//! this crate works on the closest points of the two segments.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two segments to be neighbors.
//! - **MinPts**: Minimum neighborhood size, *counting the segment itself*, for a
//!   segment to be "core". Derived from the spatial dimension as `2·D - 1`.
//! - **Core segment**: Has at least MinPts - 1 neighbors within ε.
//! - **Border segment**: Within ε of a core segment but not core itself.
//! - **Noise**: Neither core nor border. Labeled [`NO_CLUSTER`].
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited segment S (in input order):
//!    - Find its neighbors within ε (S itself excluded)
//!    - If too few, mark S as noise (it may still become a border segment later)
//!    - Else S is core: open the next cluster id and expand from S
//!
//! 2. Expansion walks a worklist seeded with S's neighbors. Unvisited entries
//!    get their own neighborhood computed; core entries append their
//!    not-yet-listed neighbors to the worklist. Every unvisited or noise entry
//!    joins the cluster. Segments already claimed by another cluster keep
//!    their id: the first cluster to reach a border segment wins.
//!
//! Cluster ids are consecutive from 0 in discovery order.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance evaluations; there is no spatial index.
//! - **Space**: O(n) for labels and the worklist.
//!
//! ## Choosing ε
//!
//! [`Dbscan::distance_values_for_epsilon_estimate`] returns the sorted k-distance
//! plot (k = MinPts). An ε near the "knee" of that curve is the usual choice;
//! picking the knee is left to the caller.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use tracing::{debug, trace};

use super::config::{DbscanConfig, DEFAULT_DIMENSION};
use super::measure::Metric;
use super::traits::{Clustering, DistanceMeasure};
use super::util;
use crate::error::{Error, Result};
use crate::geometry::{Segment, NO_CLUSTER};

// Internal label encoding for the visited map.
// - UNVISITED: not reached yet
// - NO_CLUSTER: visited, not density-reachable so far (may be promoted later)
// - >= 0: claimed by that cluster
const UNVISITED: i32 = -2;

/// Minimum neighborhood size for a `dimension`-dimensional space: `2·dimension - 1`.
///
/// ```
/// use strand::cluster::min_pts;
///
/// assert_eq!(min_pts(3).unwrap(), 5);
/// assert_eq!(min_pts(1).unwrap(), 1);
/// assert!(min_pts(0).is_err());
/// ```
pub fn min_pts(dimension: i32) -> Result<usize> {
    if dimension <= 0 {
        return Err(Error::InvalidParameter {
            name: "dimension",
            message: "must be positive",
        });
    }
    usize::try_from(2 * i64::from(dimension) - 1).map_err(|_| Error::InvalidParameter {
        name: "dimension",
        message: "too large",
    })
}

/// DBSCAN clustering of segments.
///
/// `eps` is optional at construction time but must be set before clustering;
/// [`Clustering::fit_predict_with_noise`] fails with
/// [`Error::MissingParameter`] otherwise.
#[derive(Debug, Clone)]
pub struct Dbscan<M = Metric> {
    /// Epsilon: maximum distance for neighborhood.
    eps: Option<f64>,
    /// Spatial dimension; min_pts is derived from it.
    dimension: i32,
    measure: M,
}

impl<M: DistanceMeasure> Dbscan<M> {
    /// Create a clusterer with the given distance measure and no `eps`.
    ///
    /// The dimension defaults to 3 (`min_pts = 5`).
    pub fn new(measure: M) -> Self {
        Self {
            eps: None,
            dimension: DEFAULT_DIMENSION,
            measure,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = Some(eps);
        self
    }

    /// Set the spatial dimension used to derive `min_pts`.
    pub fn with_dimension(mut self, dimension: i32) -> Self {
        self.dimension = dimension;
        self
    }

    /// Swap the distance measure, keeping the other parameters.
    pub fn with_measure<N: DistanceMeasure>(self, measure: N) -> Dbscan<N> {
        Dbscan {
            eps: self.eps,
            dimension: self.dimension,
            measure,
        }
    }

    /// Set epsilon in place.
    pub fn set_eps(&mut self, eps: f64) {
        self.eps = Some(eps);
    }

    pub fn eps(&self) -> Option<f64> {
        self.eps
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// `min_pts` for the configured dimension.
    pub fn min_pts(&self) -> Result<usize> {
        min_pts(self.dimension)
    }

    fn validated_eps(&self) -> Result<f64> {
        match self.eps {
            None => Err(Error::MissingParameter { name: "eps" }),
            Some(eps) if eps > 0.0 && eps.is_finite() => Ok(eps),
            Some(_) => Err(Error::InvalidParameter {
                name: "eps",
                message: "must be positive and finite",
            }),
        }
    }

    /// Find all neighbors of `segments[idx]` within `eps`, excluding itself.
    fn region_query(&self, segments: &[Segment], idx: usize, eps: f64) -> Vec<usize> {
        let segment = &segments[idx];
        segments
            .iter()
            .enumerate()
            .filter(|(other_idx, other)| {
                *other_idx != idx && self.measure.distance(segment, other) <= eps
            })
            .map(|(other_idx, _)| other_idx)
            .collect()
    }

    /// Expand a cluster from a core segment.
    #[allow(clippy::too_many_arguments)]
    fn expand_cluster(
        &self,
        segments: &[Segment],
        eps: f64,
        min_pts: usize,
        core_idx: usize,
        neighbors: Vec<usize>,
        visited: &mut [i32],
        cluster_id: i32,
    ) {
        visited[core_idx] = cluster_id;

        // Worklist only grows; `listed` keeps it duplicate-free.
        let mut listed = vec![false; segments.len()];
        listed[core_idx] = true;
        for &n in &neighbors {
            listed[n] = true;
        }
        let mut worklist = neighbors;

        let mut next = 0;
        while next < worklist.len() {
            let current = worklist[next];
            next += 1;

            let state = visited[current];
            if state == UNVISITED {
                let current_neighbors = self.region_query(segments, current, eps);
                let is_core = current_neighbors.len() + 1 >= min_pts;
                trace!(
                    cluster_id,
                    segment = current,
                    neighbors = current_neighbors.len(),
                    is_core,
                    "expanding"
                );
                if is_core {
                    for n in current_neighbors {
                        if !listed[n] {
                            listed[n] = true;
                            worklist.push(n);
                        }
                    }
                }
            }

            // Noise can be promoted to a border segment; other clusters' members stay put.
            if state == UNVISITED || state == NO_CLUSTER {
                visited[current] = cluster_id;
            }
        }
    }

    /// Distance from `segments[idx]` to its `k`-th nearest other segment.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] for an empty slice
    /// - [`Error::InvalidParameter`] if `idx` is out of range or `k == 0`
    /// - [`Error::InvalidNeighborOrder`] if fewer than `k` other segments exist
    pub fn k_distance(&self, segments: &[Segment], idx: usize, k: usize) -> Result<f64> {
        let n = segments.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if idx >= n {
            return Err(Error::InvalidParameter {
                name: "index",
                message: "out of range",
            });
        }
        if k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        if k > n - 1 {
            return Err(Error::InvalidNeighborOrder {
                requested: k,
                n_items: n - 1,
            });
        }

        let segment = &segments[idx];
        let mut distances: Vec<f64> = segments
            .iter()
            .enumerate()
            .filter(|(other_idx, _)| *other_idx != idx)
            .map(|(_, other)| self.measure.distance(other, segment))
            .collect();
        distances.sort_by(f64::total_cmp);
        Ok(distances[k - 1])
    }

    /// k-distance plot values for choosing `eps`, with `k = min_pts`.
    ///
    /// One value per segment (its distance to the k-th nearest other segment),
    /// sorted in descending order.
    ///
    /// # Errors
    ///
    /// Fails on an invalid dimension, or when a non-empty dataset has no more
    /// than `min_pts` segments. An empty dataset gives an empty plot.
    pub fn distance_values_for_epsilon_estimate(&self, segments: &[Segment]) -> Result<Vec<f64>> {
        let k = self.min_pts()?;
        if segments.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            n = segments.len(),
            k,
            measure = self.measure.name(),
            "computing k-distance plot"
        );

        let mut values = (0..segments.len())
            .map(|idx| self.k_distance(segments, idx, k))
            .collect::<Result<Vec<f64>>>()?;
        util::sort_descending(&mut values);
        Ok(values)
    }
}

impl Default for Dbscan<Metric> {
    fn default() -> Self {
        Self::new(Metric::default())
    }
}

impl Dbscan<Metric> {
    /// Build a clusterer from a [`DbscanConfig`].
    pub fn from_config(config: &DbscanConfig) -> Self {
        Self {
            eps: config.eps,
            dimension: config.dimension,
            measure: config.metric,
        }
    }
}

impl<M: DistanceMeasure> Clustering for Dbscan<M> {
    fn fit_predict_with_noise(&self, segments: &[Segment]) -> Result<Vec<Option<usize>>> {
        let eps = self.validated_eps()?;
        let min_pts = self.min_pts()?;

        let n = segments.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        debug!(
            n,
            eps,
            min_pts,
            measure = self.measure.name(),
            "performing clustering on segments"
        );

        let mut visited = vec![UNVISITED; n];
        let mut cluster_id = NO_CLUSTER;

        for idx in 0..n {
            if visited[idx] != UNVISITED {
                continue;
            }

            let neighbors = self.region_query(segments, idx, eps);

            // MinPts includes the segment itself.
            if neighbors.len() + 1 < min_pts {
                visited[idx] = NO_CLUSTER;
                continue;
            }

            cluster_id += 1;
            debug!(cluster_id, seed = idx, neighbors = neighbors.len(), "opening cluster");
            self.expand_cluster(segments, eps, min_pts, idx, neighbors, &mut visited, cluster_id);
        }

        let labels: Vec<Option<usize>> = visited
            .into_iter()
            .map(|l| usize::try_from(l).ok())
            .collect();

        debug!(
            n_clusters = cluster_id + 1,
            n_noise = labels.iter().filter(|l| l.is_none()).count(),
            "clustering finished"
        );
        Ok(labels)
    }
}
