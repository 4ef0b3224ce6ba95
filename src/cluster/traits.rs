use super::util;
use crate::error::Result;
use crate::geometry::{Segment, NO_CLUSTER};

/// A distance between two segments.
///
/// Implementations reduce the closest-point pair of the two segments to a
/// non-negative scalar and must be pure.
pub trait DistanceMeasure {
    /// Distance between `first` and `second`.
    fn distance(&self, first: &Segment, second: &Segment) -> f64;

    /// Short name used in log events.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<M: DistanceMeasure + ?Sized> DistanceMeasure for &M {
    fn distance(&self, first: &Segment, second: &Segment) -> f64 {
        (**self).distance(first, second)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Common interface for hard clustering of segments (at most one cluster per segment).
pub trait Clustering {
    /// Return one label per input segment: `Some(cluster_id)` or `None` for noise.
    ///
    /// Does not touch the labels stored on the segments.
    fn fit_predict_with_noise(&self, segments: &[Segment]) -> Result<Vec<Option<usize>>>;

    /// Cluster `segments` and write the resulting labels back onto them.
    ///
    /// Noise is written as [`NO_CLUSTER`].
    /// Returns the number of clusters discovered.
    fn perform_clustering(&self, segments: &mut [Segment]) -> Result<usize> {
        let labels = self.fit_predict_with_noise(segments)?;
        let n_clusters = labels.iter().flatten().max().map_or(0, |&max| max + 1);
        let encoded = labels
            .into_iter()
            .map(|label| label.map_or(Ok(NO_CLUSTER), util::cluster_label))
            .collect::<Result<Vec<i32>>>()?;

        for (segment, label) in segments.iter_mut().zip(encoded) {
            segment.set_cluster(label);
        }
        Ok(n_clusters)
    }
}
