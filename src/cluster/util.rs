use crate::error::{Error, Result};
use crate::geometry::Segment;

/// Convert a cluster id into the `i32` label stored on segments.
pub(crate) fn cluster_label(id: usize) -> Result<i32> {
    i32::try_from(id).map_err(|_| Error::InvalidParameter {
        name: "segments",
        message: "cluster count exceeds the range of a segment label",
    })
}

/// Group segment indices by cluster id.
///
/// Entry `c` of the result lists, in ascending order, the indices labeled `Some(c)`.
/// Noise is omitted. The groups are ordered by id; use [`same_partition`] to
/// compare two labelings without regard to id numbering.
pub fn cluster_members(labels: &[Option<usize>]) -> Vec<Vec<usize>> {
    let n_clusters = labels.iter().flatten().max().map_or(0, |&max| max + 1);
    let mut members = vec![Vec::new(); n_clusters];
    for (idx, label) in labels.iter().enumerate() {
        if let Some(c) = label {
            members[*c].push(idx);
        }
    }
    members
}

/// `true` if both labelings put the same segments together and mark the same
/// segments as noise, however the cluster ids were numbered.
pub fn same_partition(a: &[Option<usize>], b: &[Option<usize>]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let canonical = |labels: &[Option<usize>]| {
        let mut groups = cluster_members(labels);
        groups.retain(|g| !g.is_empty());
        groups.sort_unstable();
        groups
    };
    canonical(a) == canonical(b)
}

/// Labels currently stored on `segments`, with noise as `None`.
pub fn segment_labels(segments: &[Segment]) -> Vec<Option<usize>> {
    segments
        .iter()
        .map(|s| usize::try_from(s.cluster()).ok())
        .collect()
}

/// Sort in place, largest first. NaN sorts ahead of every number.
pub(crate) fn sort_descending(values: &mut [f64]) {
    values.sort_by(|a, b| b.total_cmp(a));
}
