//! Relative position of the (infinite) lines supporting two segments.
//!
//! All predicates combine two facts:
//!
//! - the scalar triple product of (connecting vector, direction 1, direction 2),
//!   which is zero iff the two lines are coplanar;
//! - the rank of pairs of those vectors (see [`rank_of_pair`]).
//!
//! Comparisons are exact. They are meant for classification of well-conditioned
//! input, not for deciding geometry under heavy rounding.

use super::segment::Segment;
use super::vector::{rank_of_pair, scalar_triple_product, Vec3};

/// How two supporting lines sit relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRelation {
    /// Not coplanar.
    Skew,
    /// Coplanar with independent directions.
    Intersecting,
    /// Distinct parallel lines.
    Parallel,
    /// The same line.
    Overlapping,
    /// At least one segment has a zero direction, so it does not span a line.
    Degenerate,
}

impl LineRelation {
    /// Classify the lines supporting `first` and `second`.
    pub fn classify(first: &Segment, second: &Segment) -> Self {
        if !first.direction().is_non_zero() || !second.direction().is_non_zero() {
            Self::Degenerate
        } else if lines_are_skew(first, second) {
            Self::Skew
        } else if lines_intersect(first, second) {
            Self::Intersecting
        } else if lines_overlap(first, second) {
            Self::Overlapping
        } else if lines_are_parallel(first, second) {
            Self::Parallel
        } else {
            Self::Degenerate
        }
    }
}

fn connecting_vector(first: &Segment, second: &Segment) -> Vec3 {
    second.start() - first.start()
}

fn triple_product(first: &Segment, second: &Segment) -> f64 {
    scalar_triple_product(connecting_vector(first, second), first.span(), second.span())
}

/// Coplanar lines with independent directions.
pub fn lines_intersect(first: &Segment, second: &Segment) -> bool {
    triple_product(first, second) == 0.0 && rank_of_pair(first.span(), second.span()) == 2
}

/// Lines that do not share a plane.
pub fn lines_are_skew(first: &Segment, second: &Segment) -> bool {
    triple_product(first, second) != 0.0
}

/// Distinct lines with proportional directions.
pub fn lines_are_parallel(first: &Segment, second: &Segment) -> bool {
    let connecting = connecting_vector(first, second);
    triple_product(first, second) == 0.0
        && rank_of_pair(first.span(), second.span()) == 1
        && rank_of_pair(connecting, first.span()) == 2
}

/// Collinear lines (same support).
pub fn lines_overlap(first: &Segment, second: &Segment) -> bool {
    let connecting = connecting_vector(first, second);
    triple_product(first, second) == 0.0
        && rank_of_pair(first.span(), second.span()) == 1
        && rank_of_pair(connecting, first.span()) == 1
        && rank_of_pair(connecting, second.span()) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: [f64; 3], end: [f64; 3]) -> Segment {
        Segment::between(start.into(), end.into())
    }

    #[test]
    fn test_skew() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([0.0, 0.0, 1.0], [0.0, 1.0, 1.0]);
        assert!(lines_are_skew(&a, &b));
        assert!(!lines_intersect(&a, &b));
        assert_eq!(LineRelation::classify(&a, &b), LineRelation::Skew);
    }

    #[test]
    fn test_intersecting_beyond_segment_ends() {
        // The segments themselves do not touch; their lines cross at the origin.
        let a = seg([1.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        let b = seg([0.0, 1.0, 0.0], [0.0, 3.0, 0.0]);
        assert!(lines_intersect(&a, &b));
        assert!(!lines_are_parallel(&a, &b));
        assert_eq!(LineRelation::classify(&a, &b), LineRelation::Intersecting);
    }

    #[test]
    fn test_parallel() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([0.0, 2.0, 0.0], [-3.0, 2.0, 0.0]);
        assert!(lines_are_parallel(&a, &b));
        assert!(!lines_overlap(&a, &b));
        assert_eq!(LineRelation::classify(&a, &b), LineRelation::Parallel);
    }

    #[test]
    fn test_overlapping() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = seg([5.0, 5.0, 5.0], [7.0, 7.0, 7.0]);
        assert!(lines_overlap(&a, &b));
        assert!(!lines_are_parallel(&a, &b));
        assert_eq!(LineRelation::classify(&a, &b), LineRelation::Overlapping);
    }

    #[test]
    fn test_overlapping_with_shared_start() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([0.0, 0.0, 0.0], [4.0, 0.0, 0.0]);
        // Connecting vector is zero, so its rank with either direction is 1.
        assert!(lines_overlap(&a, &b));
    }

    #[test]
    fn test_degenerate() {
        let a = seg([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
        let b = seg([0.0, 0.0, 1.0], [0.0, 1.0, 1.0]);
        assert_eq!(LineRelation::classify(&a, &b), LineRelation::Degenerate);
    }
}
