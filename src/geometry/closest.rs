//! Closest points between two finite segments.
//!
//! # The Reduction
//!
//! Write the segments as `P(s) = P0 + s·u` and `Q(t) = Q0 + t·v` with
//! `s, t ∈ [0, 1]`, where `u` and `v` run from start point to endpoint.
//! With `w = P0 - Q0` the squared distance `|P(s) - Q(t)|²` is a convex
//! quadratic in `(s, t)` built from five scalars:
//!
//! ```text
//! a = u·u   b = u·v   c = v·v   d = u·w   e = v·w   det = a·c - b²
//! ```
//!
//! When `det > 0` the lines are not parallel and the unconstrained optimum is
//! `s* = (b·e - c·d) / det`, `t* = (a·e - b·d) / det`. The optimum is then pushed
//! onto the unit square: clamp `s`, re-derive `t` from it, and if `t` leaves
//! `[0, 1]` clamp it and re-derive `s` one last time.
//!
//! When the lines are parallel every `s` pairs with some optimal `t`, so `s` is
//! pinned to 0 and `t` is solved for; the same `t`-clamping step then fixes up `s`.
//!
//! Zero-length segments make `a` or `c` vanish. A point-like second segment is
//! projected straight onto the first; otherwise every ratio whose denominator
//! is zero collapses to 0 instead of producing NaN, so the solver always answers.

use super::segment::Segment;
use super::vector::Vec3;

/// Relative threshold under which `det` is treated as zero (parallel lines).
///
/// `det = |u|²|v|² sin²θ`, so the comparison is against `a·c`.
pub const PARALLEL_TOLERANCE: f64 = 1e-12;

/// Closest point on the first segment paired with the closest point on the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPointPair {
    /// Point on the first segment.
    pub first: Vec3,
    /// Point on the second segment.
    pub second: Vec3,
}

impl ClosestPointPair {
    /// Per-coordinate difference `first - second`.
    #[inline]
    pub fn delta(&self) -> Vec3 {
        self.first - self.second
    }

    /// The same pair viewed from the other segment.
    #[inline]
    pub fn swap(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

#[inline]
fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        0.0
    } else {
        num / den
    }
}

/// Find the pair of points, one per segment, that realizes the minimum distance.
pub fn closest_points(first: &Segment, second: &Segment) -> ClosestPointPair {
    let (s, t) = closest_parameters(first, second);
    ClosestPointPair {
        first: first.point_at(s),
        second: second.point_at(t),
    }
}

/// Parameters `(s, t) ∈ [0, 1]²` of the closest points, see [`closest_points`].
pub fn closest_parameters(first: &Segment, second: &Segment) -> (f64, f64) {
    let u = first.span();
    let v = second.span();
    let w = first.start() - second.start();

    let a = u.dot(u);
    let b = u.dot(v);
    let c = v.dot(v);
    let d = u.dot(w);
    let e = v.dot(w);
    let det = a * c - b * b;

    // s = s_num / s_den, t = t_num / t_den; kept as fractions until the end.
    let mut s_num;
    let mut s_den = det;
    let mut t_num;
    let mut t_den = det;

    if c == 0.0 {
        // Second segment is a single point: project it onto the first.
        s_num = -d;
        s_den = a;
        t_num = 0.0;
        t_den = 1.0;
    } else if det <= PARALLEL_TOLERANCE * a * c {
        s_num = 0.0;
        s_den = 1.0;
        t_num = e;
        t_den = c;
    } else {
        s_num = b * e - c * d;
        t_num = a * e - b * d;
        if s_num < 0.0 {
            // s* < 0: on the s = 0 edge.
            s_num = 0.0;
            t_num = e;
            t_den = c;
        } else if s_num > s_den {
            // s* > 1: on the s = 1 edge.
            s_num = s_den;
            t_num = e + b;
            t_den = c;
        }
    }

    if t_num < 0.0 {
        t_num = 0.0;
        if -d < 0.0 {
            s_num = 0.0;
        } else if -d > a {
            s_num = s_den;
        } else {
            s_num = -d;
            s_den = a;
        }
    } else if t_num > t_den {
        t_num = t_den;
        if b - d < 0.0 {
            s_num = 0.0;
        } else if b - d > a {
            s_num = s_den;
        } else {
            s_num = b - d;
            s_den = a;
        }
    }

    let s = ratio(s_num, s_den).clamp(0.0, 1.0);
    let t = ratio(t_num, t_den).clamp(0.0, 1.0);
    (s, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn seg(start: [f64; 3], end: [f64; 3]) -> Segment {
        Segment::between(start.into(), end.into())
    }

    fn gap(p: &ClosestPointPair) -> f64 {
        let d = p.delta();
        d.dot(d).sqrt()
    }

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-9);
    }

    #[test]
    fn test_crossing_segments_meet() {
        let a = seg([-1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([0.0, -1.0, 0.0], [0.0, 1.0, 0.0]);
        let p = closest_points(&a, &b);
        assert_vec_eq(p.first, Vec3::ZERO);
        assert_vec_eq(p.second, Vec3::ZERO);
        assert_abs_diff_eq!(gap(&p), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skew_unit_segments() {
        // x-axis segment at z = 0, y-direction segment at z = 1, crossing in projection.
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([0.5, -0.5, 1.0], [0.5, 0.5, 1.0]);
        let p = closest_points(&a, &b);
        assert_vec_eq(p.first, Vec3::new(0.5, 0.0, 0.0));
        assert_vec_eq(p.second, Vec3::new(0.5, 0.0, 1.0));
        assert_abs_diff_eq!(gap(&p), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skew_with_corner_clamp() {
        // Infinite lines meet at x = 2 which is outside the first segment.
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([2.0, -1.0, 1.0], [2.0, 1.0, 1.0]);
        let p = closest_points(&a, &b);
        assert_vec_eq(p.first, Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(p.second, Vec3::new(2.0, 0.0, 1.0));
        assert_abs_diff_eq!(gap(&p), 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_endpoint_to_endpoint() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([3.0, 1.0, 0.0], [3.0, 5.0, 0.0]);
        let p = closest_points(&a, &b);
        assert_vec_eq(p.first, Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(p.second, Vec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn test_parallel_offset() {
        let h = 0.75;
        let a = seg([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        let b = seg([0.5, h, 0.0], [1.5, h, 0.0]);
        let p = closest_points(&a, &b);
        assert_abs_diff_eq!(gap(&p), h, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_disjoint_along_axis() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([3.0, 1.0, 0.0], [4.0, 1.0, 0.0]);
        let p = closest_points(&a, &b);
        assert_vec_eq(p.first, Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(p.second, Vec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn test_antiparallel_disjoint() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let b = seg([-1.0, 0.0, 2.0], [-3.0, 0.0, 2.0]);
        let p = closest_points(&a, &b);
        assert_vec_eq(p.first, Vec3::new(0.0, 0.0, 0.0));
        assert_vec_eq(p.second, Vec3::new(-1.0, 0.0, 2.0));
    }

    #[test]
    fn test_collinear_overlap_has_zero_gap() {
        let a = seg([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        let b = seg([1.0, 0.0, 0.0], [3.0, 0.0, 0.0]);
        let p = closest_points(&a, &b);
        assert_abs_diff_eq!(gap(&p), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_length_segments() {
        let point = seg([1.0, 1.0, 0.0], [1.0, 1.0, 0.0]);
        let line = seg([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);

        let p = closest_points(&point, &line);
        assert_vec_eq(p.first, Vec3::new(1.0, 1.0, 0.0));
        assert_vec_eq(p.second, Vec3::new(1.0, 0.0, 0.0));

        let q = closest_points(&line, &point);
        assert_vec_eq(q.first, Vec3::new(1.0, 0.0, 0.0));
        assert_vec_eq(q.second, Vec3::new(1.0, 1.0, 0.0));

        let other = seg([4.0, 5.0, 0.0], [4.0, 5.0, 0.0]);
        let r = closest_points(&point, &other);
        assert_abs_diff_eq!(gap(&r), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_swap_symmetry_on_skew_pair() {
        let a = seg([0.0, 0.2, -1.0], [1.5, 0.7, 0.3]);
        let b = seg([-0.4, 1.0, 2.0], [0.9, -1.1, 0.6]);
        let ab = closest_points(&a, &b);
        let ba = closest_points(&b, &a).swap();
        assert_vec_eq(ab.first, ba.first);
        assert_vec_eq(ab.second, ba.second);
    }

    #[test]
    fn test_parameters_are_in_unit_square() {
        let a = seg([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        let b = seg([5.0, -2.0, 3.0], [7.0, 2.0, -1.0]);
        let (s, t) = closest_parameters(&a, &b);
        assert!((0.0..=1.0).contains(&s));
        assert!((0.0..=1.0).contains(&t));
    }
}
