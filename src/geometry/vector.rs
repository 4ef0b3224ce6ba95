//! Point/vector arithmetic and the small determinants the line predicates need.

use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

/// A point or free vector in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// `true` if at least one coordinate is non-zero.
    #[inline]
    pub fn is_non_zero(self) -> bool {
        self.x != 0.0 || self.y != 0.0 || self.z != 0.0
    }

    /// Coordinates as an array, in `x, y, z` order.
    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Hash for Vec3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_f64(self.x, state);
        hash_f64(self.y, state);
        hash_f64(self.z, state);
    }
}

/// Hash a float so that values comparing equal hash equally.
///
/// `-0.0 == 0.0` under IEEE comparison, so both are folded onto `+0.0`.
pub(crate) fn hash_f64<H: Hasher>(value: f64, state: &mut H) {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_bits().hash(state);
}

/// Determinant of the 2×2 matrix with rows `a` and `b`.
#[inline]
pub fn determinant_2d(a: [f64; 2], b: [f64; 2]) -> f64 {
    a[0] * b[1] - a[1] * b[0]
}

/// Determinant of the 3×3 matrix with rows `a`, `b`, `c` (cofactor expansion on `a`).
#[inline]
pub fn determinant_3d(a: Vec3, b: Vec3, c: Vec3) -> f64 {
    a.x * determinant_2d([b.y, b.z], [c.y, c.z]) - a.y * determinant_2d([b.x, b.z], [c.x, c.z])
        + a.z * determinant_2d([b.x, b.y], [c.x, c.y])
}

/// Scalar triple product `connecting · (first × second)`.
///
/// Zero iff the three vectors are coplanar.
#[inline]
pub fn scalar_triple_product(connecting: Vec3, first: Vec3, second: Vec3) -> f64 {
    determinant_3d(connecting, first, second)
}

/// Rank of the 3×2 matrix whose columns are `a` and `b`.
///
/// 0 when both vectors are zero, 1 when every 2×2 minor vanishes, 2 otherwise.
pub fn rank_of_pair(a: Vec3, b: Vec3) -> usize {
    if !a.is_non_zero() && !b.is_non_zero() {
        return 0;
    }

    let minors = [
        determinant_2d([a.x, a.y], [b.x, b.y]),
        determinant_2d([a.x, a.z], [b.x, b.z]),
        determinant_2d([a.y, a.z], [b.y, b.z]),
    ];
    if minors.iter().any(|&m| m != 0.0) {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(v: Vec3) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -1.0, 0.5);
        assert_eq!(a - b, Vec3::new(-3.0, 3.0, 2.5));
        assert_eq!(a + b, Vec3::new(5.0, 1.0, 3.5));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 4.0 - 2.0 + 1.5);
    }

    #[test]
    fn test_non_zero() {
        assert!(!Vec3::ZERO.is_non_zero());
        assert!(Vec3::new(0.0, 0.0, -1e-300).is_non_zero());
    }

    #[test]
    fn test_signed_zero_hashes_equal() {
        let a = Vec3::new(0.0, 1.0, 2.0);
        let b = Vec3::new(-0.0, 1.0, 2.0);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
    }

    #[test]
    fn test_determinants() {
        assert_eq!(determinant_2d([1.0, 2.0], [3.0, 4.0]), -2.0);

        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(determinant_3d(x, y, z), 1.0);
        assert_eq!(determinant_3d(y, x, z), -1.0);
        assert_eq!(scalar_triple_product(x, y, x + y), 0.0);
    }

    #[test]
    fn test_rank_of_pair() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(rank_of_pair(Vec3::ZERO, Vec3::ZERO), 0);
        assert_eq!(rank_of_pair(x, Vec3::ZERO), 1);
        assert_eq!(rank_of_pair(x, x * -3.0), 1);
        assert_eq!(rank_of_pair(x, y), 2);
    }
}
