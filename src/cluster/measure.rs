//! Segment distance measures.
//!
//! Each measure asks the closest-point solver for the nearest pair of points and
//! reduces the coordinate differences with a different norm:
//!
//! | Measure | Reduction |
//! |---|---|
//! | [`Euclidean`] | `sqrt(Σ Δ²)` |
//! | [`Manhattan`] | `Σ |Δ|` |
//! | [`Chebyshev`] | `max |Δ|` |
//!
//! For the same pair, `Chebyshev <= Euclidean <= Manhattan`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::traits::DistanceMeasure;
use crate::error::Error;
use crate::geometry::{closest_points, Segment, Vec3};

#[inline]
fn closest_delta(first: &Segment, second: &Segment) -> Vec3 {
    closest_points(first, second).delta()
}

/// L2 distance between the closest points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl DistanceMeasure for Euclidean {
    fn distance(&self, first: &Segment, second: &Segment) -> f64 {
        let d = closest_delta(first, second);
        d.dot(d).sqrt()
    }

    fn name(&self) -> &'static str {
        "euclidean"
    }
}

/// L1 distance between the closest points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl DistanceMeasure for Manhattan {
    fn distance(&self, first: &Segment, second: &Segment) -> f64 {
        let d = closest_delta(first, second);
        d.x.abs() + d.y.abs() + d.z.abs()
    }

    fn name(&self) -> &'static str {
        "manhattan"
    }
}

/// L∞ distance between the closest points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chebyshev;

impl DistanceMeasure for Chebyshev {
    fn distance(&self, first: &Segment, second: &Segment) -> f64 {
        let d = closest_delta(first, second);
        d.x.abs().max(d.y.abs()).max(d.z.abs())
    }

    fn name(&self) -> &'static str {
        "chebyshev"
    }
}

/// Runtime-selectable distance measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl Metric {
    /// All selectable measures.
    pub const ALL: [Metric; 3] = [Metric::Euclidean, Metric::Manhattan, Metric::Chebyshev];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
            Metric::Chebyshev => "chebyshev",
        }
    }
}

impl DistanceMeasure for Metric {
    fn distance(&self, first: &Segment, second: &Segment) -> f64 {
        match self {
            Metric::Euclidean => Euclidean.distance(first, second),
            Metric::Manhattan => Manhattan.distance(first, second),
            Metric::Chebyshev => Chebyshev.distance(first, second),
        }
    }

    fn name(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            "manhattan" | "l1" => Ok(Metric::Manhattan),
            "chebyshev" | "linf" => Ok(Metric::Chebyshev),
            _ => Err(Error::InvalidParameter {
                name: "metric",
                message: "expected one of euclidean, manhattan, chebyshev",
            }),
        }
    }
}
