//! Serializable DBSCAN configuration.

use serde::{Deserialize, Serialize};

use super::measure::Metric;

/// Spatial dimension of segment data; gives `min_pts = 5`.
pub const DEFAULT_DIMENSION: i32 = 3;

/// Parameters for [`Dbscan`](super::Dbscan).
///
/// Missing fields take their defaults, so a partial document loads:
///
/// ```
/// use strand::cluster::{DbscanConfig, Metric};
///
/// let config: DbscanConfig = serde_json::from_str(r#"{ "eps": 0.25 }"#).unwrap();
/// assert_eq!(config.eps, Some(0.25));
/// assert_eq!(config.dimension, 3);
/// assert_eq!(config.metric, Metric::Euclidean);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbscanConfig {
    /// Neighborhood radius. Must be set (and positive) before clustering.
    pub eps: Option<f64>,

    /// Spatial dimension used to derive `min_pts = 2 * dimension - 1`.
    pub dimension: i32,

    /// Distance measure between segments.
    pub metric: Metric,
}

impl Default for DbscanConfig {
    fn default() -> Self {
        Self {
            eps: None,
            dimension: DEFAULT_DIMENSION,
            metric: Metric::default(),
        }
    }
}

impl DbscanConfig {
    /// Defaults with `eps` set.
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps: Some(eps),
            ..Self::default()
        }
    }
}
