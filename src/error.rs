use thiserror::Error;

/// Errors returned by the geometry and clustering operations in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A per-segment query was made against an empty collection.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// A parameter the operation needs was never configured.
    #[error("missing parameter {name}: must be configured before use")]
    MissingParameter {
        /// Parameter name.
        name: &'static str,
    },

    /// Requested neighbor order is incompatible with the dataset.
    #[error("invalid neighbor order: requested k = {requested}, but only {n_items} other segments exist")]
    InvalidNeighborOrder {
        /// Requested order of the nearest neighbor.
        requested: usize,
        /// Number of segments the k-th neighbor can be drawn from.
        n_items: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
