// Error type shared by the registry, the distance graph and the solvers

use crate::models::LocationId;
use thiserror::Error;

/// Errors produced while building a road network or computing a route
#[derive(Debug, Error)]
pub enum RouteError {
    /// A location name that is not registered (exact, case-sensitive match)
    #[error("unknown location '{0}'")]
    UnknownLocation(String),

    /// An internal index outside `[0, len)`
    #[error("location index {index} is out of range (network has {len} locations)")]
    InvalidIndex { index: LocationId, len: usize },

    /// Distance matrix is not square, not symmetric, or disagrees with the registry
    #[error("malformed distance graph: {0}")]
    MalformedGraph(String),

    /// The same name registered twice
    #[error("location '{0}' is registered more than once")]
    DuplicateLocation(String),

    /// A request without any destination
    #[error("at least one destination is required")]
    NoDestinations,

    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse network file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;
