// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod planner;
pub mod utils;

// Re-exports for convenience
pub use algorithms::{NearestNeighborSolver, RouteSolver, ShortestPathSolver};
pub use error::{Result, RouteError};
pub use models::{
    Algorithm, DistanceGraph, LocationRegistry, RoadNetwork, RoutePlan, RouteRequest, RouteResult,
};
pub use planner::RoutePlanner;
