pub mod dijkstra;
pub mod nearest_neighbor;

pub use dijkstra::ShortestPathSolver;
pub use nearest_neighbor::NearestNeighborSolver;

// Common algorithm traits
use crate::error::Result;
use crate::models::{Algorithm, RouteResult};

/// Trait for route solvers selectable by the presentation layer
pub trait RouteSolver {
    /// Which strategy this solver implements
    fn algorithm(&self) -> Algorithm;

    /// Resolve the names and compute a route from `start` over `destinations`
    ///
    /// Fails with `UnknownLocation` before any computation if a name is not
    /// registered.
    fn solve_route(&self, start: &str, destinations: &[String]) -> Result<RouteResult>;
}
