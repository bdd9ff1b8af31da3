// Models module - exports all model types

mod distance_graph;
mod location;
mod network;
mod registry;
mod route;

// Re-export model types
pub use self::distance_graph::DistanceGraph;
pub use self::location::Location;
pub use self::network::RoadNetwork;
pub use self::registry::LocationRegistry;
pub use self::route::{
    Algorithm, DestinationDistance, NearestNeighborRoute, RoutePlan, RouteRequest, RouteResult,
    ShortestPathResult,
};

// Common type aliases for improved code readability
pub type LocationId = usize;
pub type Distance = u64;
