// Route models: requests, solver results and renderable plans

use crate::models::Distance;
use geo::LineString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Route computation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Minimum distance from the start to each destination
    ShortestPath,
    /// Greedy visiting order, always driving to the closest remaining stop
    NearestNeighbor,
}

impl Algorithm {
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::ShortestPath => "Dijkstra's Algorithm",
            Algorithm::NearestNeighbor => "Nearest Neighbor Algorithm",
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shortest-path" | "dijkstra" => Ok(Algorithm::ShortestPath),
            "nearest-neighbor" | "nearest-neighbour" | "nn" => Ok(Algorithm::NearestNeighbor),
            other => Err(format!(
                "unknown algorithm '{}' (expected shortest-path or nearest-neighbor)",
                other
            )),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One user invocation: where to start, where to go, and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub destinations: Vec<String>,
    pub algorithm: Algorithm,
}

impl RouteRequest {
    pub fn new<S, D, I>(start: S, destinations: I, algorithm: Algorithm) -> Self
    where
        S: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = D>,
    {
        Self {
            start: start.into(),
            destinations: destinations.into_iter().map(Into::into).collect(),
            algorithm,
        }
    }
}

/// Minimum distance to a single requested destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationDistance {
    pub destination: String,

    /// `None` when no road sequence reaches the destination
    pub distance: Option<Distance>,

    /// Locations from the start to the destination, both included;
    /// empty when unreachable
    pub path: Vec<String>,
}

impl DestinationDistance {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Shortest-path answer, one entry per requested destination in request order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    pub start: String,
    pub distances: Vec<DestinationDistance>,
}

impl ShortestPathResult {
    /// Distance to the first entry named `destination`
    pub fn distance_to(&self, destination: &str) -> Option<Distance> {
        self.distances
            .iter()
            .find(|entry| entry.destination == destination)
            .and_then(|entry| entry.distance)
    }
}

/// Nearest-neighbor answer: a single visiting order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestNeighborRoute {
    /// Visited locations, starting with the start location
    pub route: Vec<String>,

    /// Sum of the road weights driven along `route`
    pub total_distance: Distance,

    /// Destinations left over when no remaining one was reachable
    pub unvisited: Vec<String>,
}

impl NearestNeighborRoute {
    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }
}

/// Output of either solver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum RouteResult {
    ShortestPath(ShortestPathResult),
    NearestNeighbor(NearestNeighborRoute),
}

impl RouteResult {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            RouteResult::ShortestPath(_) => Algorithm::ShortestPath,
            RouteResult::NearestNeighbor(_) => Algorithm::NearestNeighbor,
        }
    }
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteResult::ShortestPath(result) => {
                writeln!(f, "Dijkstra's Algorithm Result:")?;
                for entry in &result.distances {
                    match entry.distance {
                        Some(distance) => writeln!(
                            f,
                            "{} -> {}: {} km",
                            result.start, entry.destination, distance
                        )?,
                        None => writeln!(
                            f,
                            "{} -> {}: unreachable",
                            result.start, entry.destination
                        )?,
                    }
                }
                Ok(())
            }
            RouteResult::NearestNeighbor(route) => {
                writeln!(f, "Nearest Neighbor Route:")?;
                writeln!(f, "{}", route.route.join(" -> "))?;
                write!(f, "Total Distance: {} km", route.total_distance)?;
                if !route.is_complete() {
                    write!(f, "\nUnreachable: {}", route.unvisited.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// A solved request plus the geometry a renderer needs to draw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub result: RouteResult,

    /// Polylines over the registered display coordinates: one leg for a
    /// nearest-neighbor route, one per reachable destination for shortest paths
    pub legs: Vec<LineString<f64>>,
}
