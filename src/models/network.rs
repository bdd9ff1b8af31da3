// Road network: a registry and its distance graph validated together

use crate::error::{Result, RouteError};
use crate::models::{DistanceGraph, LocationRegistry};

/// Immutable routing configuration shared by all solvers
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    registry: LocationRegistry,
    graph: DistanceGraph,
}

impl RoadNetwork {
    /// Pairs a registry with a graph of the same size
    pub fn new(registry: LocationRegistry, graph: DistanceGraph) -> Result<Self> {
        if registry.len() != graph.len() {
            return Err(RouteError::MalformedGraph(format!(
                "{} locations registered but distance matrix is {}x{}",
                registry.len(),
                graph.len(),
                graph.len()
            )));
        }

        Ok(Self { registry, graph })
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &DistanceGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}
