// Greedy nearest-unvisited visiting order

use log::debug;

use crate::algorithms::RouteSolver;
use crate::error::Result;
use crate::models::{Algorithm, Distance, LocationId, NearestNeighborRoute, RoadNetwork, RouteResult};

/// Visiting order computed over location indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    /// Visited locations, starting with the start location
    pub order: Vec<LocationId>,
    pub total_distance: Distance,
    /// Requested destinations that could not be reached, in request order
    pub unvisited: Vec<LocationId>,
}

/// Nearest-neighbor heuristic: from the current location, always drive to the
/// closest destination not yet visited
///
/// Not an optimal tour. Ties go to the destination requested first, and a
/// destination without a direct road from the current location is never a
/// candidate. When no remaining destination is reachable the walk stops early.
pub struct NearestNeighborSolver<'a> {
    network: &'a RoadNetwork,
}

impl<'a> NearestNeighborSolver<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self { network }
    }

    /// Computes the tour over already resolved indices
    pub fn tour(&self, start: LocationId, destinations: &[LocationId]) -> Result<Tour> {
        let graph = self.network.graph();
        graph.check(start)?;

        // Request order, first occurrence wins; the start is already visited
        let mut remaining: Vec<LocationId> = Vec::with_capacity(destinations.len());
        for &id in destinations {
            graph.check(id)?;
            if id != start && !remaining.contains(&id) {
                remaining.push(id);
            }
        }

        let mut order = vec![start];
        let mut current = start;
        let mut total_distance: Distance = 0;

        while !remaining.is_empty() {
            let mut nearest: Option<(usize, Distance)> = None;
            for (pos, &candidate) in remaining.iter().enumerate() {
                if let Some(weight) = graph.edge(current, candidate)? {
                    if nearest.map_or(true, |(_, best)| weight < best) {
                        nearest = Some((pos, weight));
                    }
                }
            }

            let Some((pos, weight)) = nearest else {
                debug!(
                    "no road from {} to any of {:?}, stopping early",
                    current, remaining
                );
                break;
            };

            let next = remaining.remove(pos);
            debug!("driving {} -> {} ({})", current, next, weight);
            // Cannot overflow: the graph bounds the sum of all its roads
            total_distance += weight;
            order.push(next);
            current = next;
        }

        Ok(Tour {
            order,
            total_distance,
            unvisited: remaining,
        })
    }

    /// Visiting order from `start` over `destinations`
    pub fn solve<S: AsRef<str>>(
        &self,
        start: &str,
        destinations: &[S],
    ) -> Result<NearestNeighborRoute> {
        let registry = self.network.registry();
        let start_id = registry.resolve_index(start)?;
        let destination_ids = registry.resolve_all(destinations)?;

        let tour = self.tour(start_id, &destination_ids)?;

        let names = |ids: &[LocationId]| -> Result<Vec<String>> {
            ids.iter()
                .map(|&id| registry.name_of(id).map(str::to_string))
                .collect()
        };

        Ok(NearestNeighborRoute {
            route: names(&tour.order)?,
            total_distance: tour.total_distance,
            unvisited: names(&tour.unvisited)?,
        })
    }
}

impl RouteSolver for NearestNeighborSolver<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NearestNeighbor
    }

    fn solve_route(&self, start: &str, destinations: &[String]) -> Result<RouteResult> {
        self.solve(start, destinations)
            .map(RouteResult::NearestNeighbor)
    }
}
