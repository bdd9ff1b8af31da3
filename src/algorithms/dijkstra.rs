// Single-source shortest paths over the dense distance matrix

use log::debug;

use crate::algorithms::RouteSolver;
use crate::error::Result;
use crate::models::{
    Algorithm, DestinationDistance, Distance, LocationId, RoadNetwork, RouteResult,
    ShortestPathResult,
};

/// Minimum distances and predecessors from one start location
///
/// `None` marks a location that no road sequence reaches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub start: LocationId,
    pub min_dist: Vec<Option<Distance>>,
    pub previous: Vec<Option<LocationId>>,
}

impl ShortestPaths {
    pub fn distance(&self, to: LocationId) -> Option<Distance> {
        self.min_dist.get(to).copied().flatten()
    }

    /// Locations from the start to `to`, both included; empty when unreachable
    pub fn path_to(&self, to: LocationId) -> Vec<LocationId> {
        if self.distance(to).is_none() {
            return Vec::new();
        }

        let mut path = vec![to];
        let mut current = to;
        while let Some(prev) = self.previous[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Dijkstra's algorithm with an O(n²) scan, suited to small dense networks
///
/// Ties in node selection go to the lowest index. A road is only relaxed when
/// it strictly improves the distance, so the first predecessor found is kept.
pub struct ShortestPathSolver<'a> {
    network: &'a RoadNetwork,
}

impl<'a> ShortestPathSolver<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self { network }
    }

    /// Distances from `start` to every location
    pub fn shortest_paths(&self, start: LocationId) -> Result<ShortestPaths> {
        let graph = self.network.graph();
        let n = graph.len();
        graph.check(start)?;

        let mut min_dist: Vec<Option<Distance>> = vec![None; n];
        let mut previous = vec![None; n];
        let mut visited = vec![false; n];
        min_dist[start] = Some(0);

        for _ in 0..n.saturating_sub(1) {
            let Some(u) = Self::closest_unvisited(&min_dist, &visited) else {
                break;
            };
            visited[u] = true;

            // Nothing to relax from a node that was never reached
            let Some(dist_u) = min_dist[u] else {
                debug!("node {} unreachable, stopping relaxation", u);
                break;
            };
            debug!("selected node {} at distance {}", u, dist_u);

            for (v, weight) in graph.neighbors(u)? {
                if visited[v] {
                    continue;
                }
                // Cannot overflow: the graph bounds the sum of all its roads
                let candidate = dist_u + weight;
                if min_dist[v].map_or(true, |current| candidate < current) {
                    debug!("relaxed {} -> {} to {}", u, v, candidate);
                    min_dist[v] = Some(candidate);
                    previous[v] = Some(u);
                }
            }
        }

        Ok(ShortestPaths {
            start,
            min_dist,
            previous,
        })
    }

    /// First unvisited node in index order with the smallest distance;
    /// unreached nodes rank after every reached one
    fn closest_unvisited(min_dist: &[Option<Distance>], visited: &[bool]) -> Option<LocationId> {
        let mut best: Option<LocationId> = None;
        for (node, dist) in min_dist.iter().enumerate() {
            if visited[node] {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => match (dist, min_dist[b]) {
                    (Some(d), Some(bd)) => *d < bd,
                    (Some(_), None) => true,
                    _ => false,
                },
            };
            if better {
                best = Some(node);
            }
        }
        best
    }

    /// Minimum distance from `start` to each destination, in request order
    pub fn solve<S: AsRef<str>>(&self, start: &str, destinations: &[S]) -> Result<ShortestPathResult> {
        let registry = self.network.registry();
        let start_id = registry.resolve_index(start)?;
        let destination_ids = registry.resolve_all(destinations)?;

        let paths = self.shortest_paths(start_id)?;

        let distances = destination_ids
            .into_iter()
            .map(|id| {
                let path = paths
                    .path_to(id)
                    .into_iter()
                    .map(|step| registry.name_of(step).map(str::to_string))
                    .collect::<Result<Vec<_>>>()?;
                Ok(DestinationDistance {
                    destination: registry.name_of(id)?.to_string(),
                    distance: paths.distance(id),
                    path,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ShortestPathResult {
            start: registry.name_of(start_id)?.to_string(),
            distances,
        })
    }
}

impl RouteSolver for ShortestPathSolver<'_> {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestPath
    }

    fn solve_route(&self, start: &str, destinations: &[String]) -> Result<RouteResult> {
        self.solve(start, destinations)
            .map(RouteResult::ShortestPath)
    }
}
