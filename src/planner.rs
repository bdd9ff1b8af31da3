// Route planner: entry point for the presentation layer

use geo::{Coord, LineString};
use log::{debug, info};
use rayon::prelude::*;

use crate::algorithms::{NearestNeighborSolver, RouteSolver, ShortestPathSolver};
use crate::error::{Result, RouteError};
use crate::models::{Algorithm, RoadNetwork, RoutePlan, RouteRequest, RouteResult};

/// Resolves requests against one road network and attaches render geometry
///
/// The planner only borrows the network, so one network can serve any number
/// of planners and threads at once.
#[derive(Clone, Copy)]
pub struct RoutePlanner<'a> {
    network: &'a RoadNetwork,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(network: &'a RoadNetwork) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &'a RoadNetwork {
        self.network
    }

    /// Solver implementing `algorithm` over this planner's network
    pub fn solver(&self, algorithm: Algorithm) -> Box<dyn RouteSolver + 'a> {
        match algorithm {
            Algorithm::ShortestPath => Box::new(ShortestPathSolver::new(self.network)),
            Algorithm::NearestNeighbor => Box::new(NearestNeighborSolver::new(self.network)),
        }
    }

    /// Solves a single request
    pub fn plan(&self, request: &RouteRequest) -> Result<RoutePlan> {
        if request.destinations.is_empty() {
            return Err(RouteError::NoDestinations);
        }

        debug!(
            "planning {} from '{}' to {:?}",
            request.algorithm, request.start, request.destinations
        );
        let result = self
            .solver(request.algorithm)
            .solve_route(&request.start, &request.destinations)?;
        let legs = self.legs(&result)?;

        Ok(RoutePlan { result, legs })
    }

    /// Solves independent requests in parallel, keeping request order
    pub fn plan_batch(&self, requests: &[RouteRequest]) -> Vec<Result<RoutePlan>> {
        info!("planning batch of {} requests", requests.len());
        requests.par_iter().map(|request| self.plan(request)).collect()
    }

    /// Polylines to draw for a result
    pub fn legs(&self, result: &RouteResult) -> Result<Vec<LineString<f64>>> {
        match result {
            RouteResult::NearestNeighbor(route) => Ok(vec![self.polyline(&route.route)?]),
            RouteResult::ShortestPath(result) => result
                .distances
                .iter()
                .filter(|entry| entry.is_reachable())
                .map(|entry| self.polyline(&entry.path))
                .collect(),
        }
    }

    /// Display coordinates of the named locations, in order
    pub fn waypoints<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Coord<f64>>> {
        let registry = self.network.registry();
        names
            .iter()
            .map(|name| registry.position(registry.resolve_index(name.as_ref())?))
            .collect()
    }

    fn polyline(&self, names: &[String]) -> Result<LineString<f64>> {
        Ok(LineString::new(self.waypoints(names)?))
    }
}
