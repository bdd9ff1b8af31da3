// Integration tests against the built-in five-location network
use delivery_routes::models::{Algorithm, RouteRequest, RouteResult};
use delivery_routes::utils::init_map::sample_network;
use delivery_routes::{NearestNeighborSolver, RouteError, RoutePlanner, ShortestPathSolver};

const SATELLITE: &str = "Satellite Town";
const UNIVERSITY: &str = "University Road";
const NOOR_PUR: &str = "Noor Pur Thal";
const KHUSHAB: &str = "Khushab Road";
const SHAHEEN: &str = "Shaheen Chowk";

#[test]
fn test_satellite_to_khushab_shortest_distance() {
    let network = sample_network().unwrap();
    let solver = ShortestPathSolver::new(&network);
    let result = solver.solve(SATELLITE, &[KHUSHAB]).unwrap();

    // Direct road is 15, through Shaheen Chowk it is 8 + 5
    assert_eq!(result.distance_to(KHUSHAB), Some(13));
    assert_eq!(result.distances[0].path, vec![SATELLITE, SHAHEEN, KHUSHAB]);
}

#[test]
fn test_every_location_reaches_itself_at_zero() {
    let network = sample_network().unwrap();
    let solver = ShortestPathSolver::new(&network);

    for name in network.registry().names() {
        let result = solver.solve(name, &[name]).unwrap();
        assert_eq!(result.distance_to(name), Some(0));
    }
}

#[test]
fn test_shortest_never_exceeds_direct_road() {
    let network = sample_network().unwrap();
    let solver = ShortestPathSolver::new(&network);
    let names = network.registry().names();

    for start in &names {
        let result = solver.solve(start, &names).unwrap();
        let start_id = network.registry().resolve_index(start).unwrap();
        for entry in &result.distances {
            let dest_id = network.registry().resolve_index(&entry.destination).unwrap();
            if let Some(direct) = network.graph().edge(start_id, dest_id).unwrap() {
                assert!(entry.distance.unwrap() <= direct);
            }
        }
    }
}

#[test]
fn test_symmetry() {
    let network = sample_network().unwrap();
    for a in 0..network.len() {
        for b in 0..network.len() {
            assert_eq!(
                network.graph().weight(a, b).unwrap(),
                network.graph().weight(b, a).unwrap()
            );
        }
    }
}

#[test]
fn test_nearest_neighbor_visits_all_four() {
    let network = sample_network().unwrap();
    let solver = NearestNeighborSolver::new(&network);
    let route = solver
        .solve(SATELLITE, &[UNIVERSITY, NOOR_PUR, KHUSHAB, SHAHEEN])
        .unwrap();

    assert_eq!(
        route.route,
        vec![SATELLITE, UNIVERSITY, SHAHEEN, KHUSHAB, NOOR_PUR]
    );
    assert_eq!(route.total_distance, 5 + 6 + 5 + 7);
    assert!(route.is_complete());

    // Each step is the nearest of what was still left
    let ids: Vec<_> = route
        .route
        .iter()
        .map(|name| network.registry().resolve_index(name).unwrap())
        .collect();
    let mut summed = 0;
    for (step, pair) in ids.windows(2).enumerate() {
        let chosen = network.graph().weight(pair[0], pair[1]).unwrap();
        for &later in &ids[step + 2..] {
            assert!(chosen <= network.graph().weight(pair[0], later).unwrap());
        }
        summed += chosen;
    }
    assert_eq!(summed, route.total_distance);
}

#[test]
fn test_nearest_neighbor_duplicates() {
    let network = sample_network().unwrap();
    let solver = NearestNeighborSolver::new(&network);

    assert_eq!(
        solver.solve(SATELLITE, &[NOOR_PUR, NOOR_PUR, NOOR_PUR]).unwrap(),
        solver.solve(SATELLITE, &[NOOR_PUR]).unwrap()
    );
}

#[test]
fn test_unknown_location_for_both_solvers() {
    let network = sample_network().unwrap();
    let planner = RoutePlanner::new(&network);

    for algorithm in [Algorithm::ShortestPath, Algorithm::NearestNeighbor] {
        let request = RouteRequest::new("Nonexistent", [KHUSHAB], algorithm);
        assert!(matches!(
            planner.plan(&request),
            Err(RouteError::UnknownLocation(name)) if name == "Nonexistent"
        ));
    }
}

#[test]
fn test_text_output() {
    let network = sample_network().unwrap();
    let planner = RoutePlanner::new(&network);

    let plan = planner
        .plan(&RouteRequest::new(
            SATELLITE,
            [KHUSHAB],
            Algorithm::ShortestPath,
        ))
        .unwrap();
    assert_eq!(
        plan.result.to_string(),
        "Dijkstra's Algorithm Result:\nSatellite Town -> Khushab Road: 13 km\n"
    );

    let plan = planner
        .plan(&RouteRequest::new(
            SATELLITE,
            [KHUSHAB],
            Algorithm::NearestNeighbor,
        ))
        .unwrap();
    assert_eq!(
        plan.result.to_string(),
        "Nearest Neighbor Route:\nSatellite Town -> Khushab Road\nTotal Distance: 15 km"
    );
}

#[test]
fn test_plan_serializes_to_json() {
    let network = sample_network().unwrap();
    let planner = RoutePlanner::new(&network);
    let plan = planner
        .plan(&RouteRequest::new(
            SATELLITE,
            [KHUSHAB, NOOR_PUR],
            Algorithm::NearestNeighbor,
        ))
        .unwrap();

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["result"]["algorithm"], "nearest-neighbor");
    assert_eq!(json["result"]["total_distance"], 12 + 7);

    let back: delivery_routes::RoutePlan = serde_json::from_value(json).unwrap();
    assert!(matches!(back.result, RouteResult::NearestNeighbor(_)));
}
