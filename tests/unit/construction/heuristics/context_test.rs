use crate::construction::heuristics::SolutionState;
use crate::helpers::models::*;
use crate::models::solution::{RawRoute, RouteState};
use crate::models::Input;

fn create_route(input: &Input, vehicle_rank: usize, jobs: &[usize]) -> RawRoute {
    let mut route = RawRoute::new(input, vehicle_rank);
    for (position, &job_rank) in jobs.iter().enumerate() {
        route.add(input, job_rank, position);
    }
    route.update_amounts(input);

    route
}

#[test]
fn can_compute_edge_costs_around_edges() {
    let input = test_input(
        (1..5).map(test_job).collect(),
        vec![test_vehicle(vec![10]), test_vehicle(vec![10])],
        line_matrix(5),
    );
    let routes = vec![create_route(&input, 0, &[0, 1, 2, 3]), create_route(&input, 1, &[])];

    let mut state = SolutionState::new(&input);
    state.setup(&input, routes.as_slice());

    // for the route 0 -> 1 -> 2 -> 3 -> 4 -> 0, removing the edge [r, r + 1] frees the
    // edges around it
    assert_eq!(state.edge_costs_around_edge[0], vec![2, 2, 5]);
    assert!(state.edge_costs_around_edge[1].is_empty());
}

#[test]
fn can_skip_routes_without_edges() {
    let input = test_input(vec![test_job(1)], vec![test_vehicle(vec![10])], line_matrix(2));
    let routes = vec![create_route(&input, 0, &[0])];

    let mut state = SolutionState::new(&input);
    state.setup(&input, routes.as_slice());

    assert!(state.edge_costs_around_edge[0].is_empty());
}

#[test]
fn can_refresh_single_route_after_mutation() {
    let input = test_input(
        (1..5).map(test_job).collect(),
        vec![test_vehicle(vec![10]), test_vehicle(vec![10])],
        line_matrix(5),
    );
    let mut route = create_route(&input, 0, &[0, 1, 2, 3]);

    let mut state = SolutionState::new(&input);
    state.update_route(&input, route.route(), 0);

    route.route.swap(0, 3);
    route.update_amounts(&input);
    state.update_route(&input, route.route(), 0);

    // the route became 0 -> 4 -> 2 -> 3 -> 1 -> 0
    let mut expected = SolutionState::new(&input);
    expected.update_route(&input, &[3, 1, 2, 0], 0);
    assert_eq!(state.edge_costs_around_edge[0], expected.edge_costs_around_edge[0]);
    assert_eq!(state.edge_costs_around_edge[0], vec![4 + 1, 3 + 1, 1 + 1]);
}
