use crate::construction::heuristics::{addition_cost, route_cost_for_vehicle};
use crate::helpers::models::*;
use crate::models::problem::Vehicle;

#[test]
fn can_compute_addition_cost_for_empty_route() {
    let input = test_input(vec![test_job(3)], vec![test_vehicle(vec![10])], line_matrix(4));
    let matrix = input.matrix();

    assert_eq!(addition_cost(&input, matrix, 0, &input.vehicles[0], &[], 0), 6);

    let open_start = Vehicle { start: None, ..test_vehicle(vec![10]) };
    assert_eq!(addition_cost(&input, matrix, 0, &open_start, &[], 0), 3);

    let open_end = Vehicle { end: None, ..test_vehicle(vec![10]) };
    assert_eq!(addition_cost(&input, matrix, 0, &open_end, &[], 0), 3);

    let no_depots = Vehicle { start: None, end: None, ..test_vehicle(vec![10]) };
    assert_eq!(addition_cost(&input, matrix, 0, &no_depots, &[], 0), 0);
}

#[test]
fn can_compute_addition_cost_at_boundaries() {
    let input = test_input(vec![test_job(1), test_job(2), test_job(3)], vec![test_vehicle(vec![10])], line_matrix(4));
    let matrix = input.matrix();
    let vehicle = &input.vehicles[0];
    let route = [1];

    // before the only job: 0 -> 2 becomes 0 -> 1 -> 2
    assert_eq!(addition_cost(&input, matrix, 0, vehicle, &route, 0), 0);
    // after the only job: 2 -> 0 becomes 2 -> 3 -> 0
    assert_eq!(addition_cost(&input, matrix, 2, vehicle, &route, 1), 2);
}

#[test]
fn can_compute_addition_cost_for_interior_position() {
    let input = test_input(vec![test_job(1), test_job(3), test_job(4)], vec![test_vehicle(vec![10])], line_matrix(5));
    let matrix = input.matrix();
    let vehicle = &input.vehicles[0];
    let route = [0, 1];

    // 1 -> 3 becomes 1 -> 4 -> 3
    assert_eq!(addition_cost(&input, matrix, 2, vehicle, &route, 1), 2);
}

#[test]
fn can_compute_route_cost() {
    let input = test_input(vec![test_job(1), test_job(2), test_job(3)], vec![test_vehicle(vec![10])], line_matrix(4));

    assert_eq!(route_cost_for_vehicle(&input, 0, &[0, 1, 2]), 6);
    assert_eq!(route_cost_for_vehicle(&input, 0, &[]), 0);

    let open_input = test_input(
        vec![test_job(1), test_job(2), test_job(3)],
        vec![Vehicle { end: None, ..test_vehicle(vec![10]) }],
        line_matrix(4),
    );
    assert_eq!(route_cost_for_vehicle(&open_input, 0, &[0, 1, 2]), 3);
}
