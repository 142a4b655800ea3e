#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/evaluators_test.rs"]
mod evaluators_test;

use crate::models::common::{Cost, Gain};
use crate::models::problem::{CostMatrix, Vehicle};
use crate::models::Input;

/// Returns the travel cost increase from inserting `job_rank` into `route` at `position`.
///
/// At the route boundaries the vehicle's start/end locations take the place of the
/// missing neighbour; absent boundary terms are dropped.
pub fn addition_cost(
    input: &Input,
    matrix: &CostMatrix,
    job_rank: usize,
    vehicle: &Vehicle,
    route: &[usize],
    position: usize,
) -> Gain {
    debug_assert!(position <= route.len());

    let job_location = input.jobs[job_rank].location;

    let mut previous_cost: Gain = 0;
    let mut next_cost: Gain = 0;
    let mut old_edge_cost: Gain = 0;

    if position == route.len() {
        if route.is_empty() {
            if let Some(start) = vehicle.start {
                previous_cost = matrix.cost(start, job_location) as Gain;
            }
            if let Some(end) = vehicle.end {
                next_cost = matrix.cost(job_location, end) as Gain;
            }
        } else {
            // inserting past the end of a non-empty route
            let previous_location = input.jobs[route[position - 1]].location;
            previous_cost = matrix.cost(previous_location, job_location) as Gain;
            if let Some(end) = vehicle.end {
                old_edge_cost = matrix.cost(previous_location, end) as Gain;
                next_cost = matrix.cost(job_location, end) as Gain;
            }
        }
    } else {
        let next_location = input.jobs[route[position]].location;
        next_cost = matrix.cost(job_location, next_location) as Gain;

        if position == 0 {
            if let Some(start) = vehicle.start {
                previous_cost = matrix.cost(start, job_location) as Gain;
                old_edge_cost = matrix.cost(start, next_location) as Gain;
            }
        } else {
            let previous_location = input.jobs[route[position - 1]].location;
            previous_cost = matrix.cost(previous_location, job_location) as Gain;
            old_edge_cost = matrix.cost(previous_location, next_location) as Gain;
        }
    }

    previous_cost + next_cost - old_edge_cost
}

/// Returns the full travel cost of a route, including depot edges when present.
pub fn route_cost_for_vehicle(input: &Input, vehicle_rank: usize, route: &[usize]) -> Cost {
    let matrix = input.matrix();
    let vehicle = &input.vehicles[vehicle_rank];

    let mut cost = 0;
    if let (Some(start), Some(&first)) = (vehicle.start, route.first()) {
        cost += matrix.cost(start, input.jobs[first].location);
    }
    cost += route
        .windows(2)
        .map(|pair| matrix.cost(input.jobs[pair[0]].location, input.jobs[pair[1]].location))
        .sum::<Cost>();
    if let (Some(end), Some(&last)) = (vehicle.end, route.last()) {
        cost += matrix.cost(input.jobs[last].location, end);
    }

    cost
}
