#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/context_test.rs"]
mod context_test;

use crate::models::common::Gain;
use crate::models::solution::RouteState;
use crate::models::Input;

/// Precomputed per-route quantities consumed by local search operators.
///
/// Any mutation of a route invalidates the cached values of its vehicle; the driver
/// must refresh every vehicle reported by an operator's `update_candidates` before
/// evaluating further candidates.
pub struct SolutionState {
    /// For vehicle `v` and edge position `r`, the sum of the cost of the edge entering
    /// the stop at `r` and the cost of the edge leaving the stop at `r + 1`. This is
    /// the cost removed alongside the two-stop edge `[r, r + 1]`, so the gain of
    /// replacing it can be computed locally.
    pub edge_costs_around_edge: Vec<Vec<Gain>>,
}

impl SolutionState {
    /// Creates an empty state sized for the input's fleet.
    pub fn new(input: &Input) -> Self {
        Self { edge_costs_around_edge: vec![Vec::new(); input.vehicles.len()] }
    }

    /// Refreshes cached values for all routes.
    pub fn setup<R: RouteState>(&mut self, input: &Input, routes: &[R]) {
        routes.iter().for_each(|route| self.update_route(input, route.route(), route.vehicle_rank()));
    }

    /// Refreshes cached values for a single route whose contents changed.
    pub fn update_route(&mut self, input: &Input, route: &[usize], vehicle_rank: usize) {
        let matrix = input.matrix();
        let vehicle = &input.vehicles[vehicle_rank];
        let size = route.len();

        self.edge_costs_around_edge[vehicle_rank] = if size < 2 {
            Vec::new()
        } else {
            (0..size - 1)
                .map(|rank| {
                    let previous_cost = if rank == 0 {
                        vehicle.start.map_or(0, |start| matrix.cost(start, input.jobs[route[rank]].location) as Gain)
                    } else {
                        matrix.cost(input.jobs[route[rank - 1]].location, input.jobs[route[rank]].location) as Gain
                    };

                    let next_cost = if rank + 1 == size - 1 {
                        vehicle.end.map_or(0, |end| matrix.cost(input.jobs[route[rank + 1]].location, end) as Gain)
                    } else {
                        matrix.cost(input.jobs[route[rank + 1]].location, input.jobs[route[rank + 2]].location)
                            as Gain
                    };

                    previous_cost + next_cost
                })
                .collect()
        };
    }
}
