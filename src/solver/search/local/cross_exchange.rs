#[cfg(test)]
#[path = "../../../../tests/unit/solver/search/local/cross_exchange_test.rs"]
mod cross_exchange_test;

use super::LocalOperator;
use crate::construction::heuristics::SolutionState;
use crate::models::common::Gain;
use crate::models::solution::{RawRoute, RouteState};
use crate::models::Input;

/// Swaps the two consecutive jobs starting at `s_rank` in the source route with the two
/// consecutive jobs starting at `t_rank` in the target route. Either inserted edge may
/// be reversed independently when that direction scores better or is the only feasible
/// one.
pub struct CrossExchange<'a> {
    input: &'a Input,
    sol_state: &'a SolutionState,

    s_route: &'a mut RawRoute,
    s_vehicle: usize,
    s_rank: usize,

    t_route: &'a mut RawRoute,
    t_vehicle: usize,
    t_rank: usize,

    stored_gain: Gain,
    gain_computed: bool,
    gain_upper_bound_computed: bool,

    normal_s_gain: Gain,
    reversed_s_gain: Gain,
    normal_t_gain: Gain,
    reversed_t_gain: Gain,

    /// Whether the source edge is reversed when inserted into the target route.
    pub reverse_s_edge: bool,
    /// Whether the target edge is reversed when inserted into the source route.
    pub reverse_t_edge: bool,

    s_is_normal_valid: bool,
    s_is_reverse_valid: bool,
    t_is_normal_valid: bool,
    t_is_reverse_valid: bool,
}

impl<'a> CrossExchange<'a> {
    /// Creates a new instance of `CrossExchange`. The two routes must belong to
    /// different vehicles and both ranks must leave room for a two-job edge.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        input: &'a Input,
        sol_state: &'a SolutionState,
        s_route: &'a mut RawRoute,
        s_vehicle: usize,
        s_rank: usize,
        t_route: &'a mut RawRoute,
        t_vehicle: usize,
        t_rank: usize,
    ) -> Self {
        debug_assert!(s_vehicle != t_vehicle);
        debug_assert!(s_route.size() >= 2);
        debug_assert!(t_route.size() >= 2);
        debug_assert!(s_rank < s_route.size() - 1);
        debug_assert!(t_rank < t_route.size() - 1);

        Self {
            input,
            sol_state,
            s_route,
            s_vehicle,
            s_rank,
            t_route,
            t_vehicle,
            t_rank,
            stored_gain: 0,
            gain_computed: false,
            gain_upper_bound_computed: false,
            normal_s_gain: 0,
            reversed_s_gain: 0,
            normal_t_gain: 0,
            reversed_t_gain: 0,
            reverse_s_edge: false,
            reverse_t_edge: false,
            s_is_normal_valid: false,
            s_is_reverse_valid: false,
            t_is_normal_valid: false,
            t_is_reverse_valid: false,
        }
    }
}

impl LocalOperator for CrossExchange<'_> {
    fn gain_upper_bound(&mut self) -> Gain {
        let matrix = self.input.matrix();
        let jobs = &self.input.jobs;
        let v_source = &self.input.vehicles[self.s_vehicle];
        let v_target = &self.input.vehicles[self.t_vehicle];

        let s_index = jobs[self.s_route.route[self.s_rank]].location;
        let s_after_index = jobs[self.s_route.route[self.s_rank + 1]].location;
        let t_index = jobs[self.t_route.route[self.t_rank]].location;
        let t_after_index = jobs[self.t_route.route[self.t_rank + 1]].location;

        // For the source route, the cost of replacing the edge starting at s_rank with
        // the target edge. The cost removed with the adjacent edges comes from the
        // solution state cache; reversed variants change the target edge order.
        let mut previous_cost: Gain = 0;
        let mut next_cost: Gain = 0;
        let mut reverse_previous_cost: Gain = 0;
        let mut reverse_next_cost: Gain = 0;

        if self.s_rank == 0 {
            if let Some(start) = v_source.start {
                previous_cost = matrix.cost(start, t_index) as Gain;
                reverse_previous_cost = matrix.cost(start, t_after_index) as Gain;
            }
        } else {
            let p_index = jobs[self.s_route.route[self.s_rank - 1]].location;
            previous_cost = matrix.cost(p_index, t_index) as Gain;
            reverse_previous_cost = matrix.cost(p_index, t_after_index) as Gain;
        }

        if self.s_rank == self.s_route.size() - 2 {
            if let Some(end) = v_source.end {
                next_cost = matrix.cost(t_after_index, end) as Gain;
                reverse_next_cost = matrix.cost(t_index, end) as Gain;
            }
        } else {
            let n_index = jobs[self.s_route.route[self.s_rank + 2]].location;
            next_cost = matrix.cost(t_after_index, n_index) as Gain;
            reverse_next_cost = matrix.cost(t_index, n_index) as Gain;
        }

        let s_edge_cost_removed = self.sol_state.edge_costs_around_edge[self.s_vehicle][self.s_rank];
        self.normal_s_gain = s_edge_cost_removed - previous_cost - next_cost;

        let reverse_edge_cost = matrix.cost(t_index, t_after_index) as Gain - matrix.cost(t_after_index, t_index) as Gain;
        self.reversed_s_gain = s_edge_cost_removed + reverse_edge_cost - reverse_previous_cost - reverse_next_cost;

        // Symmetrically for the target route with the source edge.
        let mut previous_cost: Gain = 0;
        let mut next_cost: Gain = 0;
        let mut reverse_previous_cost: Gain = 0;
        let mut reverse_next_cost: Gain = 0;

        if self.t_rank == 0 {
            if let Some(start) = v_target.start {
                previous_cost = matrix.cost(start, s_index) as Gain;
                reverse_previous_cost = matrix.cost(start, s_after_index) as Gain;
            }
        } else {
            let p_index = jobs[self.t_route.route[self.t_rank - 1]].location;
            previous_cost = matrix.cost(p_index, s_index) as Gain;
            reverse_previous_cost = matrix.cost(p_index, s_after_index) as Gain;
        }

        if self.t_rank == self.t_route.size() - 2 {
            if let Some(end) = v_target.end {
                next_cost = matrix.cost(s_after_index, end) as Gain;
                reverse_next_cost = matrix.cost(s_index, end) as Gain;
            }
        } else {
            let n_index = jobs[self.t_route.route[self.t_rank + 2]].location;
            next_cost = matrix.cost(s_after_index, n_index) as Gain;
            reverse_next_cost = matrix.cost(s_index, n_index) as Gain;
        }

        let t_edge_cost_removed = self.sol_state.edge_costs_around_edge[self.t_vehicle][self.t_rank];
        self.normal_t_gain = t_edge_cost_removed - previous_cost - next_cost;

        let reverse_edge_cost = matrix.cost(s_index, s_after_index) as Gain - matrix.cost(s_after_index, s_index) as Gain;
        self.reversed_t_gain = t_edge_cost_removed + reverse_edge_cost - reverse_previous_cost - reverse_next_cost;

        self.gain_upper_bound_computed = true;

        self.normal_s_gain.max(self.reversed_s_gain) + self.normal_t_gain.max(self.reversed_t_gain)
    }

    fn is_valid(&mut self) -> bool {
        let s_current_job_rank = self.s_route.route[self.s_rank];
        let s_after_job_rank = self.s_route.route[self.s_rank + 1];
        let t_current_job_rank = self.t_route.route[self.t_rank];
        let t_after_job_rank = self.t_route.route[self.t_rank + 1];

        let jobs = &self.input.jobs;

        let mut valid = self.input.vehicle_ok_with_job(self.t_vehicle, s_current_job_rank)
            && self.input.vehicle_ok_with_job(self.t_vehicle, s_after_job_rank)
            && self.input.vehicle_ok_with_job(self.s_vehicle, t_current_job_rank)
            && self.input.vehicle_ok_with_job(self.s_vehicle, t_after_job_rank);

        let target_pickup = jobs[t_current_job_rank].pickup + jobs[t_after_job_rank].pickup;
        let target_delivery = jobs[t_current_job_rank].delivery + jobs[t_after_job_rank].delivery;

        valid = valid
            && self.s_route.is_valid_addition_for_capacity_margins(
                self.input,
                &target_pickup,
                &target_delivery,
                self.s_rank,
                self.s_rank + 2,
            );

        if valid {
            let t_edge = [t_current_job_rank, t_after_job_rank];
            // Keep, then reverse, the target edge direction when inserting in the
            // source route.
            self.s_is_normal_valid = self.s_route.is_valid_addition_for_capacity_inclusion(
                self.input,
                &target_delivery,
                t_edge.iter().copied(),
                self.s_rank,
                self.s_rank + 2,
            );
            self.s_is_reverse_valid = self.s_route.is_valid_addition_for_capacity_inclusion(
                self.input,
                &target_delivery,
                t_edge.iter().rev().copied(),
                self.s_rank,
                self.s_rank + 2,
            );

            valid = self.s_is_normal_valid || self.s_is_reverse_valid;
        }

        let source_pickup = jobs[s_current_job_rank].pickup + jobs[s_after_job_rank].pickup;
        let source_delivery = jobs[s_current_job_rank].delivery + jobs[s_after_job_rank].delivery;

        valid = valid
            && self.t_route.is_valid_addition_for_capacity_margins(
                self.input,
                &source_pickup,
                &source_delivery,
                self.t_rank,
                self.t_rank + 2,
            );

        if valid {
            let s_edge = [s_current_job_rank, s_after_job_rank];
            // Keep, then reverse, the source edge direction when inserting in the
            // target route.
            self.t_is_normal_valid = self.t_route.is_valid_addition_for_capacity_inclusion(
                self.input,
                &source_delivery,
                s_edge.iter().copied(),
                self.t_rank,
                self.t_rank + 2,
            );
            self.t_is_reverse_valid = self.t_route.is_valid_addition_for_capacity_inclusion(
                self.input,
                &source_delivery,
                s_edge.iter().rev().copied(),
                self.t_rank,
                self.t_rank + 2,
            );

            valid = self.t_is_normal_valid || self.t_is_reverse_valid;
        }

        valid
    }

    fn compute_gain(&mut self) -> Gain {
        debug_assert!(self.gain_upper_bound_computed);

        // On each side the orientation with the bigger preliminary gain wins when it is
        // feasible, with the other feasible orientation as the fallback.
        debug_assert!(self.s_is_normal_valid || self.s_is_reverse_valid);
        if self.reversed_s_gain > self.normal_s_gain {
            if self.s_is_reverse_valid {
                self.stored_gain += self.reversed_s_gain;
                self.reverse_t_edge = true;
            } else {
                self.stored_gain += self.normal_s_gain;
            }
        } else if self.s_is_normal_valid {
            self.stored_gain += self.normal_s_gain;
        } else {
            self.stored_gain += self.reversed_s_gain;
            self.reverse_t_edge = true;
        }

        debug_assert!(self.t_is_normal_valid || self.t_is_reverse_valid);
        if self.reversed_t_gain > self.normal_t_gain {
            if self.t_is_reverse_valid {
                self.stored_gain += self.reversed_t_gain;
                self.reverse_s_edge = true;
            } else {
                self.stored_gain += self.normal_t_gain;
            }
        } else if self.t_is_normal_valid {
            self.stored_gain += self.normal_t_gain;
        } else {
            self.stored_gain += self.reversed_t_gain;
            self.reverse_s_edge = true;
        }

        self.gain_computed = true;

        self.stored_gain
    }

    fn apply(&mut self) {
        debug_assert!(self.gain_computed);

        std::mem::swap(&mut self.s_route.route[self.s_rank], &mut self.t_route.route[self.t_rank]);
        std::mem::swap(&mut self.s_route.route[self.s_rank + 1], &mut self.t_route.route[self.t_rank + 1]);

        if self.reverse_s_edge {
            self.t_route.route.swap(self.t_rank, self.t_rank + 1);
        }
        if self.reverse_t_edge {
            self.s_route.route.swap(self.s_rank, self.s_rank + 1);
        }
    }

    fn addition_candidates(&self) -> Vec<usize> {
        vec![self.s_vehicle, self.t_vehicle]
    }

    fn update_candidates(&self) -> Vec<usize> {
        vec![self.s_vehicle, self.t_vehicle]
    }
}
