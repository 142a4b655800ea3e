//! Solution domain models.

mod route;
pub use self::route::*;

mod tw_route;
pub use self::tw_route::*;

use crate::construction::heuristics::route_cost_for_vehicle;
use crate::models::common::Cost;
use crate::models::Input;
use std::collections::BTreeSet;

/// A VRP solution: one route per vehicle plus the set of jobs left unassigned.
pub struct Solution<R: RouteState> {
    /// Routes indexed by vehicle rank.
    pub routes: Vec<R>,

    /// Ranks of unassigned jobs, in ascending order.
    pub unassigned: BTreeSet<usize>,
}

impl<R: RouteState> Solution<R> {
    /// Returns the total travel cost of all routes, recomputed from the matrix.
    pub fn total_cost(&self, input: &Input) -> Cost {
        self.routes.iter().map(|route| route_cost_for_vehicle(input, route.vehicle_rank(), route.route())).sum()
    }
}

/// A capacity-only solution.
pub type RawSolution = Solution<RawRoute>;

/// A time-window aware solution.
pub type TwSolution = Solution<TwRoute>;
