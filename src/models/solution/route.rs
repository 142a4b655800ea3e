#[cfg(test)]
#[path = "../../../tests/unit/models/solution/route_test.rs"]
mod route_test;

use crate::models::common::Amount;
use crate::models::Input;

/// A route state contract shared by the capacity-only and the time-window aware variants.
///
/// All `is_valid_addition_*` methods are pure queries: they never mutate the route and
/// report infeasibility as `false`. `add` must only be called after the corresponding
/// validity checks returned true.
pub trait RouteState {
    /// Creates an empty route owned by the given vehicle.
    fn new(input: &Input, vehicle_rank: usize) -> Self;

    /// Returns the rank of the vehicle owning this route.
    fn vehicle_rank(&self) -> usize;

    /// Returns job ranks in visit order.
    fn route(&self) -> &[usize];

    /// Returns the current number of jobs in the route.
    fn size(&self) -> usize {
        self.route().len()
    }

    /// Inserts the job at the given position, `0 <= position <= size`.
    fn add(&mut self, input: &Input, job_rank: usize, position: usize);

    /// Refreshes cached pickup and delivery cumulatives after route changes.
    fn update_amounts(&mut self, input: &Input);

    /// Checks whether inserting a hypothetical job with the given amounts at `position`
    /// keeps the route capacity-feasible.
    fn is_valid_addition_for_capacity(&self, input: &Input, pickup: &Amount, delivery: &Amount, position: usize)
        -> bool;

    /// Checks whether replacing the range `[first, last)` of the route with a segment of
    /// the given total amounts keeps all loads outside the segment within capacity.
    fn is_valid_addition_for_capacity_margins(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        first: usize,
        last: usize,
    ) -> bool;

    /// Checks whether replacing the range `[first, last)` of the route with the segment
    /// given as an iterator of job ranks keeps the running load within capacity at every
    /// stop inside the segment. The iterator may yield the segment in any direction.
    fn is_valid_addition_for_capacity_inclusion<I>(
        &self,
        input: &Input,
        delivery: &Amount,
        segment: I,
        first: usize,
        last: usize,
    ) -> bool
    where
        I: Iterator<Item = usize>;

    /// Checks whether an admissible schedule exists after inserting the job at `position`.
    fn is_valid_addition_for_tw(&self, input: &Input, job_rank: usize, position: usize) -> bool;
}

/// A capacity-only route state for a single vehicle.
///
/// Beside the visit sequence itself, it holds load cumulatives and their running peaks,
/// so capacity feasibility of additions and segment replacements is answered from
/// precomputed margins instead of a full scan.
#[derive(Clone, Debug)]
pub struct RawRoute {
    /// Job ranks in visit order.
    pub route: Vec<usize>,

    /// Rank of the vehicle owning this route.
    pub vehicle_rank: usize,

    // current_loads[i] is the load on the edge entering stop i: deliveries still on
    // board for stops [i, n) plus pickups collected at stops [0, i). Index n is the
    // load after the last stop.
    current_loads: Vec<Amount>,
    // fwd_pickups[i]: pickups collected at stops [0, i).
    fwd_pickups: Vec<Amount>,
    // bwd_deliveries[i]: deliveries still due at stops [i, n).
    bwd_deliveries: Vec<Amount>,
    // Componentwise maxima of current_loads over [0, i] and [i, n].
    fwd_peaks: Vec<Amount>,
    bwd_peaks: Vec<Amount>,
}

impl RawRoute {
    /// Returns the total pickup of stops in the range `[first, last)`.
    pub(crate) fn pickup_in_range(&self, first: usize, last: usize) -> Amount {
        self.fwd_pickups[last] - self.fwd_pickups[first]
    }

    /// Returns the total delivery of stops in the range `[first, last)`.
    pub(crate) fn delivery_in_range(&self, first: usize, last: usize) -> Amount {
        self.bwd_deliveries[first] - self.bwd_deliveries[last]
    }
}

impl RouteState for RawRoute {
    fn new(input: &Input, vehicle_rank: usize) -> Self {
        let mut route = Self {
            route: Vec::new(),
            vehicle_rank,
            current_loads: Vec::new(),
            fwd_pickups: Vec::new(),
            bwd_deliveries: Vec::new(),
            fwd_peaks: Vec::new(),
            bwd_peaks: Vec::new(),
        };
        route.update_amounts(input);

        route
    }

    fn vehicle_rank(&self) -> usize {
        self.vehicle_rank
    }

    fn route(&self) -> &[usize] {
        self.route.as_slice()
    }

    fn add(&mut self, input: &Input, job_rank: usize, position: usize) {
        debug_assert!(position <= self.route.len());
        debug_assert!(job_rank < input.jobs.len());

        self.route.insert(position, job_rank);
    }

    fn update_amounts(&mut self, input: &Input) {
        let size = self.route.len();
        let zero = input.zero_amount();

        let mut fwd_pickups = vec![zero; size + 1];
        for (idx, &job_rank) in self.route.iter().enumerate() {
            fwd_pickups[idx + 1] = fwd_pickups[idx] + input.jobs[job_rank].pickup;
        }

        let mut bwd_deliveries = vec![zero; size + 1];
        for (idx, &job_rank) in self.route.iter().enumerate().rev() {
            bwd_deliveries[idx] = bwd_deliveries[idx + 1] + input.jobs[job_rank].delivery;
        }

        let current_loads: Vec<_> =
            fwd_pickups.iter().zip(bwd_deliveries.iter()).map(|(pickup, delivery)| *pickup + *delivery).collect();

        let mut fwd_peaks = current_loads.clone();
        for idx in 1..=size {
            fwd_peaks[idx] = fwd_peaks[idx - 1].max(&fwd_peaks[idx]);
        }

        let mut bwd_peaks = current_loads.clone();
        for idx in (0..size).rev() {
            bwd_peaks[idx] = bwd_peaks[idx].max(&bwd_peaks[idx + 1]);
        }

        self.fwd_pickups = fwd_pickups;
        self.bwd_deliveries = bwd_deliveries;
        self.current_loads = current_loads;
        self.fwd_peaks = fwd_peaks;
        self.bwd_peaks = bwd_peaks;
    }

    fn is_valid_addition_for_capacity(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        position: usize,
    ) -> bool {
        debug_assert!(position <= self.route.len());

        let capacity = &input.vehicles[self.vehicle_rank].capacity;

        // The extra delivery is carried from the start up to the insertion point, the
        // extra pickup from the insertion point onwards.
        capacity.can_fit(&(self.fwd_peaks[position] + *delivery))
            && capacity.can_fit(&(self.bwd_peaks[position] + *pickup))
    }

    fn is_valid_addition_for_capacity_margins(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        first: usize,
        last: usize,
    ) -> bool {
        debug_assert!(first <= last);
        debug_assert!(last <= self.route.len());

        let capacity = input.vehicles[self.vehicle_rank].capacity;

        (capacity + self.delivery_in_range(first, last)).can_fit(&(self.fwd_peaks[first] + *delivery))
            && (capacity + self.pickup_in_range(first, last)).can_fit(&(self.bwd_peaks[last] + *pickup))
    }

    fn is_valid_addition_for_capacity_inclusion<I>(
        &self,
        input: &Input,
        delivery: &Amount,
        segment: I,
        first: usize,
        last: usize,
    ) -> bool
    where
        I: Iterator<Item = usize>,
    {
        debug_assert!(first <= last);
        debug_assert!(last <= self.route.len());

        let capacity = &input.vehicles[self.vehicle_rank].capacity;

        let mut current_load = self.current_loads[first] + *delivery - self.delivery_in_range(first, last);
        if !capacity.can_fit(&current_load) {
            return false;
        }

        for job_rank in segment {
            let job = &input.jobs[job_rank];
            current_load = current_load + job.pickup - job.delivery;
            if !capacity.can_fit(&current_load) {
                return false;
            }
        }

        true
    }

    fn is_valid_addition_for_tw(&self, _input: &Input, _job_rank: usize, _position: usize) -> bool {
        true
    }
}
