#[cfg(test)]
#[path = "../../../tests/unit/models/solution/tw_route_test.rs"]
mod tw_route_test;

use crate::models::common::{Amount, Location, Timestamp};
use crate::models::solution::{RawRoute, RouteState};
use crate::models::Input;

/// A time-window aware route state for a single vehicle.
///
/// On top of the capacity state it keeps a schedule envelope: for every stop, the
/// earliest and the latest admissible service start together with the chosen time
/// window. The envelope makes the insertion check local: only the candidate and its
/// direct neighbours are consulted.
///
/// Travel times are read from the same matrix as travel costs.
#[derive(Clone, Debug)]
pub struct TwRoute {
    /// Underlying capacity state.
    pub raw: RawRoute,

    v_start: Timestamp,
    v_end: Timestamp,

    earliest: Vec<Timestamp>,
    latest: Vec<Timestamp>,
    tw_ranks: Vec<usize>,
}

impl TwRoute {
    /// Returns the earliest service start the job can get when inserted at `position`,
    /// before clamping to its time windows.
    fn new_earliest_candidate(&self, input: &Input, job_rank: usize, position: usize) -> Timestamp {
        let vehicle = &input.vehicles[self.raw.vehicle_rank];
        let job_location = input.jobs[job_rank].location;

        let (previous_end, previous_location) = if position == 0 {
            (self.v_start, vehicle.start)
        } else {
            let previous = &input.jobs[self.raw.route[position - 1]];
            (self.earliest[position - 1] + previous.service, Some(previous.location))
        };

        previous_end + previous_location.map_or(0, |location| input.matrix().cost(location, job_location))
    }

    /// Returns the latest time the inserted job may occupy, derived from the successor's
    /// latest service start or the shift end. `None` when the successor is unreachable.
    fn next_latest_bound(&self, input: &Input, job_location: Location, position: usize) -> Option<Timestamp> {
        let vehicle = &input.vehicles[self.raw.vehicle_rank];

        if position == self.raw.route.len() {
            let travel = vehicle.end.map_or(0, |location| input.matrix().cost(job_location, location));
            self.v_end.checked_sub(travel)
        } else {
            let next = &input.jobs[self.raw.route[position]];
            self.latest[position].checked_sub(input.matrix().cost(job_location, next.location))
        }
    }

    /// Recomputes the schedule envelope: earliest service starts forward from the shift
    /// start, latest service starts backward from the shift end.
    fn update_schedule(&mut self, input: &Input) {
        let vehicle = &input.vehicles[self.raw.vehicle_rank];
        let size = self.raw.route.len();

        let mut earliest = Vec::with_capacity(size);
        let mut tw_ranks = Vec::with_capacity(size);
        let mut previous_end = self.v_start;
        let mut previous_location = vehicle.start;
        for &job_rank in &self.raw.route {
            let job = &input.jobs[job_rank];
            let arrival =
                previous_end + previous_location.map_or(0, |location| input.matrix().cost(location, job.location));

            // additions are validated beforehand, so an open window is expected here
            let tw_rank = job.tws.iter().position(|tw| arrival <= tw.end).unwrap_or(job.tws.len() - 1);
            let start = arrival.max(job.tws[tw_rank].start);

            earliest.push(start);
            tw_ranks.push(tw_rank);
            previous_end = start + job.service;
            previous_location = Some(job.location);
        }

        let mut latest = vec![0; size];
        let mut next_start = self.v_end;
        let mut next_location = vehicle.end;
        for idx in (0..size).rev() {
            let job = &input.jobs[self.raw.route[idx]];
            let travel = next_location.map_or(0, |location| input.matrix().cost(job.location, location));

            latest[idx] = next_start.saturating_sub(travel + job.service).min(job.tws[tw_ranks[idx]].end);
            next_start = latest[idx];
            next_location = Some(job.location);
        }

        debug_assert!(earliest.iter().zip(latest.iter()).all(|(e, l)| e <= l));

        self.earliest = earliest;
        self.latest = latest;
        self.tw_ranks = tw_ranks;
    }
}

impl RouteState for TwRoute {
    fn new(input: &Input, vehicle_rank: usize) -> Self {
        let vehicle = &input.vehicles[vehicle_rank];

        Self {
            raw: RawRoute::new(input, vehicle_rank),
            v_start: vehicle.tw.start,
            v_end: vehicle.tw.end,
            earliest: Vec::new(),
            latest: Vec::new(),
            tw_ranks: Vec::new(),
        }
    }

    fn vehicle_rank(&self) -> usize {
        self.raw.vehicle_rank
    }

    fn route(&self) -> &[usize] {
        self.raw.route.as_slice()
    }

    fn add(&mut self, input: &Input, job_rank: usize, position: usize) {
        self.raw.add(input, job_rank, position);
        self.update_schedule(input);
    }

    fn update_amounts(&mut self, input: &Input) {
        self.raw.update_amounts(input);
    }

    fn is_valid_addition_for_capacity(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        position: usize,
    ) -> bool {
        self.raw.is_valid_addition_for_capacity(input, pickup, delivery, position)
    }

    fn is_valid_addition_for_capacity_margins(
        &self,
        input: &Input,
        pickup: &Amount,
        delivery: &Amount,
        first: usize,
        last: usize,
    ) -> bool {
        self.raw.is_valid_addition_for_capacity_margins(input, pickup, delivery, first, last)
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
        self.raw.is_valid_addition_for_capacity_inclusion(input, delivery, segment, first, last)
    }

    fn is_valid_addition_for_tw(&self, input: &Input, job_rank: usize, position: usize) -> bool {
        debug_assert!(position <= self.raw.route.len());

        let job = &input.jobs[job_rank];

        let job_earliest = self.new_earliest_candidate(input, job_rank, position);
        let Some(tw) = job.tws.iter().find(|tw| job_earliest <= tw.end) else {
            return false;
        };
        let service_start = job_earliest.max(tw.start);

        self.next_latest_bound(input, job.location, position)
            .and_then(|bound| bound.checked_sub(job.service))
            .is_some_and(|latest_start| service_start <= latest_start)
    }
}
