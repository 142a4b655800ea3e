#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/insertions_test.rs"]
mod insertions_test;

use crate::construction::heuristics::addition_cost;
use crate::models::common::{Cost, Timestamp};
use crate::models::problem::Vehicle;
use crate::models::solution::{RouteState, Solution};
use crate::models::Input;
use rosomaxa::utils::compare_floats;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Specifies the strategy used to build an initial solution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strategy {
    /// Fills vehicles one by one, ranked by descending capacity.
    Basic,
    /// Picks the vehicle to fill next dynamically and weighs insertions by regret.
    DynamicVehicleChoice,
}

/// Specifies the rule used to seed a route before the greedy insertion loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Init {
    /// No seed job: the greedy loop starts on an empty route.
    None,
    /// Seeds with the job carrying the highest pickup or delivery amount.
    HigherAmount,
    /// Seeds with the job whose last time window closes first.
    EarliestDeadline,
    /// Seeds with the job having the largest depot detour cost.
    Furthest,
    /// Seeds with the job having the smallest depot detour cost.
    Nearest,
}

/// Builds an initial solution with the given strategy, init rule and regret weight
/// `lambda`. Always terminates with a (possibly partial) solution: jobs which cannot
/// be inserted feasibly are reported in the solution's unassigned set.
pub fn construct<R: RouteState>(input: &Input, strategy: Strategy, init: Init, lambda: f64) -> Solution<R> {
    match strategy {
        Strategy::Basic => basic(input, init, lambda),
        Strategy::DynamicVehicleChoice => dynamic_vehicle_choice(input, init, lambda),
    }
}

/// Builds one route per vehicle, filling vehicles in the order of decreasing capacity.
///
/// The greedy insertion metric is `addition_cost - lambda * detour`, where `detour` is
/// the cost of serving the job alone in an empty route: penalizing far jobs less keeps
/// the greedy loop from leaving them unassigned.
pub fn basic<R: RouteState>(input: &Input, init: Init, lambda: f64) -> Solution<R> {
    let mut routes: Vec<R> = (0..input.vehicles.len()).map(|vehicle_rank| R::new(input, vehicle_rank)).collect();
    let mut unassigned: BTreeSet<usize> = (0..input.jobs.len()).collect();

    let mut vehicles_ranks: Vec<usize> = (0..input.vehicles.len()).collect();
    vehicles_ranks.sort_by(|&lhs, &rhs| compare_vehicles(&input.vehicles[lhs], &input.vehicles[rhs]));

    // costs[j] is the cost of serving job j alone in an empty route of the first
    // vehicle, consistent across vehicles in the homogeneous fleet case.
    let costs = empty_route_costs_for_vehicle(input, 0);

    for &vehicle_rank in &vehicles_ranks {
        if init != Init::None {
            let seed = find_init_job(
                input,
                &routes[vehicle_rank],
                &unassigned,
                init,
                vehicle_rank,
                |job_rank| costs[job_rank],
                |_| true,
            );
            if let Some(job_rank) = seed {
                let route = &mut routes[vehicle_rank];
                route.add(input, job_rank, 0);
                route.update_amounts(input);
                unassigned.remove(&job_rank);
            }
        }

        fill_route(input, &mut routes[vehicle_rank], &mut unassigned, vehicle_rank, lambda, |job_rank| {
            costs[job_rank]
        });
    }

    Solution { routes, unassigned }
}

/// Builds one route per vehicle, at each step filling the vehicle which is the unique
/// closest to the largest number of unassigned jobs.
///
/// The greedy insertion metric is `addition_cost - lambda * regret`, where the regret
/// of a job is the detour cost lost if the job is not given to its best-suited
/// remaining vehicle.
pub fn dynamic_vehicle_choice<R: RouteState>(input: &Input, init: Init, lambda: f64) -> Solution<R> {
    let mut routes: Vec<R> = (0..input.vehicles.len()).map(|vehicle_rank| R::new(input, vehicle_rank)).collect();
    let mut unassigned: BTreeSet<usize> = (0..input.jobs.len()).collect();

    let mut vehicles_ranks: Vec<usize> = (0..input.vehicles.len()).collect();

    let matrix = input.matrix();

    // costs[j][v] is the cost of serving job j alone in an empty route of vehicle v.
    let costs: Vec<Vec<Cost>> = input
        .jobs
        .iter()
        .map(|job| {
            input
                .vehicles
                .iter()
                .map(|vehicle| {
                    let mut cost = 0;
                    if let Some(start) = vehicle.start {
                        cost += matrix.cost(start, job.location);
                    }
                    if let Some(end) = vehicle.end {
                        cost += matrix.cost(job.location, end);
                    }
                    cost
                })
                .collect()
        })
        .collect();

    while !vehicles_ranks.is_empty() && !unassigned.is_empty() {
        // For any unassigned job, the min and the second min cost of serving it alone
        // by any remaining vehicle.
        let mut jobs_min_costs = vec![Cost::MAX; input.jobs.len()];
        let mut jobs_second_min_costs = vec![Cost::MAX; input.jobs.len()];
        for &job_rank in &unassigned {
            for &vehicle_rank in &vehicles_ranks {
                if costs[job_rank][vehicle_rank] <= jobs_min_costs[job_rank] {
                    jobs_second_min_costs[job_rank] = jobs_min_costs[job_rank];
                    jobs_min_costs[job_rank] = costs[job_rank][vehicle_rank];
                } else if costs[job_rank][vehicle_rank] < jobs_second_min_costs[job_rank] {
                    jobs_second_min_costs[job_rank] = costs[job_rank][vehicle_rank];
                }
            }
        }

        let mut closest_jobs_count = vec![0_usize; input.vehicles.len()];
        for &job_rank in &unassigned {
            for &vehicle_rank in &vehicles_ranks {
                if costs[job_rank][vehicle_rank] == jobs_min_costs[job_rank] {
                    closest_jobs_count[vehicle_rank] += 1;
                }
            }
        }

        // Pick the vehicle with the biggest number of jobs closest to it; the fold keeps
        // the earliest candidate on ties.
        let chosen_position = (1..vehicles_ranks.len()).fold(0, |best, candidate| {
            let (lhs, rhs) = (vehicles_ranks[candidate], vehicles_ranks[best]);
            let is_better = closest_jobs_count[lhs] > closest_jobs_count[rhs]
                || (closest_jobs_count[lhs] == closest_jobs_count[rhs]
                    && compare_vehicles(&input.vehicles[lhs], &input.vehicles[rhs]) == Ordering::Less);
            if is_better {
                candidate
            } else {
                best
            }
        });
        let vehicle_rank = vehicles_ranks.remove(chosen_position);

        // Once the vehicle is decided, the regret of a job is the min cost of serving it
        // alone by any other remaining vehicle. Jobs with no remaining alternative keep
        // the max sentinel, which makes the metric below prefer placing them now.
        let mut regrets = vec![Cost::MAX; input.jobs.len()];
        for &job_rank in &unassigned {
            regrets[job_rank] = if jobs_min_costs[job_rank] < costs[job_rank][vehicle_rank] {
                jobs_min_costs[job_rank]
            } else {
                jobs_second_min_costs[job_rank]
            };
        }

        if init != Init::None {
            // Restrict the seed to jobs for which the chosen vehicle is the closest one
            // among the remaining vehicles.
            let seed = find_init_job(
                input,
                &routes[vehicle_rank],
                &unassigned,
                init,
                vehicle_rank,
                |job_rank| costs[job_rank][vehicle_rank],
                |job_rank| jobs_min_costs[job_rank] >= costs[job_rank][vehicle_rank],
            );
            if let Some(job_rank) = seed {
                let route = &mut routes[vehicle_rank];
                route.add(input, job_rank, 0);
                route.update_amounts(input);
                unassigned.remove(&job_rank);
            }
        }

        fill_route(input, &mut routes[vehicle_rank], &mut unassigned, vehicle_rank, lambda, |job_rank| {
            regrets[job_rank]
        });
    }

    Solution { routes, unassigned }
}

/// Compares two vehicles for ranking purposes: higher capacity first with respect to
/// the partial order on amounts, then longer shift. Incomparable capacities map to
/// `Equal`, so a stable sort keeps their original relative order.
fn compare_vehicles(lhs: &Vehicle, rhs: &Vehicle) -> Ordering {
    match lhs.capacity.partial_cmp(&rhs.capacity) {
        Some(Ordering::Greater) => Ordering::Less,
        Some(Ordering::Less) => Ordering::Greater,
        Some(Ordering::Equal) => rhs.tw.duration().cmp(&lhs.tw.duration()),
        None => Ordering::Equal,
    }
}

/// Returns, for every job, the cost of serving it alone in an empty route of the given
/// vehicle: the depot-to-job and job-to-depot edges with absent depots dropped.
fn empty_route_costs_for_vehicle(input: &Input, vehicle_rank: usize) -> Vec<Cost> {
    let matrix = input.matrix();
    let vehicle = &input.vehicles[vehicle_rank];

    input
        .jobs
        .iter()
        .map(|job| {
            let mut cost = 0;
            if let Some(start) = vehicle.start {
                cost += matrix.cost(start, job.location);
            }
            if let Some(end) = vehicle.end {
                cost += matrix.cost(job.location, end);
            }
            cost
        })
        .collect()
}

/// Scans unassigned jobs for the best seed of an empty route according to the init
/// rule. Only jobs which are compatible, capacity- and time-window feasible at the
/// route start and accepted by `is_candidate` are considered. On ties the first job in
/// scan order wins.
fn find_init_job<R: RouteState>(
    input: &Input,
    route: &R,
    unassigned: &BTreeSet<usize>,
    init: Init,
    vehicle_rank: usize,
    job_cost: impl Fn(usize) -> Cost,
    is_candidate: impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut best_job_rank = None;

    let mut higher_amount = input.zero_amount();
    let mut furthest_cost = 0;
    let mut nearest_cost = Cost::MAX;
    let mut earliest_deadline = Timestamp::MAX;

    for &job_rank in unassigned {
        let job = &input.jobs[job_rank];
        if !is_candidate(job_rank)
            || !input.vehicle_ok_with_job(vehicle_rank, job_rank)
            || !route.is_valid_addition_for_capacity(input, &job.pickup, &job.delivery, 0)
            || !route.is_valid_addition_for_tw(input, job_rank, 0)
        {
            continue;
        }

        match init {
            Init::None => {}
            Init::HigherAmount => {
                if higher_amount < job.pickup {
                    higher_amount = job.pickup;
                    best_job_rank = Some(job_rank);
                }
                if higher_amount < job.delivery {
                    higher_amount = job.delivery;
                    best_job_rank = Some(job_rank);
                }
            }
            Init::EarliestDeadline => {
                if job.deadline() < earliest_deadline {
                    earliest_deadline = job.deadline();
                    best_job_rank = Some(job_rank);
                }
            }
            Init::Furthest => {
                if furthest_cost < job_cost(job_rank) {
                    furthest_cost = job_cost(job_rank);
                    best_job_rank = Some(job_rank);
                }
            }
            Init::Nearest => {
                if job_cost(job_rank) < nearest_cost {
                    nearest_cost = job_cost(job_rank);
                    best_job_rank = Some(job_rank);
                }
            }
        }
    }

    best_job_rank
}

/// Repeatedly inserts the unassigned job minimizing `addition_cost - lambda * priority`
/// over all feasible positions until no feasible insertion is left for this route.
fn fill_route<R: RouteState>(
    input: &Input,
    route: &mut R,
    unassigned: &mut BTreeSet<usize>,
    vehicle_rank: usize,
    lambda: f64,
    job_priority: impl Fn(usize) -> Cost,
) {
    let matrix = input.matrix();
    let vehicle = &input.vehicles[vehicle_rank];

    loop {
        let mut best: Option<(f64, usize, usize)> = None;

        for &job_rank in unassigned.iter() {
            if !input.vehicle_ok_with_job(vehicle_rank, job_rank) {
                continue;
            }
            let job = &input.jobs[job_rank];

            for position in 0..=route.size() {
                let current_add = addition_cost(input, matrix, job_rank, vehicle, route.route(), position) as f64;
                let current_cost = current_add - lambda * job_priority(job_rank) as f64;

                let is_better =
                    best.map_or(true, |(best_cost, _, _)| compare_floats(current_cost, best_cost) == Ordering::Less);
                if is_better
                    && route.is_valid_addition_for_capacity(input, &job.pickup, &job.delivery, position)
                    && route.is_valid_addition_for_tw(input, job_rank, position)
                {
                    best = Some((current_cost, job_rank, position));
                }
            }
        }

        match best {
            Some((_, job_rank, position)) => {
                route.add(input, job_rank, position);
                route.update_amounts(input);
                unassigned.remove(&job_rank);
            }
            None => break,
        }
    }
}
