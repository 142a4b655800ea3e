//! A crate with the optimization core of a solver for the
//! [`Vehicle Routing Problem`](https://en.wikipedia.org/wiki/Vehicle_routing_problem).
//!
//! # Key points
//!
//! Given a fleet of vehicles and a set of jobs with cargo amounts and optional time
//! windows, the crate assigns every job to at most one vehicle and produces, per
//! vehicle, an ordered visit sequence which respects capacity and time-window
//! constraints while minimizing total travel cost. Two building blocks are provided:
//!
//! - constructive insertion heuristics ([`basic`] and [`dynamic_vehicle_choice`])
//!   which build an initial feasible solution from nothing;
//! - a local search operator framework ([`LocalOperator`]) with the cross-exchange
//!   operator, which swaps two-consecutive-job edges between two routes to reduce
//!   total cost.
//!
//! Problem parsing, matrix construction and the outer driver loop which chains the
//! two phases belong to the calling code: the crate consumes an immutable [`Input`]
//! with an injected read-only cost matrix.
//!
//! [`basic`]: crate::construction::heuristics::basic
//! [`dynamic_vehicle_choice`]: crate::construction::heuristics::dynamic_vehicle_choice
//! [`LocalOperator`]: crate::solver::search::local::LocalOperator
//! [`Input`]: crate::models::Input
//!
//! # Examples
//!
//! Build an initial capacity-only solution for three delivery jobs on a line:
//!
//! ```
//! use vrp_kernel::prelude::*;
//!
//! let matrix = CostMatrix::from_fn(4, |from, to| from.abs_diff(to) as Cost);
//! let jobs = (1..4)
//!     .map(|location| Job {
//!         location,
//!         service: 0,
//!         pickup: Amount::new(vec![0]),
//!         delivery: Amount::new(vec![1]),
//!         skills: Skills::default(),
//!         tws: vec![TimeWindow::max()],
//!     })
//!     .collect();
//! let vehicles = vec![Vehicle {
//!     capacity: Amount::new(vec![3]),
//!     skills: Skills::default(),
//!     tw: TimeWindow::max(),
//!     start: Some(0),
//!     end: Some(0),
//! }];
//! let input = Input::new(jobs, vehicles, matrix)?;
//!
//! let solution: RawSolution = construct(&input, Strategy::Basic, Init::Nearest, 0.);
//!
//! assert!(solution.unassigned.is_empty());
//! assert_eq!(solution.total_cost(&input), 6);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod prelude;

pub mod construction;
pub mod models;
pub mod solver;
