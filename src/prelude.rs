//! This module reimports commonly used types.

pub use crate::models::common::{Amount, Cost, Duration, Gain, Location, TimeWindow, Timestamp};
pub use crate::models::problem::{CostMatrix, Job, Skills, Vehicle};
pub use crate::models::solution::{RawRoute, RawSolution, RouteState, Solution, TwRoute, TwSolution};
pub use crate::models::Input;

pub use crate::construction::heuristics::{
    addition_cost, construct, route_cost_for_vehicle, Init, SolutionState, Strategy,
};

pub use crate::solver::search::local::{CrossExchange, LocalOperator};

// Reimport rosomaxa utils
pub use rosomaxa::utils::compare_floats;
pub use rosomaxa::utils::{GenericError, GenericResult};
