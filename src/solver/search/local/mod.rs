//! This module contains various local search operators.

use crate::models::common::Gain;

mod cross_exchange;
pub use self::cross_exchange::*;

/// Specifies behavior of a local search operator: a candidate move over two routes,
/// evaluated lazily and applied in place.
///
/// The protocol runs in stages: `gain_upper_bound` gives a cheap optimistic estimate
/// used to prune candidates, `is_valid` runs the full feasibility checks, and only then
/// may `compute_gain` commit the gain of the best feasible variant. `apply` requires a
/// committed gain. After `apply`, the derived state of every vehicle returned by
/// `update_candidates` must be refreshed by the caller.
pub trait LocalOperator {
    /// Returns a quick, possibly optimistic, estimate of the achievable gain over all
    /// variants of the move. Computable without any feasibility checking.
    fn gain_upper_bound(&mut self) -> Gain;

    /// Runs full feasibility checks and records which variants of the move are
    /// admissible. Returns true when at least one is.
    fn is_valid(&mut self) -> bool;

    /// Commits the actual gain of the best feasible variant. Must only be called after
    /// `gain_upper_bound` and a successful `is_valid`.
    fn compute_gain(&mut self) -> Gain;

    /// Mutates both routes in place. Must only be called after `compute_gain`.
    fn apply(&mut self);

    /// Returns ranks of vehicles which could take over unassigned jobs after the move.
    fn addition_candidates(&self) -> Vec<usize>;

    /// Returns ranks of vehicles whose derived state must be refreshed after `apply`.
    fn update_candidates(&self) -> Vec<usize>;
}
