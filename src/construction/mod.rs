//! This module contains building blocks for constructive heuristics.
//!
//! # Insertion heuristic
//!
//! Insertion heuristic is a popular method to find quickly a **feasible** solution, but
//! without a guarantee of good quality. Essentially, it constructs the solution by
//! repeatedly inserting an unrouted job into a partially constructed route, subject to
//! capacity and time-window feasibility.

pub mod heuristics;
