//! This module contains logic to improve a constructed solution.

pub mod search;
