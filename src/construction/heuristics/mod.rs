//! Contains insertion heuristics and the evaluation logic they are built on.

mod context;
pub use self::context::*;

mod evaluators;
pub use self::evaluators::*;

mod insertions;
pub use self::insertions::*;
