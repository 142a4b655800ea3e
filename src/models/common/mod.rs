//! Common domain types.

mod amount;
pub use self::amount::*;

mod domain;
pub use self::domain::*;
