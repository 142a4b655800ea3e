mod domain;
pub use self::domain::*;

pub use self::problem::*;
