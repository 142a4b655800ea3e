use crate::models::common::{Amount, Location, TimeWindow};
use crate::models::problem::Skills;

/// Represents a vehicle. Vehicles are immutable for the solver's lifetime.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// Carrying capacity.
    pub capacity: Amount,

    /// Skills provided by the vehicle.
    pub skills: Skills,

    /// Vehicle shift: the time window when the vehicle operates.
    pub tw: TimeWindow,

    /// An optional start location.
    pub start: Option<Location>,

    /// An optional end location.
    pub end: Option<Location>,
}
