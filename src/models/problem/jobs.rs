use crate::models::common::{Amount, Duration, Location, TimeWindow, Timestamp};
use hashbrown::HashSet;

/// A set of skills required by a job or provided by a vehicle.
pub type Skills = HashSet<String>;

/// Represents a job: a single service visit with cargo amounts and time windows.
/// Jobs are immutable for the solver's lifetime.
#[derive(Clone, Debug)]
pub struct Job {
    /// Location index in the cost matrix.
    pub location: Location,

    /// Service duration at the job's location.
    pub service: Duration,

    /// Amount picked up at the job.
    pub pickup: Amount,

    /// Amount delivered to the job.
    pub delivery: Amount,

    /// Skills required to serve the job.
    pub skills: Skills,

    /// Time windows when service may start, in ascending order.
    pub tws: Vec<TimeWindow>,
}

impl Job {
    /// Returns the latest admissible service time over all time windows.
    pub fn deadline(&self) -> Timestamp {
        self.tws.last().map_or(Timestamp::MAX, |tw| tw.end)
    }
}
