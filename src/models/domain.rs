#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::models::common::{Amount, Location};
use crate::models::problem::{CostMatrix, Job, Vehicle};
use rosomaxa::utils::GenericResult;

/// Defines a VRP instance: jobs, vehicles and the travel cost matrix. Owned by the
/// driver and shared read-only with all components for the optimization's duration.
pub struct Input {
    /// All jobs.
    pub jobs: Vec<Job>,

    /// All vehicles.
    pub vehicles: Vec<Vehicle>,

    matrix: CostMatrix,

    amount_size: usize,
}

impl Input {
    /// Creates a new instance of `Input`, checking the problem definition for coherence.
    pub fn new(jobs: Vec<Job>, vehicles: Vec<Vehicle>, matrix: CostMatrix) -> GenericResult<Self> {
        let amount_size = vehicles.first().map(|v| v.capacity.size).ok_or("fleet must not be empty")?;

        if vehicles.iter().any(|vehicle| vehicle.capacity.size != amount_size) {
            return Err("all vehicle capacities must have the same dimensionality".into());
        }

        if jobs.iter().any(|job| job.pickup.size != amount_size || job.delivery.size != amount_size) {
            return Err("all job amounts must have the vehicle capacity dimensionality".into());
        }

        let locations = matrix.size();
        let job_locations = jobs.iter().map(|job| job.location);
        let vehicle_locations = vehicles.iter().flat_map(|vehicle| vehicle.start.iter().chain(vehicle.end.iter()).copied());
        if job_locations.chain(vehicle_locations).any(|location: Location| location >= locations) {
            return Err(format!("location outside of matrix bounds: matrix covers {locations} locations").into());
        }

        for (idx, job) in jobs.iter().enumerate() {
            if job.tws.is_empty() {
                return Err(format!("job {idx} has no time windows").into());
            }
            if job.tws.iter().any(|tw| tw.start > tw.end) {
                return Err(format!("job {idx} has a malformed time window").into());
            }
            if job.tws.windows(2).any(|pair| pair[0].end > pair[1].start) {
                return Err(format!("job {idx} has unordered or overlapping time windows").into());
            }
        }

        if vehicles.iter().any(|vehicle| vehicle.tw.start > vehicle.tw.end) {
            return Err("vehicle shift must be a well-formed time window".into());
        }

        Ok(Self { jobs, vehicles, matrix, amount_size })
    }

    /// Returns the travel cost matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Returns a zero amount of the problem's dimensionality.
    pub fn zero_amount(&self) -> Amount {
        Amount::zero(self.amount_size)
    }

    /// Checks whether the vehicle can serve the job: the job's required skills must be
    /// a subset of the skills provided by the vehicle.
    pub fn vehicle_ok_with_job(&self, vehicle_rank: usize, job_rank: usize) -> bool {
        self.jobs[job_rank].skills.is_subset(&self.vehicles[vehicle_rank].skills)
    }
}
