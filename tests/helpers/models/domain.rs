use crate::models::problem::{CostMatrix, Job, Vehicle};
use crate::models::Input;

pub fn test_input(jobs: Vec<Job>, vehicles: Vec<Vehicle>, matrix: CostMatrix) -> Input {
    Input::new(jobs, vehicles, matrix).expect("cannot create test input")
}
