use crate::models::common::{Cost, Location};
use rosomaxa::utils::GenericResult;

/// A read-only square table of travel costs between locations.
#[derive(Clone, Debug)]
pub struct CostMatrix {
    size: usize,
    data: Vec<Cost>,
}

impl CostMatrix {
    /// Creates a matrix of the given size from row-major data.
    pub fn new(size: usize, data: Vec<Cost>) -> GenericResult<Self> {
        if data.len() != size * size {
            return Err(format!("cannot create matrix: expected {} costs, got {}", size * size, data.len()).into());
        }

        Ok(Self { size, data })
    }

    /// Creates a matrix of the given size with costs produced by the function.
    pub fn from_fn<F: Fn(Location, Location) -> Cost>(size: usize, costs: F) -> Self {
        let data = (0..size * size).map(|idx| costs(idx / size, idx % size)).collect();

        Self { size, data }
    }

    /// Returns travel cost from one location to another.
    pub fn cost(&self, from: Location, to: Location) -> Cost {
        self.data[from * self.size + to]
    }

    /// Returns the amount of locations covered by the matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}
