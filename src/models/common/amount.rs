#[cfg(test)]
#[path = "../../../tests/unit/models/common/amount_test.rs"]
mod amount_test;

use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Sub};

const AMOUNT_DIMENSION_SIZE: usize = 8;

/// Represents a cargo amount measured in one or more units, e.g. boxes, liters, kilograms.
///
/// Amounts of different dimensionality are compared with the missing components assumed zero.
/// Note that the order on amounts is partial: `partial_cmp` returns `None` for a pair where
/// one amount has a bigger value in one unit, but a smaller value in another.
#[derive(Clone, Copy, Debug)]
pub struct Amount {
    /// Amount data.
    pub values: [i64; AMOUNT_DIMENSION_SIZE],
    /// Actual used size.
    pub size: usize,
}

impl Amount {
    /// Creates a new instance of `Amount`.
    pub fn new(data: Vec<i64>) -> Self {
        assert!(data.len() <= AMOUNT_DIMENSION_SIZE);

        let mut values = [0; AMOUNT_DIMENSION_SIZE];
        for (idx, value) in data.iter().enumerate() {
            values[idx] = *value;
        }

        Self { values, size: data.len() }
    }

    /// Creates a zero amount of the given dimensionality.
    pub fn zero(size: usize) -> Self {
        assert!(size <= AMOUNT_DIMENSION_SIZE);

        Self { values: [0; AMOUNT_DIMENSION_SIZE], size }
    }

    fn get(&self, idx: usize) -> i64 {
        self.values[idx]
    }

    /// Returns true if `other` fits into this amount in every component. Used to check
    /// whether a load can be carried by a vehicle of this capacity.
    pub fn can_fit(&self, other: &Self) -> bool {
        self.values.iter().zip(other.values.iter()).all(|(a, b)| a >= b)
    }

    /// Returns the componentwise maximum of two amounts.
    pub fn max(&self, other: &Self) -> Self {
        let mut result = *self;
        result.values.iter_mut().zip(other.values.iter()).for_each(|(a, b)| *a = (*a).max(*b));
        result.size = self.size.max(other.size);

        result
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self { values: [0; AMOUNT_DIMENSION_SIZE], size: 0 }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut result = self;

        for (idx, value) in rhs.values.iter().enumerate() {
            result.values[idx] += *value;
        }
        result.size = result.size.max(rhs.size);

        result
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self;

        for (idx, value) in rhs.values.iter().enumerate() {
            result.values[idx] -= *value;
        }
        result.size = result.size.max(rhs.size);

        result
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let size = self.size.max(other.size);
        let (mut has_less, mut has_greater) = (false, false);

        for idx in 0..size {
            match self.get(idx).cmp(&other.get(idx)) {
                Ordering::Less => has_less = true,
                Ordering::Greater => has_greater = true,
                Ordering::Equal => {}
            }
        }

        match (has_less, has_greater) {
            (false, false) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (true, true) => None,
        }
    }
}

impl Eq for Amount {}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::default(), |acc, item| item + acc)
    }
}
