use std::collections::HashSet;

use anyhow::{Result, bail};

use super::model::Car;

// ---------------------------------------------------------------------------
// CarSource – the data provider injected into the selection store
// ---------------------------------------------------------------------------

/// Read-only access to the full pool of cars.
pub trait CarSource {
    /// Every car, in fixture order.
    fn cars(&self) -> &[Car];

    /// Look up a car by identifier.
    fn find(&self, id: &str) -> Option<&Car> {
        self.cars().iter().find(|car| car.id == id)
    }

    fn len(&self) -> usize {
        self.cars().len()
    }

    fn is_empty(&self) -> bool {
        self.cars().is_empty()
    }
}

// ---------------------------------------------------------------------------
// CarPool – in-memory pool with unique ids
// ---------------------------------------------------------------------------

/// The complete loaded pool.  Identifiers are unique.
#[derive(Debug, Clone, Default)]
pub struct CarPool {
    cars: Vec<Car>,
}

impl CarPool {
    /// Build a pool, rejecting duplicate identifiers.
    pub fn from_cars(cars: Vec<Car>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cars.len());
        for car in &cars {
            if !seen.insert(car.id.as_str()) {
                bail!("Duplicate car id '{}'", car.id);
            }
        }
        Ok(CarPool { cars })
    }
}

impl CarSource for CarPool {
    fn cars(&self) -> &[Car] {
        &self.cars
    }
}
