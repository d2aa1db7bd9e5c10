use anyhow::{Context, Result};

use super::model::Car;
use super::pool::CarPool;

/// The vehicle table shipped with the binary.
const BUNDLED_CARS: &str = include_str!("../../assets/cars.json");

/// Cars selected when the viewer starts without a configured selection.
pub const DEFAULT_SELECTION: [&str; 3] = ["car-01", "car-07", "car-13"];

/// Parse the bundled fixture into a pool.
pub fn bundled_pool() -> Result<CarPool> {
    let cars: Vec<Car> =
        serde_json::from_str(BUNDLED_CARS).context("parsing bundled car fixture")?;
    CarPool::from_cars(cars).context("validating bundled car fixture")
}
