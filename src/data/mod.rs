/// Data layer: core types, the bundled fixture, loading, and candidate filtering.
///
/// Architecture:
/// ```text
///  bundled cars.json        .json / .csv / .parquet
///        │                          │
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │ fixture  │              │  loader  │
///   └──────────┘              └──────────┘
///        │                          │
///        └────────────┬─────────────┘
///                     ▼
///              ┌─────────────┐
///              │   CarPool   │  Vec<Car>, unique ids (CarSource)
///              └─────────────┘
///                     │
///                     ▼
///              ┌─────────────┐
///              │   filter    │  pool − selected, search text → candidates
///              └─────────────┘
/// ```

pub mod filter;
pub mod fixture;
pub mod loader;
pub mod model;
pub mod pool;
