/// Chart data derivation: flatten selected cars, normalise per category,
/// group by car.  Pure functions only; recomputed after every selection change.

pub mod builder;
pub mod scale;

pub use builder::{DataPoint, Series, SeriesGroup, build_series, nearest_category};
pub use scale::{Scale, compute_scale};
