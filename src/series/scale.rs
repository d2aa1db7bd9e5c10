use crate::data::model::Category;

use super::builder::DataPoint;

// ---------------------------------------------------------------------------
// Per-category linear scale: [0, max] → [0, 1]
// ---------------------------------------------------------------------------

/// A linear mapping from `[0, max]` to `[0, 1]` for one category.
///
/// Inputs outside the domain are extrapolated, not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    max: Option<f64>,
}

impl Scale {
    pub fn new(max: Option<f64>) -> Self {
        Scale { max }
    }

    /// Upper end of the domain; `None` when the category had no values.
    pub fn domain_max(&self) -> Option<f64> {
        self.max
    }

    /// Whether the scale was built from at least one value.
    pub fn is_valid(&self) -> bool {
        self.max.is_some()
    }

    /// Map a raw value.
    ///
    /// Returns `NaN` when the scale has no domain.  A zero-width domain maps
    /// every input to the middle of the range.
    pub fn apply(&self, raw: f64) -> f64 {
        match self.max {
            None => f64::NAN,
            Some(max) if max == 0.0 => 0.5,
            Some(max) => raw / max,
        }
    }

    /// Map an optional value; missing values stay missing.
    pub fn apply_opt(&self, raw: Option<f64>) -> Option<f64> {
        raw.map(|v| self.apply(v))
    }
}

/// Build the scale for `category` from the points of that category.
/// Missing and `NaN` values are ignored when looking for the maximum.
pub fn compute_scale(points: &[DataPoint], category: Category) -> Scale {
    let max = points
        .iter()
        .filter(|p| p.category == category)
        .filter_map(|p| p.value)
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))));
    Scale::new(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: &str, category: Category, value: Option<f64>) -> DataPoint {
        DataPoint {
            id: id.into(),
            category,
            value,
            raw: value,
        }
    }

    #[test]
    fn scale_maps_max_to_one() {
        let points = vec![
            point("a", Category::Cylinder, Some(4.0)),
            point("b", Category::Cylinder, Some(8.0)),
            point("a", Category::Weight, Some(3000.0)),
        ];
        let scale = compute_scale(&points, Category::Cylinder);
        assert_eq!(scale.domain_max(), Some(8.0));
        assert_eq!(scale.apply(8.0), 1.0);
        assert_eq!(scale.apply(4.0), 0.5);
        assert_eq!(scale.apply(16.0), 2.0);
    }

    #[test]
    fn missing_values_are_ignored() {
        let points = vec![
            point("a", Category::Horsepower, None),
            point("b", Category::Horsepower, Some(100.0)),
            point("c", Category::Horsepower, Some(f64::NAN)),
        ];
        let scale = compute_scale(&points, Category::Horsepower);
        assert_eq!(scale.domain_max(), Some(100.0));
        assert_eq!(scale.apply_opt(None), None);
    }

    #[test]
    fn category_without_values_has_no_valid_scale() {
        let points = vec![point("a", Category::Horsepower, None)];
        let scale = compute_scale(&points, Category::Horsepower);
        assert!(!scale.is_valid());
        assert!(scale.apply(10.0).is_nan());
        assert!(!compute_scale(&[], Category::Weight).is_valid());
    }

    #[test]
    fn zero_width_domain_maps_to_middle() {
        let points = vec![point("a", Category::Cylinder, Some(0.0))];
        assert_eq!(compute_scale(&points, Category::Cylinder).apply(0.0), 0.5);
    }
}
