use indexmap::IndexMap;

use crate::data::model::{Car, Category};

use super::scale::{Scale, compute_scale};

// ---------------------------------------------------------------------------
// DataPoint / SeriesGroup – chart-ready projections of the selected cars
// ---------------------------------------------------------------------------

/// One attribute of one car.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub id: String,
    pub category: Category,
    /// Normalised value in `[0, 1]`; `None` when the car lacks the attribute.
    pub value: Option<f64>,
    /// Value as found in the source data, for tooltips.
    pub raw: Option<f64>,
}

/// All points of one car, in [`Category::ALL`] order.  Drawn as one line.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup {
    pub id: String,
    pub points: Vec<DataPoint>,
}

/// The derived chart data for one selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// Flat list: six points per car, cars in selection order.
    pub points: Vec<DataPoint>,
    /// Points grouped by car id, in first-appearance order.
    pub groups: Vec<SeriesGroup>,
}

/// Flatten `cars` into points, normalise each category over all of them,
/// and group the result by car.
pub fn build_series(cars: &[Car]) -> Series {
    let mut points: Vec<DataPoint> = cars
        .iter()
        .flat_map(|car| {
            Category::ALL.iter().map(move |&category| {
                let raw = car.value(category);
                DataPoint {
                    id: car.id.clone(),
                    category,
                    value: raw,
                    raw,
                }
            })
        })
        .collect();

    let scales: [Scale; 6] = Category::ALL.map(|category| compute_scale(&points, category));
    for point in &mut points {
        point.value = scales[point.category.index()].apply_opt(point.value);
    }

    let mut grouped: IndexMap<String, Vec<DataPoint>> = IndexMap::with_capacity(cars.len());
    for point in &points {
        grouped
            .entry(point.id.clone())
            .or_default()
            .push(point.clone());
    }
    let groups = grouped
        .into_iter()
        .map(|(id, points)| SeriesGroup { id, points })
        .collect();

    Series { points, groups }
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The point of group `group` at x position `category`.
    pub fn point_at(&self, group: usize, category: Category) -> Option<&DataPoint> {
        self.groups.get(group)?.points.get(category.index())
    }

    /// Points of every group at `category` that have a value, for hover
    /// markers.  Missing values produce no entry.
    pub fn hover_points(&self, category: Category) -> Vec<&DataPoint> {
        (0..self.groups.len())
            .filter_map(|g| self.point_at(g, category))
            .filter(|p| p.value.is_some())
            .collect()
    }
}

/// Snap a plot x coordinate to the nearest category.
pub fn nearest_category(x: f64) -> Option<Category> {
    if !x.is_finite() {
        return None;
    }
    let last = (Category::ALL.len() - 1) as f64;
    Category::from_index(x.round().clamp(0.0, last) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: &str, cylinder: Option<f64>, horsepower: Option<f64>) -> Car {
        Car {
            id: id.into(),
            brand: "ford".into(),
            model: id.into(),
            origin: "usa".into(),
            year: 70,
            cylinder,
            consumption: Some(20.0),
            acceleration: Some(12.0),
            displacement: Some(300.0),
            horsepower,
            weight: Some(3000.0),
        }
    }

    #[test]
    fn six_points_per_car_in_category_order() {
        let series = build_series(&[car("a", Some(4.0), Some(90.0)), car("b", Some(8.0), None)]);
        assert_eq!(series.points.len(), 12);
        assert_eq!(series.groups.len(), 2);
        for group in &series.groups {
            let categories: Vec<_> = group.points.iter().map(|p| p.category).collect();
            assert_eq!(categories, Category::ALL);
        }
    }

    #[test]
    fn groups_keep_selection_order() {
        let series = build_series(&[car("z", None, None), car("a", None, None)]);
        let ids: Vec<_> = series.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, ["z", "a"]);
    }

    #[test]
    fn missing_values_pass_through() {
        let series = build_series(&[car("a", Some(4.0), None), car("b", Some(8.0), Some(150.0))]);
        let a_hp = series.point_at(0, Category::Horsepower).unwrap();
        assert_eq!(a_hp.value, None);
        assert_eq!(a_hp.raw, None);
        let b_hp = series.point_at(1, Category::Horsepower).unwrap();
        assert_eq!(b_hp.value, Some(1.0));
        assert_eq!(b_hp.raw, Some(150.0));
    }

    #[test]
    fn hover_skips_missing_points() {
        let series = build_series(&[car("a", Some(4.0), None), car("b", Some(8.0), Some(150.0))]);
        let ids: Vec<_> = series
            .hover_points(Category::Horsepower)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["b"]);
        assert_eq!(series.hover_points(Category::Cylinder).len(), 2);
    }

    #[test]
    fn empty_input_gives_empty_series() {
        let series = build_series(&[]);
        assert!(series.is_empty());
        assert!(series.points.is_empty());
        assert!(series.hover_points(Category::Weight).is_empty());
    }

    #[test]
    fn nearest_category_rounds_and_clamps() {
        assert_eq!(nearest_category(0.4), Some(Category::Cylinder));
        assert_eq!(nearest_category(1.6), Some(Category::Acceleration));
        assert_eq!(nearest_category(-3.0), Some(Category::Cylinder));
        assert_eq!(nearest_category(42.0), Some(Category::Weight));
        assert_eq!(nearest_category(f64::NAN), None);
    }
}
