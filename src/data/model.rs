use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category – one of the six numeric attributes of a car
// ---------------------------------------------------------------------------

/// The fixed set of numeric attributes drawn on the chart.
///
/// The declaration order is the order of the x axis and the order of the
/// points inside every [`SeriesGroup`](crate::series::SeriesGroup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cylinder,
    Consumption,
    Acceleration,
    Displacement,
    Horsepower,
    Weight,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cylinder,
        Category::Consumption,
        Category::Acceleration,
        Category::Displacement,
        Category::Horsepower,
        Category::Weight,
    ];

    /// Axis label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Cylinder => "Cylinder",
            Category::Consumption => "Consumption",
            Category::Acceleration => "Acceleration",
            Category::Displacement => "Displacement",
            Category::Horsepower => "Horsepower",
            Category::Weight => "Weight",
        }
    }

    /// Unit suffix appended to raw values in tooltips.
    pub fn unit(self) -> &'static str {
        match self {
            Category::Cylinder => "",
            Category::Consumption => " mpg",
            Category::Acceleration => " s",
            Category::Displacement => " cu in",
            Category::Horsepower => " hp",
            Category::Weight => " lbs",
        }
    }

    /// Position on the x axis.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Format a raw value with its unit, e.g. `130 hp`.
    pub fn format_value(self, value: f64) -> String {
        format!("{value}{}", self.unit())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Car – one record of the pool
// ---------------------------------------------------------------------------

/// A single vehicle.  Any numeric attribute may be missing in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub origin: String,
    /// Two-digit model year (`70` means 1970).
    pub year: u16,
    #[serde(default)]
    pub cylinder: Option<f64>,
    #[serde(default)]
    pub consumption: Option<f64>,
    #[serde(default)]
    pub acceleration: Option<f64>,
    #[serde(default)]
    pub displacement: Option<f64>,
    #[serde(default)]
    pub horsepower: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl Car {
    /// Raw value of one attribute, `None` when the source lacks it.
    pub fn value(&self, category: Category) -> Option<f64> {
        match category {
            Category::Cylinder => self.cylinder,
            Category::Consumption => self.consumption,
            Category::Acceleration => self.acceleration,
            Category::Displacement => self.displacement,
            Category::Horsepower => self.horsepower,
            Category::Weight => self.weight,
        }
    }

    /// `brand model` as typed in the data, used for searching.
    pub fn search_key(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Capitalised `Brand Model` for lists and the legend.
    pub fn display_name(&self) -> String {
        capitalize(&self.search_key())
    }

    /// Secondary line, e.g. `USA (1970)`.
    pub fn info(&self) -> String {
        format!("{} (19{})", capitalize(&self.origin), self.year)
    }

    /// Whether every attribute shown in the candidate list is present.
    /// Cylinder count is not required.
    pub fn is_complete(&self) -> bool {
        [
            Category::Acceleration,
            Category::Consumption,
            Category::Displacement,
            Category::Horsepower,
            Category::Weight,
        ]
        .iter()
        .all(|&c| self.value(c).is_some_and(|v| v != 0.0))
    }
}

/// Capitalise every space-separated word.  Words of three letters or fewer are
/// assumed to be acronyms (`bmw`, `usa`) and upper-cased entirely.
pub fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            if word.chars().count() <= 3 {
                word.to_uppercase()
            } else {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
