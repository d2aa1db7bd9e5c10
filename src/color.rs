use std::str::FromStr;

use eframe::egui::Color32;
use indexmap::IndexMap;
use palette::Srgb;

use crate::error::ColorError;

/// Line colours, assigned in selection order.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#8884d8", "#82ca9d", "#e67f83", "#ffdc5e", "#457b9d", "#f8961e",
];

// ---------------------------------------------------------------------------
// Palette parsing
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` (or `#rgb`) into a colour.
pub fn parse_hex(value: &str) -> Result<Color32, ColorError> {
    let rgb = Srgb::<u8>::from_str(value.trim()).map_err(|_| ColorError::InvalidHex {
        value: value.to_string(),
    })?;
    Ok(Color32::from_rgb(rgb.red, rgb.green, rgb.blue))
}

/// Parse a whole palette.  Fails on the first bad entry or when empty.
pub fn parse_palette<S: AsRef<str>>(values: &[S]) -> Result<Vec<Color32>, ColorError> {
    if values.is_empty() {
        return Err(ColorError::EmptyPalette);
    }
    values.iter().map(|v| parse_hex(v.as_ref())).collect()
}

pub fn default_palette() -> Vec<Color32> {
    DEFAULT_PALETTE
        .iter()
        .filter_map(|hex| parse_hex(hex).ok())
        .collect()
}

// ---------------------------------------------------------------------------
// Ordinal colour mapping: car id → Color32
// ---------------------------------------------------------------------------

/// Maps car ids to palette colours in order of first appearance.
/// Wraps around when there are more ids than colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: IndexMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new<'a, I>(ids: I, palette: &[Color32]) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut mapping: IndexMap<String, Color32> = IndexMap::new();
        if !palette.is_empty() {
            for id in ids {
                let next = palette[mapping.len() % palette.len()];
                mapping.entry(id.to_string()).or_insert(next);
            }
        }
        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a car id.
    pub fn color_for(&self, id: &str) -> Color32 {
        self.mapping.get(id).copied().unwrap_or(self.default_color)
    }
}
