use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_PALETTE, parse_palette};
use crate::data::filter::CandidateFilter;
use crate::data::fixture::DEFAULT_SELECTION;

/// Viewer settings, read from a JSON file.  Every field is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    /// Car ids charted at start-up.
    pub initial_selection: Vec<String>,
    /// Hex colours for the chart lines, assigned in selection order.
    pub palette: Vec<String>,
    /// Hide candidates with missing attributes.
    pub require_complete_records: bool,
    /// Dataset to load instead of the bundled fixture.
    pub data_path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 600.0,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            initial_selection: DEFAULT_SELECTION.iter().map(|s| s.to_string()).collect(),
            palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
            require_complete_records: false,
            data_path: None,
        }
    }
}

impl ViewerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading viewer config {}", path_ref.display()))?;
        let config: ViewerConfig = serde_json::from_str(&contents)
            .with_context(|| format!("parsing viewer config {}", path_ref.display()))?;
        config
            .colors()
            .with_context(|| format!("invalid palette in {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn colors(&self) -> anyhow::Result<Vec<Color32>> {
        Ok(parse_palette(&self.palette)?)
    }

    pub fn candidate_filter(&self) -> CandidateFilter {
        CandidateFilter {
            require_complete: self.require_complete_records,
        }
    }
}
