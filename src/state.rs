use std::path::Path;

use eframe::egui::Color32;

use crate::color::{ColorMap, default_palette};
use crate::config::ViewerConfig;
use crate::data::model::Car;
use crate::data::pool::{CarPool, CarSource};
use crate::selection::{Change, SelectionStore};
use crate::series::{Series, build_series};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `series` and `color_map` are derived from the selection and rebuilt after
/// every mutation, before the next frame is drawn.
pub struct AppState {
    /// Selected cars over the loaded pool.
    pub store: SelectionStore<CarPool>,

    /// Chart data for the current selection (cached).
    pub series: Series,

    /// Line colours for the current selection.
    pub color_map: ColorMap,

    /// Text typed into the candidate search box.
    pub search_text: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    palette: Vec<Color32>,
    initial_selection: Vec<String>,
}

impl AppState {
    /// Build the state for `pool`, selecting the configured initial cars.
    pub fn new(pool: CarPool, config: &ViewerConfig) -> Self {
        let palette = config.colors().unwrap_or_else(|e| {
            log::warn!("Falling back to default palette: {e:#}");
            default_palette()
        });
        let store = SelectionStore::with_initial(
            pool,
            &config.initial_selection,
            config.candidate_filter(),
        );
        let mut state = Self {
            store,
            series: Series::default(),
            color_map: ColorMap::new(std::iter::empty(), &palette),
            search_text: String::new(),
            status_message: None,
            palette,
            initial_selection: config.initial_selection.clone(),
        };
        state.rederive();
        state
    }

    /// Recompute the chart series and colours from the selection.
    pub fn rederive(&mut self) {
        let selected = self.store.selected();
        self.series = build_series(selected);
        self.color_map = ColorMap::new(selected.iter().map(|c| c.id.as_str()), &self.palette);
    }

    /// Chart the car `id`.
    pub fn add_car(&mut self, id: &str) {
        match self.store.add(id) {
            Ok(change) => self.apply(change),
            Err(e) => {
                log::warn!("{e}");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Stop charting the car `id`.
    pub fn remove_car(&mut self, id: &str) {
        match self.store.remove(id) {
            Ok(change) => self.apply(change),
            Err(e) => {
                log::warn!("{e}");
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn apply(&mut self, change: Change) {
        if change.is_mutation() {
            self.status_message = None;
            self.rederive();
        }
    }

    /// Candidates for the list panel, filtered by the current search text.
    pub fn candidates(&self) -> Vec<&Car> {
        self.store.filter_candidates(&self.search_text)
    }

    /// Swap in a newly loaded pool, re-applying the initial selection.
    pub fn set_pool(&mut self, pool: CarPool) {
        let filter = self.store.candidate_filter();
        self.store = SelectionStore::with_initial(pool, &self.initial_selection, filter);
        self.search_text.clear();
        self.status_message = None;
        self.rederive();
    }

    /// Load a pool from disk, reporting failures in the status line.
    pub fn load_path(&mut self, path: &Path) {
        match crate::data::loader::load_file(path) {
            Ok(pool) => {
                log::info!("Loaded {} cars from {}", pool.len(), path.display());
                self.set_pool(pool);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixture::bundled_pool;
    use crate::data::model::Category;

    fn state() -> AppState {
        AppState::new(bundled_pool().unwrap(), &ViewerConfig::default())
    }

    #[test]
    fn initial_selection_is_charted() {
        let s = state();
        assert_eq!(s.store.selected().len(), 3);
        assert_eq!(s.series.groups.len(), 3);
        assert_eq!(s.series.points.len(), 18);
    }

    #[test]
    fn mutations_rederive_series_and_colors() {
        let mut s = state();
        s.add_car("car-02");
        assert_eq!(s.series.groups.len(), 4);
        assert_eq!(s.series.groups[3].id, "car-02");
        assert_ne!(s.color_map.color_for("car-02"), Color32::GRAY);

        s.remove_car("car-01");
        assert_eq!(s.series.groups.len(), 3);
        assert_eq!(s.color_map.color_for("car-01"), Color32::GRAY);
        // Colours follow the new selection order.
        assert_eq!(s.color_map.color_for("car-07"), s.palette[0]);
    }

    #[test]
    fn unknown_id_sets_status_and_keeps_series() {
        let mut s = state();
        let before = s.series.clone();
        s.add_car("car-404");
        assert_eq!(s.series, before);
        assert!(s.status_message.as_deref().unwrap().contains("car-404"));
    }

    #[test]
    fn emptying_selection_gives_blank_series() {
        let mut s = state();
        for id in ["car-01", "car-07", "car-13"] {
            s.remove_car(id);
        }
        assert!(s.series.is_empty());
        assert!(s.series.points.is_empty());
        assert!(s.series.hover_points(Category::Weight).is_empty());
    }

    #[test]
    fn search_narrows_candidates() {
        let mut s = state();
        let all = s.candidates().len();
        assert_eq!(all, s.store.source().len() - 3);
        s.search_text = "FORD".into();
        assert!(s.candidates().iter().all(|c| c.brand == "ford"));
        assert!(!s.candidates().is_empty());
    }

    #[test]
    fn new_pool_resets_selection() {
        let mut s = state();
        s.add_car("car-02");
        s.set_pool(bundled_pool().unwrap());
        assert_eq!(s.store.selected().len(), 3);
    }
}
