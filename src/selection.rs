use crate::data::filter::{CandidateFilter, filter_candidates};
use crate::data::model::Car;
use crate::data::pool::CarSource;
use crate::error::{SelectionError, SelectionResult};

// ---------------------------------------------------------------------------
// Selection store: which cars are charted, which are candidates
// ---------------------------------------------------------------------------

/// Outcome of a selection mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Nothing changed (already selected / not selected).
    Unchanged,
    /// The selection changed and still holds at least one car.
    Updated,
    /// The last selected car was removed.  Not an error: the chart goes blank.
    Emptied,
}

impl Change {
    pub fn is_mutation(self) -> bool {
        !matches!(self, Change::Unchanged)
    }
}

/// Owns the ordered list of selected cars over an injected pool.
///
/// Invariants: every selected car exists in the pool, no id is selected twice,
/// and candidates never contain a selected car.
#[derive(Debug, Clone)]
pub struct SelectionStore<S: CarSource> {
    source: S,
    selected: Vec<Car>,
    candidate_filter: CandidateFilter,
}

impl<S: CarSource> SelectionStore<S> {
    /// A store with nothing selected.
    pub fn new(source: S, candidate_filter: CandidateFilter) -> Self {
        SelectionStore {
            source,
            selected: Vec::new(),
            candidate_filter,
        }
    }

    /// A store with `initial` selected, in order.  Unknown ids are skipped.
    pub fn with_initial<I, T>(source: S, initial: I, candidate_filter: CandidateFilter) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut store = Self::new(source, candidate_filter);
        for id in initial {
            if let Err(e) = store.add(id.as_ref()) {
                log::warn!("Skipping initial selection: {e}");
            }
        }
        store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Selected cars in the order they were added.
    pub fn selected(&self) -> &[Car] {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|car| car.id == id)
    }

    pub fn candidate_filter(&self) -> CandidateFilter {
        self.candidate_filter
    }

    pub fn set_candidate_filter(&mut self, filter: CandidateFilter) {
        self.candidate_filter = filter;
    }

    /// Append the pool car `id` to the selection.
    pub fn add(&mut self, id: &str) -> SelectionResult<Change> {
        let car = self.source.find(id).ok_or_else(|| SelectionError::NotFound {
            id: id.to_string(),
        })?;
        if self.is_selected(id) {
            log::debug!("Car '{id}' already selected");
            return Ok(Change::Unchanged);
        }
        self.selected.push(car.clone());
        log::debug!("Selected car '{id}' ({} selected)", self.selected.len());
        Ok(Change::Updated)
    }

    /// Drop `id` from the selection.
    pub fn remove(&mut self, id: &str) -> SelectionResult<Change> {
        if self.source.find(id).is_none() {
            return Err(SelectionError::NotFound { id: id.to_string() });
        }
        let before = self.selected.len();
        self.selected.retain(|car| car.id != id);
        if self.selected.len() == before {
            return Ok(Change::Unchanged);
        }
        log::debug!("Removed car '{id}' ({} selected)", self.selected.len());
        if self.selected.is_empty() {
            log::warn!("Selection is empty; chart will be blank");
            Ok(Change::Emptied)
        } else {
            Ok(Change::Updated)
        }
    }

    /// Pool minus selection, narrowed by `search` and the candidate filter.
    pub fn filter_candidates(&self, search: &str) -> Vec<&Car> {
        filter_candidates(
            self.source.cars(),
            &self.selected,
            search,
            self.candidate_filter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::pool::CarPool;

    fn car(id: &str, model: &str) -> Car {
        Car {
            id: id.into(),
            brand: "datsun".into(),
            model: model.into(),
            origin: "japan".into(),
            year: 70,
            cylinder: Some(4.0),
            consumption: Some(27.0),
            acceleration: Some(14.5),
            displacement: Some(97.0),
            horsepower: Some(88.0),
            weight: Some(2130.0),
        }
    }

    fn store() -> SelectionStore<CarPool> {
        let pool = CarPool::from_cars(vec![car("a", "pl510"), car("b", "280-zx"), car("c", "b210")])
            .unwrap();
        SelectionStore::with_initial(pool, ["a"], CandidateFilter::default())
    }

    fn ids(cars: &[Car]) -> Vec<&str> {
        cars.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn add_appends_once() {
        let mut s = store();
        assert_eq!(s.add("c"), Ok(Change::Updated));
        assert_eq!(s.add("c"), Ok(Change::Unchanged));
        assert_eq!(ids(s.selected()), ["a", "c"]);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut s = store();
        assert_eq!(
            s.add("nope"),
            Err(SelectionError::NotFound { id: "nope".into() })
        );
        assert!(s.remove("nope").is_err());
        assert_eq!(ids(s.selected()), ["a"]);
    }

    #[test]
    fn removing_unselected_is_a_no_op() {
        let mut s = store();
        assert_eq!(s.remove("b"), Ok(Change::Unchanged));
        assert_eq!(ids(s.selected()), ["a"]);
    }

    #[test]
    fn removing_last_car_reports_emptied() {
        let mut s = store();
        assert_eq!(s.remove("a"), Ok(Change::Emptied));
        assert!(s.selected().is_empty());
        assert_eq!(s.filter_candidates("").len(), 3);
    }

    #[test]
    fn initial_selection_skips_unknown_and_duplicates() {
        let pool = CarPool::from_cars(vec![car("a", "pl510"), car("b", "280-zx")]).unwrap();
        let s = SelectionStore::with_initial(pool, ["b", "zz", "b", "a"], CandidateFilter::default());
        assert_eq!(ids(s.selected()), ["b", "a"]);
    }

    #[test]
    fn candidates_exclude_selection() {
        let s = store();
        let candidates: Vec<_> = s.filter_candidates("").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(candidates, ["b", "c"]);
        let hits: Vec<_> = s.filter_candidates("280").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(hits, ["b"]);
    }
}
