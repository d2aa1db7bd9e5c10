use super::model::Car;

// ---------------------------------------------------------------------------
// Candidate filtering: pool minus selection, narrowed by search text
// ---------------------------------------------------------------------------

/// Options that narrow the candidate list beyond the search text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateFilter {
    /// Hide cars that lack any attribute checked by [`Car::is_complete`].
    pub require_complete: bool,
}

/// Whether `car` matches `search`.
///
/// Matching is a case-insensitive substring test against `brand model`.
/// An empty search matches every car; whitespace is matched as typed.
pub fn matches_search(car: &Car, search: &str) -> bool {
    let needle = search.to_lowercase();
    needle.is_empty() || car.search_key().to_lowercase().contains(&needle)
}

/// Return the cars of `pool` that are not in `selected` and pass the search.
/// Pool order is preserved.
pub fn filter_candidates<'a>(
    pool: &'a [Car],
    selected: &[Car],
    search: &str,
    options: CandidateFilter,
) -> Vec<&'a Car> {
    pool.iter()
        .filter(|car| !selected.iter().any(|s| s.id == car.id))
        .filter(|car| !options.require_complete || car.is_complete())
        .filter(|car| matches_search(car, search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: &str, brand: &str, model: &str, horsepower: Option<f64>) -> Car {
        Car {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            origin: "usa".into(),
            year: 71,
            cylinder: Some(4.0),
            consumption: Some(25.0),
            acceleration: Some(19.0),
            displacement: Some(98.0),
            horsepower,
            weight: Some(2046.0),
        }
    }

    fn pool() -> Vec<Car> {
        vec![
            car("a", "ford", "pinto", None),
            car("b", "ford", "torino", Some(140.0)),
            car("c", "bmw", "2002", Some(113.0)),
        ]
    }

    #[test]
    fn selected_cars_are_excluded() {
        let pool = pool();
        let selected = vec![pool[1].clone()];
        let ids: Vec<_> = filter_candidates(&pool, &selected, "", CandidateFilter::default())
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let pool = pool();
        let hits = filter_candidates(&pool, &[], "FORD T", CandidateFilter::default());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn search_spans_brand_and_model() {
        let pool = pool();
        assert!(matches_search(&pool[2], "bmw 20"));
        assert!(!matches_search(&pool[2], "bmw torino"));
        assert!(matches_search(&pool[2], ""));
        assert!(!matches_search(&pool[2], "   "));
    }

    #[test]
    fn search_whitespace_is_not_trimmed() {
        let pool = pool();
        let hits = filter_candidates(&pool, &[], " ford", CandidateFilter::default());
        assert!(hits.is_empty());
        let hits = filter_candidates(&pool, &[], "ford ", CandidateFilter::default());
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn completeness_filter_hides_missing_values() {
        let pool = pool();
        let options = CandidateFilter {
            require_complete: true,
        };
        let ids: Vec<_> = filter_candidates(&pool, &[], "", options)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["b", "c"]);
    }
}
