//! # Property-Based Tests
//!
//! Pagination, filtering and ordering invariants of the query pipeline.

use pokedex_core::{
    CaptureSet, CreatureRecord, Dataset, PageResult, Query, SortField, SortOrder,
};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::BTreeSet;

const TYPES: [&str; 5] = ["Fire", "Water", "Grass", "Flying", "Poison"];

/// Build a dataset with unique numbers and names from generated type indices.
fn build_dataset(specs: &[(usize, Option<usize>)]) -> Dataset {
    let records = specs
        .iter()
        .enumerate()
        .map(|(i, (t1, t2))| {
            let mut record = CreatureRecord::new(
                (i as u32 * 7) % 1009 + 1,
                format!("Mon{:04}", (i * 13) % 10007),
                TYPES[*t1],
                t2.map(|t| TYPES[t]),
            );
            record.speed = (i as u32 * 31) % 17;
            record
        })
        .collect();
    Dataset::from_records(records).expect("unique identifiers")
}

fn record_specs() -> impl Strategy<Value = Vec<(usize, Option<usize>)>> {
    vec((0usize..TYPES.len(), proptest::option::of(0usize..TYPES.len())), 0..80)
}

fn run(dataset: &Dataset, query: &Query) -> PageResult {
    query.execute(dataset, &CaptureSet::new())
}

proptest! {
    /// A page never holds more than page_size records.
    #[test]
    fn page_never_exceeds_page_size(
        specs in record_specs(),
        page in 1i64..20,
        page_size in 1i64..30,
    ) {
        let dataset = build_dataset(&specs);
        let query = Query::new()
            .with_page(page).expect("page")
            .with_page_size(page_size).expect("size");
        let result = run(&dataset, &query);
        prop_assert!(result.pokemon.len() <= page_size as usize);
    }

    /// Walking every page visits each filtered record exactly once.
    #[test]
    fn page_walk_covers_total(
        specs in record_specs(),
        page_size in 1i64..15,
    ) {
        let dataset = build_dataset(&specs);
        let first = run(&dataset, &Query::new().with_page_size(page_size).expect("size"));

        let mut seen = BTreeSet::new();
        let mut count = 0usize;
        for page in 1..=first.total_pages.max(1) {
            let query = Query::new()
                .with_page(page as i64).expect("page")
                .with_page_size(page_size).expect("size");
            for item in run(&dataset, &query).pokemon {
                seen.insert(item.record.number);
                count += 1;
            }
        }

        prop_assert_eq!(count, first.total);
        prop_assert_eq!(seen.len(), first.total);
    }

    /// total_pages is the ceiling of total / page_size.
    #[test]
    fn total_pages_is_ceiling(
        specs in record_specs(),
        page_size in 1i64..25,
    ) {
        let dataset = build_dataset(&specs);
        let result = run(&dataset, &Query::new().with_page_size(page_size).expect("size"));
        let size = page_size as usize;
        prop_assert_eq!(result.total_pages, (result.total + size - 1) / size);
        if result.total == 0 {
            prop_assert_eq!(result.total_pages, 0);
        }
    }

    /// The type filter keeps exactly the records carrying that type.
    #[test]
    fn type_filter_is_sound_and_complete(
        specs in record_specs(),
        t in 0usize..TYPES.len(),
    ) {
        let dataset = build_dataset(&specs);
        let query = Query::new().with_page_size(1000).expect("size").with_type(TYPES[t]);
        let result = run(&dataset, &query);

        for item in &result.pokemon {
            prop_assert!(item.record.has_type(TYPES[t]));
        }
        let expected = dataset.records().iter().filter(|r| r.has_type(TYPES[t])).count();
        prop_assert_eq!(result.total, expected);
    }

    /// Sorting by number ascending is non-decreasing across the whole set.
    #[test]
    fn number_sort_is_monotonic(specs in record_specs()) {
        let dataset = build_dataset(&specs);
        let result = run(&dataset, &Query::new().with_page_size(1000).expect("size"));
        let numbers: Vec<u32> = result.pokemon.iter().map(|p| p.record.number).collect();
        prop_assert!(numbers.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Descending is the reverse order of ascending for a column with ties.
    #[test]
    fn descending_speed_is_non_increasing(specs in record_specs()) {
        let dataset = build_dataset(&specs);
        let query = Query::new()
            .with_page_size(1000).expect("size")
            .sorted_by(SortField::Speed, SortOrder::Descending);
        let result = run(&dataset, &query);
        let speeds: Vec<u32> = result.pokemon.iter().map(|p| p.record.speed).collect();
        prop_assert!(speeds.windows(2).all(|w| w[0] >= w[1]));
    }

    /// Search is case-insensitive.
    #[test]
    fn search_ignores_case(specs in record_specs(), t in 0usize..TYPES.len()) {
        let dataset = build_dataset(&specs);
        let lower = run(&dataset, &Query::new().with_search(&TYPES[t].to_lowercase()));
        let upper = run(&dataset, &Query::new().with_search(&TYPES[t].to_uppercase()));
        prop_assert_eq!(lower.total, upper.total);
    }

    /// Capturing twice is observably the same as capturing once.
    #[test]
    fn capture_is_idempotent(names in vec("[A-Za-z]{1,12}", 1..20)) {
        let mut once = CaptureSet::new();
        let mut twice = CaptureSet::new();
        for name in &names {
            once.capture(name.as_str());
            twice.capture(name.as_str());
            twice.capture(name.as_str());
        }
        prop_assert_eq!(once.list(), twice.list());
    }
}

#[test]
fn absent_type_yields_empty_result() {
    let dataset = build_dataset(&[(0, None), (1, Some(2))]);
    let result = run(&dataset, &Query::new().with_type("Dragon"));
    assert_eq!(result.total, 0);
    assert_eq!(result.total_pages, 0);
    assert!(result.pokemon.is_empty());
}
