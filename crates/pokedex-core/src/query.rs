//! # Query Module
//!
//! The catalog query pipeline. Stages, in order:
//!
//! 1. Type filter: keep records whose primary or secondary type equals the filter
//! 2. Search: case-insensitive substring over name, number and type tags,
//!    applied to what the type filter kept
//! 3. Stable sort on a single column
//! 4. Slice the requested page
//! 5. Annotate the page with capture state
//!
//! The pipeline is read-only over both the `Dataset` and the `CaptureSet`.

use crate::primitives::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT_BY, DEFAULT_SORT_ORDER, MAX_PAGE_SIZE,
};
use crate::{CaptureSet, CapturedRecord, CreatureRecord, Dataset, PokedexError, SortField, SortOrder};
use serde::{Deserialize, Serialize};

// =============================================================================
// QUERY
// =============================================================================

/// A validated catalog query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    page: usize,
    page_size: usize,
    sort_by: SortField,
    sort_order: SortOrder,
    type_filter: Option<String>,
    search: Option<String>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE as usize,
            page_size: DEFAULT_PAGE_SIZE as usize,
            sort_by: SortField::default(),
            sort_order: SortOrder::default(),
            type_filter: None,
            search: None,
        }
    }
}

impl Query {
    /// First page, default size, ascending by number, no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from raw request parameters.
    ///
    /// Absent parameters take the defaults from [`crate::primitives`].
    pub fn from_params(
        page: Option<i64>,
        page_size: Option<i64>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
        type_filter: Option<&str>,
        search: Option<&str>,
    ) -> Result<Self, PokedexError> {
        let sort_by: SortField = sort_by.unwrap_or(DEFAULT_SORT_BY).parse()?;
        let sort_order = SortOrder::parse(sort_order.unwrap_or(DEFAULT_SORT_ORDER));

        let mut query = Self::new()
            .with_page(page.unwrap_or(DEFAULT_PAGE))?
            .with_page_size(page_size.unwrap_or(DEFAULT_PAGE_SIZE))?
            .sorted_by(sort_by, sort_order);

        if let Some(t) = type_filter {
            query = query.with_type(t);
        }
        if let Some(s) = search {
            query = query.with_search(s);
        }
        Ok(query)
    }

    /// Set the 1-based page number.
    pub fn with_page(mut self, page: i64) -> Result<Self, PokedexError> {
        if page < 1 {
            return Err(PokedexError::InvalidPage(page));
        }
        self.page = usize::try_from(page).map_err(|_| PokedexError::InvalidPage(page))?;
        Ok(self)
    }

    /// Set the page size, between 1 and [`MAX_PAGE_SIZE`].
    pub fn with_page_size(mut self, page_size: i64) -> Result<Self, PokedexError> {
        let invalid = || PokedexError::InvalidPageSize {
            size: page_size,
            max: MAX_PAGE_SIZE,
        };
        let size = usize::try_from(page_size).map_err(|_| invalid())?;
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(invalid());
        }
        self.page_size = size;
        Ok(self)
    }

    #[must_use]
    pub fn sorted_by(mut self, field: SortField, order: SortOrder) -> Self {
        self.sort_by = field;
        self.sort_order = order;
        self
    }

    /// Restrict to records carrying `type_name`. An empty string means no filter.
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        self.type_filter = (!type_name.is_empty()).then_some(type_name);
        self
    }

    /// Restrict to records matching `text`. Blank text means no search.
    #[must_use]
    pub fn with_search(mut self, text: &str) -> Self {
        let needle = text.trim().to_lowercase();
        self.search = (!needle.is_empty()).then_some(needle);
        self
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub fn sort_by(&self) -> SortField {
        self.sort_by
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub fn type_filter(&self) -> Option<&str> {
        self.type_filter.as_deref()
    }

    /// Normalized (trimmed, lower-cased) search text.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// True if `record` survives both filters.
    fn keeps(&self, record: &CreatureRecord) -> bool {
        self.type_filter.as_deref().is_none_or(|t| record.has_type(t))
            && self.search.as_deref().is_none_or(|s| record.matches_search(s))
    }

    /// Run the pipeline.
    #[must_use]
    pub fn execute(&self, dataset: &Dataset, captured: &CaptureSet) -> PageResult {
        let mut matches: Vec<&CreatureRecord> =
            dataset.records().iter().filter(|r| self.keeps(r)).collect();

        // slice::sort_by is stable, so ties keep dataset order in both directions
        matches.sort_by(|a, b| self.sort_order.apply(self.sort_by.compare(a, b)));

        let total = matches.len();
        let offset = (self.page - 1).saturating_mul(self.page_size);

        let pokemon = matches
            .into_iter()
            .skip(offset)
            .take(self.page_size)
            .map(|r| CapturedRecord::new(r.clone(), captured.is_captured(&r.name)))
            .collect();

        PageResult {
            pokemon,
            total,
            page: self.page,
            page_size: self.page_size,
            total_pages: total.div_ceil(self.page_size),
        }
    }
}

// =============================================================================
// PAGE RESULT
// =============================================================================

/// One page of query results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Records on this page, annotated with capture state.
    pub pokemon: Vec<CapturedRecord>,
    /// Number of records after filtering, before pagination.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            CreatureRecord::new(1, "Bulbasaur", "Grass", Some("Poison")),
            CreatureRecord::new(4, "Charmander", "Fire", None),
            CreatureRecord::new(6, "Charizard", "Fire", Some("Flying")),
            CreatureRecord::new(7, "Squirtle", "Water", None),
            CreatureRecord::new(16, "Pidgey", "Normal", Some("Flying")),
        ])
        .unwrap()
    }

    fn names(result: &PageResult) -> Vec<&str> {
        result
            .pokemon
            .iter()
            .map(|p| p.record.name.as_str())
            .collect()
    }

    #[test]
    fn defaults() {
        let q = Query::new();
        assert_eq!(q.page(), 1);
        assert_eq!(q.page_size(), 10);
        assert_eq!(q.sort_by(), SortField::Number);
        assert_eq!(q.sort_order(), SortOrder::Ascending);
        assert_eq!(q.type_filter(), None);
        assert_eq!(q.search(), None);
    }

    #[test]
    fn type_filter_single_match() {
        let dataset = Dataset::from_records(vec![
            CreatureRecord::new(1, "Bulbasaur", "Grass", Some("Poison")),
            CreatureRecord::new(4, "Charmander", "Fire", None),
        ])
        .unwrap();

        let result = Query::new()
            .with_page_size(1)
            .unwrap()
            .with_type("Fire")
            .execute(&dataset, &CaptureSet::new());

        assert_eq!(names(&result), vec!["Charmander"]);
        assert!(!result.pokemon[0].captured);
        assert_eq!(result.total, 1);
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, 1);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn type_filter_matches_secondary_type() {
        let result = Query::new()
            .with_type("Flying")
            .execute(&sample(), &CaptureSet::new());
        assert_eq!(names(&result), vec!["Charizard", "Pidgey"]);
    }

    #[test]
    fn type_filter_is_case_sensitive() {
        let result = Query::new()
            .with_type("fire")
            .execute(&sample(), &CaptureSet::new());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
    }

    #[test]
    fn empty_type_filter_is_ignored() {
        let q = Query::new().with_type("");
        assert_eq!(q.type_filter(), None);
        assert_eq!(q.execute(&sample(), &CaptureSet::new()).total, 5);
    }

    #[test]
    fn search_is_trimmed_and_lowercased() {
        let q = Query::new().with_search("  CHAR ");
        assert_eq!(q.search(), Some("char"));
        let result = q.execute(&sample(), &CaptureSet::new());
        assert_eq!(names(&result), vec!["Charmander", "Charizard"]);
    }

    #[test]
    fn blank_search_is_ignored() {
        let q = Query::new().with_search("   ");
        assert_eq!(q.search(), None);
        assert_eq!(q.execute(&sample(), &CaptureSet::new()).total, 5);
    }

    #[test]
    fn search_matches_number_substring() {
        let result = Query::new()
            .with_search("1")
            .execute(&sample(), &CaptureSet::new());
        assert_eq!(names(&result), vec!["Bulbasaur", "Pidgey"]);
    }

    #[test]
    fn filters_compose_as_intersection() {
        let result = Query::new()
            .with_type("Fire")
            .with_search("flying")
            .execute(&sample(), &CaptureSet::new());
        assert_eq!(names(&result), vec!["Charizard"]);
    }

    #[test]
    fn sort_by_name_descending() {
        let result = Query::new()
            .sorted_by(SortField::Name, SortOrder::Descending)
            .execute(&sample(), &CaptureSet::new());
        assert_eq!(
            names(&result),
            vec!["Squirtle", "Pidgey", "Charmander", "Charizard", "Bulbasaur"]
        );
    }

    #[test]
    fn sort_ties_keep_dataset_order() {
        let result = Query::new()
            .sorted_by(SortField::TypeOne, SortOrder::Descending)
            .execute(&sample(), &CaptureSet::new());
        assert_eq!(
            names(&result),
            vec!["Squirtle", "Pidgey", "Bulbasaur", "Charmander", "Charizard"]
        );
    }

    #[test]
    fn sort_applies_before_pagination() {
        let result = Query::new()
            .with_page_size(2)
            .unwrap()
            .sorted_by(SortField::Number, SortOrder::Descending)
            .execute(&sample(), &CaptureSet::new());
        assert_eq!(names(&result), vec!["Pidgey", "Squirtle"]);
        assert_eq!(result.total_pages, 3);
    }

    #[test]
    fn last_page_is_partial() {
        let result = Query::new()
            .with_page(3)
            .unwrap()
            .with_page_size(2)
            .unwrap()
            .execute(&sample(), &CaptureSet::new());
        assert_eq!(names(&result), vec!["Pidgey"]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn page_past_end_is_empty() {
        let result = Query::new()
            .with_page(10)
            .unwrap()
            .execute(&sample(), &CaptureSet::new());
        assert!(result.pokemon.is_empty());
        assert_eq!(result.total, 5);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 10);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let result = Query::new()
            .with_page(i64::MAX)
            .unwrap()
            .with_page_size(1000)
            .unwrap()
            .execute(&sample(), &CaptureSet::new());
        assert!(result.pokemon.is_empty());
    }

    #[test]
    fn captured_records_are_annotated() {
        let captured: CaptureSet = ["Squirtle"].into_iter().collect();
        let result = Query::new().execute(&sample(), &captured);
        for p in &result.pokemon {
            assert_eq!(p.captured, p.record.name == "Squirtle");
        }
    }

    #[test]
    fn invalid_page_rejected() {
        assert!(matches!(
            Query::new().with_page(0),
            Err(PokedexError::InvalidPage(0))
        ));
        assert!(matches!(
            Query::new().with_page(-2),
            Err(PokedexError::InvalidPage(-2))
        ));
    }

    #[test]
    fn invalid_page_size_rejected() {
        for size in [0, -1, 1001] {
            assert!(matches!(
                Query::new().with_page_size(size),
                Err(PokedexError::InvalidPageSize { .. })
            ));
        }
        assert!(Query::new().with_page_size(1000).is_ok());
    }

    #[test]
    fn from_params_applies_defaults() {
        let q = Query::from_params(None, None, None, None, None, None).unwrap();
        assert_eq!(q, Query::new());
    }

    #[test]
    fn from_params_parses_everything() {
        let q = Query::from_params(
            Some(2),
            Some(5),
            Some("hit_points"),
            Some("DESC"),
            Some("Water"),
            Some("  Squ "),
        )
        .unwrap();
        assert_eq!(q.page(), 2);
        assert_eq!(q.page_size(), 5);
        assert_eq!(q.sort_by(), SortField::HitPoints);
        assert_eq!(q.sort_order(), SortOrder::Descending);
        assert_eq!(q.type_filter(), Some("Water"));
        assert_eq!(q.search(), Some("squ"));
    }

    #[test]
    fn from_params_rejects_unknown_sort_field() {
        let err = Query::from_params(None, None, Some("weight"), None, None, None).unwrap_err();
        assert!(matches!(err, PokedexError::UnknownSortField(_)));
    }

    #[test]
    fn execute_does_not_mutate_dataset() {
        let dataset = sample();
        let before = dataset.records().to_vec();
        let _ = Query::new()
            .sorted_by(SortField::Name, SortOrder::Descending)
            .execute(&dataset, &CaptureSet::new());
        assert_eq!(dataset.records(), before.as_slice());
    }

    #[test]
    fn page_result_wire_names() {
        let result = Query::new().execute(&sample(), &CaptureSet::new());
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["pokemon"].is_array());
        assert_eq!(value["pageSize"], 10);
        assert_eq!(value["totalPages"], 1);
        assert_eq!(value["total"], 5);
    }
}
