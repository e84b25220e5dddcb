//! Listing page state
//!
//! Holds the loaded catalog plus the current query; the visible listing is
//! always computed by the query engine from the current parameters.

use serde::Serialize;

use crate::core::{ArtistQueryEngine, ResultSet};
use crate::models::{ArtistRecord, QueryParams, SortKey};

/// Distinct values offered by the filter dropdowns, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub price_ranges: Vec<String>,
}

/// Number of artists a category filter would keep
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Listing state for one page view
pub struct BrowseSession {
    records: Vec<ArtistRecord>,
    params: QueryParams,
}

impl BrowseSession {
    /// Start a session over a loaded catalog with default parameters
    pub fn new(records: Vec<ArtistRecord>) -> Self {
        Self::with_params(records, QueryParams::default())
    }

    pub fn with_params(records: Vec<ArtistRecord>, params: QueryParams) -> Self {
        let session = Self { records, params };
        session.trace_listing();
        session
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// All loaded records
    pub fn records(&self) -> &[ArtistRecord] {
        &self.records
    }

    /// Records currently visible, in display order
    pub fn results(&self) -> ResultSet<'_> {
        ArtistQueryEngine::run(&self.records, &self.params)
    }

    pub fn set_search(&mut self, term: &str) {
        self.params.search = term.to_string();
        self.trace_listing();
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.params.category = category.map(str::to_string);
        self.trace_listing();
    }

    pub fn set_location(&mut self, location: Option<&str>) {
        self.params.location = location.map(str::to_string);
        self.trace_listing();
    }

    pub fn set_price_range(&mut self, price_range: Option<&str>) {
        self.params.price_range = price_range.map(str::to_string);
        self.trace_listing();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.params.sort = sort;
        self.trace_listing();
    }

    /// Reset the search term and all filters; the sort key is kept
    pub fn clear_all(&mut self) {
        self.params = QueryParams {
            sort: self.params.sort,
            ..QueryParams::default()
        };
        self.trace_listing();
    }

    pub fn active_filter_count(&self) -> usize {
        self.params.active_filter_count()
    }

    /// Distinct categories, locations and price ranges of the catalog
    pub fn filter_options(&self) -> FilterOptions {
        let mut options = FilterOptions::default();
        for record in &self.records {
            if let Some(category) = &record.category {
                for label in category.labels() {
                    push_unique(&mut options.categories, label);
                }
            }
            if let Some(location) = &record.location {
                push_unique(&mut options.locations, location);
            }
            if let Some(price_range) = &record.price_range {
                push_unique(&mut options.price_ranges, price_range);
            }
        }
        options
    }

    /// Catalog-wide artist count per category, in first-seen order
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.filter_options()
            .categories
            .into_iter()
            .map(|category| {
                let count = self
                    .records
                    .iter()
                    .filter(|r| r.category.as_ref().is_some_and(|c| c.contains(&category)))
                    .count();
                CategoryCount { category, count }
            })
            .collect()
    }

    /// Human readable result summary
    pub fn summary(&self) -> String {
        let shown = self.results().len();
        if shown == 0 {
            return "No artists found".to_string();
        }
        format!(
            "Showing {} of {} artist{}",
            shown,
            self.records.len(),
            if self.records.len() == 1 { "" } else { "s" }
        )
    }

    fn trace_listing(&self) {
        tracing::debug!(
            "Listing recomputed: {} of {} records ({} filters, sort {})",
            self.results().len(),
            self.records.len(),
            self.params.active_filter_count(),
            self.params.sort
        );
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn session() -> BrowseSession {
        BrowseSession::new(vec![
            ArtistRecord::new(1, "Amy")
                .with_category("DJs")
                .with_location("NYC")
                .with_price_range("$100-$500")
                .with_bookings(10),
            ArtistRecord::new(2, "Zed")
                .with_category("Singers")
                .with_location("LA")
                .with_price_range("$500-$1000")
                .with_bookings(50),
            ArtistRecord::new(3, "Lana")
                .with_category("Singers")
                .with_location("NYC")
                .with_price_range("$100-$500")
                .with_bookings(20),
        ])
    }

    fn ids(session: &BrowseSession) -> Vec<i64> {
        session.results().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_initial_listing_matches_engine() {
        let session = session();
        let expected: Vec<i64> = ArtistQueryEngine::run(session.records(), session.params())
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids(&session), expected);
        assert_eq!(ids(&session), [2, 3, 1]);
    }

    #[test]
    fn test_every_change_recomputes() {
        let mut session = session();

        session.set_category(Some("Singers"));
        assert_eq!(ids(&session), [2, 3]);

        session.set_location(Some("NYC"));
        assert_eq!(ids(&session), [3]);

        session.set_location(None);
        session.set_sort(SortKey::Name);
        assert_eq!(ids(&session), [3, 2]);

        session.set_search("zed");
        assert_eq!(ids(&session), [2]);
        assert_eq!(session.active_filter_count(), 2);
    }

    #[test]
    fn test_clear_all_keeps_sort() {
        let mut session = session();
        session.set_sort(SortKey::Name);
        session.set_search("nothing matches this");
        session.set_price_range(Some("$100-$500"));
        assert!(session.results().is_empty());
        assert_eq!(session.summary(), "No artists found");

        session.clear_all();
        assert_eq!(session.active_filter_count(), 0);
        assert_eq!(session.params().sort, SortKey::Name);
        assert_eq!(ids(&session), [1, 3, 2]);
        assert_eq!(session.summary(), "Showing 3 of 3 artists");
    }

    #[test]
    fn test_multi_category_options_filter_each_label() {
        let mut session = BrowseSession::new(vec![
            ArtistRecord::new(1, "Ravi")
                .with_category(Category::Many(vec!["DJ".into(), "Speaker".into()])),
            ArtistRecord::new(2, "Meera").with_category(Category::Many(vec!["Dancer".into()])),
            ArtistRecord::new(3, "Arjun").with_category("DJ"),
        ]);

        let options = session.filter_options();
        assert_eq!(options.categories, ["DJ", "Speaker", "Dancer"]);

        // every offered option keeps exactly the artists it counts
        for count in session.category_counts() {
            session.set_category(Some(count.category.as_str()));
            assert_eq!(session.results().len(), count.count, "{}", count.category);
        }

        session.set_category(Some("DJ"));
        assert_eq!(ids(&session), [1, 3]);
    }

    #[test]
    fn test_results_follow_engine_for_any_params() {
        let mut session = session();
        session.set_search("a");
        session.set_sort(SortKey::Price);
        let expected: Vec<i64> = ArtistQueryEngine::run(session.records(), session.params())
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids(&session), expected);
        assert_eq!(ids(&session), [1, 3, 2]);
    }

    #[test]
    fn test_filter_options_and_counts() {
        let session = session();
        let options = session.filter_options();
        assert_eq!(options.categories, ["DJs", "Singers"]);
        assert_eq!(options.locations, ["NYC", "LA"]);
        assert_eq!(options.price_ranges, ["$100-$500", "$500-$1000"]);

        let counts = session.category_counts();
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: "DJs".into(), count: 1 },
                CategoryCount { category: "Singers".into(), count: 2 },
            ]
        );
    }
}
