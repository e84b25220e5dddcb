//! Artist listing query engine
//!
//! Computes the records to display for the current search term, filters and
//! sort key: `sort(filter(search(records, term)), key)`. Pure and synchronous,
//! it borrows the loaded records and never mutates them.

use crate::core::{SearchLib, SortLib};
use crate::models::{ArtistRecord, QueryParams};

/// Ordered records matching a query, borrowed from the loaded catalog
pub type ResultSet<'a> = Vec<&'a ArtistRecord>;

/// Listing query engine
pub struct ArtistQueryEngine;

impl ArtistQueryEngine {
    /// Filter and order records for the given parameters
    pub fn run<'a>(records: &'a [ArtistRecord], params: &QueryParams) -> ResultSet<'a> {
        let mut result = Self::filter(records, params);
        SortLib::sort_records(&mut result, params.sort);
        result
    }

    /// Apply filters and search only, keeping input order
    pub fn filter<'a>(records: &'a [ArtistRecord], params: &QueryParams) -> ResultSet<'a> {
        let term = params.search.to_lowercase();
        records
            .iter()
            .filter(|r| Self::matches_filters(r, params))
            .filter(|r| SearchLib::matches_lower(r, &term))
            .collect()
    }

    /// Check whether a single record satisfies every active constraint
    pub fn matches(record: &ArtistRecord, params: &QueryParams) -> bool {
        Self::matches_filters(record, params) && SearchLib::matches(record, &params.search)
    }

    fn matches_filters(record: &ArtistRecord, params: &QueryParams) -> bool {
        if let Some(category) = params.category_filter() {
            if !record.category.as_ref().is_some_and(|c| c.contains(category)) {
                return false;
            }
        }
        if let Some(location) = params.location_filter() {
            if record.location.as_deref() != Some(location) {
                return false;
            }
        }
        if let Some(price_range) = params.price_range_filter() {
            if record.price_range.as_deref() != Some(price_range) {
                return false;
            }
        }
        true
    }
}
