//! Sorting utilities for artist listings

use std::cmp::Ordering;

use crate::models::{ArtistRecord, SortKey};
use crate::utils::parsers::first_number;

/// Sorting library
pub struct SortLib;

impl SortLib {
    /// Sort records by key.
    ///
    /// `sort_by` is stable, so records comparing equal keep their input order.
    pub fn sort_records(records: &mut [&ArtistRecord], by: SortKey) {
        records.sort_by(|a, b| Self::compare(a, b, by));
    }

    /// Compare two records under a sort key
    pub fn compare(a: &ArtistRecord, b: &ArtistRecord, by: SortKey) -> Ordering {
        match by {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Rating => Self::rating(b).total_cmp(&Self::rating(a)),
            SortKey::Price => Self::price(a).total_cmp(&Self::price(b)),
            SortKey::Popularity => Self::bookings(b).cmp(&Self::bookings(a)),
        }
    }

    /// Lower bound of a price label; missing or unparsable labels count as 0
    pub fn price_floor(label: &str) -> f64 {
        first_number(label).unwrap_or(0.0)
    }

    fn rating(record: &ArtistRecord) -> f64 {
        record.rating.unwrap_or(0.0)
    }

    fn price(record: &ArtistRecord) -> f64 {
        record
            .price_range
            .as_deref()
            .map(Self::price_floor)
            .unwrap_or(0.0)
    }

    fn bookings(record: &ArtistRecord) -> u64 {
        record.bookings.unwrap_or(0)
    }
}
