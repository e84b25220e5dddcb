//! Manager dashboard over the onboarded roster

use serde::Serialize;
use std::fmt;

use crate::core::SearchLib;
use crate::models::ArtistRecord;
use crate::utils::parsers::fee_midpoint;

/// Category value meaning "no category constraint"
pub const ALL_CATEGORIES: &str = "all";

/// Search and category selection of the roster table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterFilter {
    pub search: String,
    pub category: String,
}

impl Default for RosterFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl RosterFilter {
    /// Check whether a roster entry is shown under this filter
    pub fn matches(&self, record: &ArtistRecord) -> bool {
        let category_ok = self.category.is_empty()
            || self.category == ALL_CATEGORIES
            || record
                .category
                .as_ref()
                .is_some_and(|c| c.contains(&self.category));

        category_ok && SearchLib::matches(record, &self.search)
    }
}

/// Aggregate figures shown on the dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStats {
    pub total: usize,
    pub categories: Vec<String>,
    pub cities: Vec<String>,
    /// Mean fee per performance; labels without numbers count as 0
    pub avg_fee: f64,
}

impl RosterStats {
    /// Average fee rounded to whole currency units, e.g. `$1,250`
    pub fn avg_fee_display(&self) -> String {
        format!("${}", format_number(self.avg_fee.round() as i64))
    }
}

/// Decision taken on an artist's detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Reject,
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewDecision::Accept => write!(f, "Accepted"),
            ReviewDecision::Reject => write!(f, "Rejected"),
        }
    }
}

/// Onboarded artists managed from the dashboard
pub struct Roster<'a> {
    records: &'a [ArtistRecord],
}

impl<'a> Roster<'a> {
    pub fn new(records: &'a [ArtistRecord]) -> Self {
        Self { records }
    }

    /// Entries visible under a filter, in roster order
    pub fn filter(&self, filter: &RosterFilter) -> Vec<&'a ArtistRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// Detail lookup by id
    pub fn find(&self, id: i64) -> Option<&'a ArtistRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Compute dashboard statistics over the whole roster
    pub fn stats(&self) -> RosterStats {
        let mut categories: Vec<String> = Vec::new();
        let mut cities: Vec<String> = Vec::new();

        for record in self.records {
            if let Some(category) = &record.category {
                for label in category.labels() {
                    if !label.is_empty() && !categories.iter().any(|c| c == label) {
                        categories.push(label.to_string());
                    }
                }
            }
            if let Some(city) = record.location.as_deref().filter(|c| !c.is_empty()) {
                if !cities.iter().any(|c| c == city) {
                    cities.push(city.to_string());
                }
            }
        }

        let avg_fee = if self.records.is_empty() {
            0.0
        } else {
            let sum: f64 = self
                .records
                .iter()
                .filter_map(|r| r.price_range.as_deref().and_then(fee_midpoint))
                .sum();
            sum / self.records.len() as f64
        };

        RosterStats {
            total: self.records.len(),
            categories,
            cities,
            avg_fee,
        }
    }

    /// Record a review decision for an artist, returning the confirmation text
    pub fn review(&self, id: i64, decision: ReviewDecision) -> Option<String> {
        let artist = self.find(id)?;
        tracing::info!("{} artist {} ({})", decision, artist.name, artist.id);
        Some(format!("{} artist: {}", decision, artist.name))
    }
}

/// Group digits in threes, e.g. `1234567` -> `1,234,567`
fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
