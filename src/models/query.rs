//! Query parameters for the artist listing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering applied to a filtered listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Name A-Z
    Name,
    /// Highest rated first
    Rating,
    /// Cheapest first
    Price,
    /// Most booked first
    #[default]
    #[serde(alias = "popular")]
    Popularity,
}

impl SortKey {
    /// Parse a sort parameter, unknown values fall back to popularity
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "name" => SortKey::Name,
            "rating" => SortKey::Rating,
            "price" => SortKey::Price,
            _ => SortKey::Popularity,
        }
    }

    /// Label shown in the sort dropdown
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name A-Z",
            SortKey::Rating => "Highest Rated",
            SortKey::Price => "Price: Low to High",
            SortKey::Popularity => "Most Popular",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Rating => "rating",
            SortKey::Price => "price",
            SortKey::Popularity => "popularity",
        };
        write!(f, "{}", s)
    }
}

/// Search term, filters and sort key driving one recomputation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    /// Free-text term, matched case-insensitively
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub sort: SortKey,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search = term.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn price_range(mut self, price_range: &str) -> Self {
        self.price_range = Some(price_range.to_string());
        self
    }

    pub fn sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Active category filter; an empty value is no constraint
    pub fn category_filter(&self) -> Option<&str> {
        active(&self.category)
    }

    pub fn location_filter(&self) -> Option<&str> {
        active(&self.location)
    }

    pub fn price_range_filter(&self) -> Option<&str> {
        active(&self.price_range)
    }

    /// Number of active filters, counting a non-empty search term as one
    pub fn active_filter_count(&self) -> usize {
        let filters = [
            self.category_filter(),
            self.location_filter(),
            self.price_range_filter(),
        ]
        .iter()
        .filter(|f| f.is_some())
        .count();

        filters + usize::from(!self.search.is_empty())
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
