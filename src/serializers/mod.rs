//! Serializers for presenting catalog records
//!
//! This module turns records into the card, table row and detail shapes the
//! views render, both as JSON and as plain text lines.

use chrono::{TimeZone, Utc};
use serde::Serialize;

use crate::models::*;

/// Listing card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistCard {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub location: String,
    pub price_range: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<u64>,
    pub is_shortlisted: bool,
}

impl ArtistCard {
    pub fn new(record: &ArtistRecord, is_shortlisted: bool) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            category: record.category_text(),
            location: record.location.clone().unwrap_or_default(),
            price_range: record.price_range.clone().unwrap_or_default(),
            image: record.image_src(),
            rating: record.rating,
            bookings: record.bookings,
            is_shortlisted,
        }
    }

    /// One-line text rendering
    pub fn line(&self) -> String {
        let mut line = format!(
            "#{:<4} {:<24} {:<16} {:<16} {}",
            self.id, self.name, self.category, self.location, self.price_range
        );
        if let Some(rating) = self.rating {
            line.push_str(&format!("  ★ {:.1}", rating));
        }
        if let Some(bookings) = self.bookings {
            line.push_str(&format!("  {} bookings", bookings));
        }
        if self.is_shortlisted {
            line.push_str("  [shortlisted]");
        }
        line
    }
}

/// Listing page response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub items: Vec<ArtistCard>,
    pub total: usize,
    pub active_filters: usize,
    pub sort: SortKey,
}

/// Roster table row: Name, Category, City, Fee
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub location: String,
    pub fee_range: String,
}

impl From<&ArtistRecord> for RosterRow {
    fn from(record: &ArtistRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            category: record.category_text(),
            location: record.location.clone().unwrap_or_default(),
            fee_range: record.price_range.clone().unwrap_or_default(),
        }
    }
}

impl RosterRow {
    pub fn line(&self) -> String {
        format!(
            "#{:<4} {:<24} {:<24} {:<16} {}",
            self.id, self.name, self.category, self.location, self.fee_range
        )
    }
}

/// Artist detail view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub categories: Vec<String>,
    pub location: String,
    pub fee_range: String,
    pub languages: Vec<String>,
    pub bio: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted: Option<String>,
}

impl From<&ArtistRecord> for ArtistDetail {
    fn from(record: &ArtistRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            categories: record
                .category
                .as_ref()
                .map(|c| c.labels().into_iter().map(str::to_string).collect())
                .unwrap_or_default(),
            location: record.location.clone().unwrap_or_default(),
            fee_range: record.price_range.clone().unwrap_or_default(),
            languages: record.languages.clone(),
            bio: record.bio.clone().unwrap_or_default(),
            image: record.image_src(),
            submitted: record.submitted_at.and_then(format_date),
        }
    }
}

/// Format a unix timestamp as a UTC calendar date
fn format_date(timestamp: i64) -> Option<String> {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

impl ArtistDetail {
    /// Multi-line text rendering
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} (#{})", self.name, self.id),
            format!("Categories: {}", self.categories.join(", ")),
            format!("Location:   {}", self.location),
            format!("Fee:        {}", self.fee_range),
            format!("Languages:  {}", self.languages.join(", ")),
            format!("Image:      {}", self.image),
        ];
        if let Some(submitted) = &self.submitted {
            lines.push(format!("Submitted:  {}", submitted));
        }
        if !self.bio.is_empty() {
            lines.push(String::new());
            lines.push(self.bio.clone());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_from_record() {
        let record = ArtistRecord::new(1, "Amy")
            .with_category("DJs")
            .with_location("NYC")
            .with_price_range("$100-$500")
            .with_bookings(10);
        let card = ArtistCard::new(&record, true);
        assert_eq!(card.image, "/globe.svg");
        assert!(card.line().contains("10 bookings"));
        assert!(card.line().ends_with("[shortlisted]"));

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["priceRange"], "$100-$500");
        assert!(json.get("rating").is_none());
    }

    #[test]
    fn test_detail_from_roster_record() {
        let mut record = ArtistRecord::new(7, "Ravi")
            .with_category(Category::Many(vec!["Singer".into(), "DJ".into()]))
            .with_location("Mumbai")
            .with_price_range("$500-$1000");
        record.bio = Some("Playback singer".into());
        let detail = ArtistDetail::from(&record);
        assert_eq!(detail.categories, ["Singer", "DJ"]);
        let lines = detail.lines();
        assert_eq!(lines[0], "Ravi (#7)");
        assert_eq!(lines.last().map(String::as_str), Some("Playback singer"));
        assert!(detail.submitted.is_none());
    }

    #[test]
    fn test_detail_shows_submission_date() {
        let mut record = ArtistRecord::new(8, "Mira");
        record.submitted_at = Some(1_700_000_000);
        let detail = ArtistDetail::from(&record);
        assert_eq!(detail.submitted.as_deref(), Some("2023-11-14"));
        assert!(detail.lines().contains(&"Submitted:  2023-11-14".to_string()));
    }
}
