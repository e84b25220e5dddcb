//! Artist model

use serde::{Deserialize, Serialize};

/// Performance category of an artist.
///
/// The listing document stores a single label, the onboarded roster stores
/// a list, so both shapes deserialize into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Category {
    One(String),
    Many(Vec<String>),
}

impl Category {
    /// All labels carried by this category
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Category::One(label) => vec![label.as_str()],
            Category::Many(labels) => labels.iter().map(String::as_str).collect(),
        }
    }

    /// Check whether any label equals `value` exactly
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Category::One(label) => label == value,
            Category::Many(labels) => labels.iter().any(|l| l == value),
        }
    }

    /// Display text, multiple labels joined with ", "
    pub fn display(&self) -> String {
        match self {
            Category::One(label) => label.clone(),
            Category::Many(labels) => labels.join(", "),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Many(Vec::new())
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::One(label.to_string())
    }
}

/// One performer's profile as loaded from a catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    /// Unique identifier
    pub id: i64,
    /// Display name
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Price label such as `$500-$1000` (`feeRange` in roster documents)
    #[serde(default, alias = "feeRange", skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Image reference
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Number of completed bookings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookings: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Unix timestamp of an accepted onboarding submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<i64>,
}

impl ArtistRecord {
    /// Create a bare record with only an id and a name
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            location: None,
            price_range: None,
            languages: Vec::new(),
            image: String::new(),
            rating: None,
            bookings: None,
            bio: None,
            submitted_at: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn with_price_range(mut self, price_range: &str) -> Self {
        self.price_range = Some(price_range.to_string());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_bookings(mut self, bookings: u64) -> Self {
        self.bookings = Some(bookings);
        self
    }

    /// Category display text, empty when the record has none
    pub fn category_text(&self) -> String {
        self.category.as_ref().map(Category::display).unwrap_or_default()
    }

    /// Image source usable by a view: absolute urls and rooted paths pass
    /// through, bare names get a leading slash, empty falls back to a placeholder
    pub fn image_src(&self) -> String {
        if self.image.is_empty() {
            return "/globe.svg".to_string();
        }
        if self.image.starts_with("http") || self.image.starts_with('/') {
            return self.image.clone();
        }
        format!("/{}", self.image.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing_record() {
        let json = r#"{
            "id": 1,
            "name": "Amy",
            "category": "DJs",
            "location": "NYC",
            "priceRange": "$100-$500",
            "languages": ["English"],
            "image": "amy.jpg",
            "bookings": 10
        }"#;
        let record: ArtistRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Some(Category::One("DJs".into())));
        assert_eq!(record.price_range.as_deref(), Some("$100-$500"));
        assert_eq!(record.bookings, Some(10));
        assert_eq!(record.rating, None);
    }

    #[test]
    fn test_deserialize_roster_record() {
        let json = r#"{
            "id": 7,
            "name": "Ravi",
            "category": ["Singer", "DJ"],
            "location": "Mumbai",
            "feeRange": "$500-$1000",
            "bio": "Playback singer"
        }"#;
        let record: ArtistRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.price_range.as_deref(), Some("$500-$1000"));
        assert_eq!(record.category_text(), "Singer, DJ");
        assert!(record.category.as_ref().unwrap().contains("DJ"));
        assert!(record.languages.is_empty());
    }

    #[test]
    fn test_image_src() {
        let mut record = ArtistRecord::new(1, "Amy");
        assert_eq!(record.image_src(), "/globe.svg");
        record.image = "images/amy.jpg".into();
        assert_eq!(record.image_src(), "/images/amy.jpg");
        record.image = "https://cdn.example.com/amy.jpg".into();
        assert_eq!(record.image_src(), "https://cdn.example.com/amy.jpg");
    }
}
