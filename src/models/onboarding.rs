//! Onboarding submission model

use serde::{Deserialize, Serialize};

use super::{ArtistRecord, Category};

/// Categories offered by the onboarding form
pub const CATEGORY_CHOICES: [&str; 4] = ["Singer", "Dancer", "Speaker", "DJ"];

/// Languages offered by the onboarding form
pub const LANGUAGE_CHOICES: [&str; 4] = ["English", "Hindi", "Marathi", "Gujarati"];

/// Fee ranges offered by the onboarding form, with their descriptions
pub const FEE_RANGE_CHOICES: [(&str, &str); 4] = [
    ("$100-$500", "Great for small events"),
    ("$500-$1000", "Perfect for medium events"),
    ("$1000-$5000", "Ideal for large events"),
    ("$5000+", "Premium performances"),
];

/// Artist profile submitted through the onboarding form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default, alias = "category")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub fee_range: String,
    #[serde(default)]
    pub location: String,
    /// Optional image reference
    #[serde(default)]
    pub image: Option<String>,
}

impl Submission {
    /// Convert an accepted submission into a roster record
    pub fn into_record(self, id: i64) -> ArtistRecord {
        ArtistRecord {
            id,
            name: self.name.trim().to_string(),
            category: Some(Category::Many(self.categories)),
            location: Some(self.location.trim().to_string()),
            price_range: Some(self.fee_range),
            languages: self.languages,
            image: self.image.unwrap_or_default(),
            rating: None,
            bookings: None,
            bio: Some(self.bio.trim().to_string()),
            submitted_at: Some(chrono::Utc::now().timestamp()),
        }
    }
}
