//! Data models for Artistly
//!
//! Catalog records, listing query parameters and onboarding submissions.

mod artist;
mod onboarding;
mod query;

pub use artist::{ArtistRecord, Category};
pub use onboarding::{Submission, CATEGORY_CHOICES, FEE_RANGE_CHOICES, LANGUAGE_CHOICES};
pub use query::{QueryParams, SortKey};
