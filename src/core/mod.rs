//! Core library functions for Artistly

pub mod browse;
pub mod onboarding;
pub mod query;
pub mod roster;
pub mod search;
pub mod sorting;

pub use browse::BrowseSession;
pub use onboarding::{OnboardingError, OnboardingWizard};
pub use query::{ArtistQueryEngine, ResultSet};
pub use roster::{ReviewDecision, Roster, RosterFilter};
pub use search::SearchLib;
pub use sorting::SortLib;
