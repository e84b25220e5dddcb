//! Configuration module for Artistly
//!
//! This module contains the application settings and path management.

mod paths;
mod settings;

pub use paths::{is_remote, Paths};
pub use settings::Settings;

/// Listing catalog document served under `/data`
pub const ARTISTS_DOCUMENT: &str = "artists.json";

/// Onboarded roster document served under `/data`
pub const ROSTER_DOCUMENT: &str = "onboardArtists.json";
