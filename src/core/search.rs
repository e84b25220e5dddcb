//! Search term matching for artist records

use crate::models::ArtistRecord;
use crate::utils::parsers::contains_ignore_case;

/// Search library
pub struct SearchLib;

impl SearchLib {
    /// Check whether a record matches a free-text term.
    ///
    /// The term matches when it is a case-insensitive substring of the name,
    /// the category text or the location. An empty term matches everything.
    pub fn matches(record: &ArtistRecord, term: &str) -> bool {
        let term = term.to_lowercase();
        Self::matches_lower(record, &term)
    }

    /// Same as [`SearchLib::matches`] with an already lowercased term
    pub fn matches_lower(record: &ArtistRecord, term_lower: &str) -> bool {
        if term_lower.is_empty() {
            return true;
        }

        contains_ignore_case(&record.name, term_lower)
            || contains_ignore_case(&record.category_text(), term_lower)
            || record
                .location
                .as_deref()
                .is_some_and(|loc| contains_ignore_case(loc, term_lower))
    }
}
