//! Text parsing utilities for catalog labels

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A run of digits with optional thousands separators and decimal part,
    // e.g. "500", "1,000", "49.99"
    static ref NUMBER_PATTERN: Regex = Regex::new(r"\d[\d,]*(?:\.\d+)?").unwrap();
}

/// All numeric tokens of a label, in order of appearance
pub fn numbers(label: &str) -> Vec<f64> {
    NUMBER_PATTERN
        .find_iter(label)
        .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .collect()
}

/// First numeric token of a label
pub fn first_number(label: &str) -> Option<f64> {
    numbers(label).into_iter().next()
}

/// Representative amount of a fee label: midpoint of the first two numbers,
/// the number itself when there is only one
pub fn fee_midpoint(label: &str) -> Option<f64> {
    match numbers(label).as_slice() {
        [] => None,
        [only] => Some(*only),
        [min, max, ..] => Some((min + max) / 2.0),
    }
}

/// Case-insensitive substring test; an empty needle matches everything
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}
