// src/pipeline/index.rs

//! Country index for the country selector.

use std::collections::HashSet;

use crate::models::University;

/// Distinct country names, in order of first appearance.
pub fn country_index(records: &[University]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|uni| seen.insert(uni.country.as_str()))
        .map(|uni| uni.country.clone())
        .collect()
}
