// src/pipeline/filter.rs

//! Country filter over the loaded records.

use crate::models::{FilterSelection, University};

/// Records matching a selection, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filtered<'a> {
    pub matches: Vec<&'a University>,
    pub count: usize,
}

/// Apply a country selection to the records.
///
/// `All` keeps every record; a country keeps records whose `country`
/// is exactly equal to it.
pub fn filter<'a>(records: &'a [University], selection: &FilterSelection) -> Filtered<'a> {
    let matches: Vec<&University> = records
        .iter()
        .filter(|uni| selection.matches(&uni.country))
        .collect();
    Filtered {
        count: matches.len(),
        matches,
    }
}
