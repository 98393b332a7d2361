// src/pipeline/paginate.rs

//! Page slicing over filtered results.

use crate::models::{PageConfig, PageSize};

/// The slice of `matches` visible on the configured page.
///
/// Pages past the end yield an empty slice; the last page may be short.
pub fn paginate<'a, T>(matches: &'a [T], page: &PageConfig) -> &'a [T] {
    let size = match page.page_size {
        PageSize::Unbounded => return matches,
        PageSize::Limited(size) => size.get(),
    };
    let start = (page.page() - 1).saturating_mul(size).min(matches.len());
    let end = start.saturating_add(size).min(matches.len());
    &matches[start..end]
}

/// Number of pages needed to show `count` records (at least one).
pub fn page_count(count: usize, size: PageSize) -> usize {
    match size {
        PageSize::Unbounded => 1,
        PageSize::Limited(size) => count.div_ceil(size.get()).max(1),
    }
}
