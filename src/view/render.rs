// src/view/render.rs

//! Plain-text rendering of the directory screen.

use std::fmt::Write;

use crate::models::{ALL_COUNTRIES, PageSize, ViewConfig};
use crate::view::state::ViewState;

pub const ERROR_BANNER: &str = "Something went wrong ...";
pub const LOADING_BANNER: &str = "Loading ...";
pub const ATTRIBUTION: &str = "This information was retrieved from University Domains and Names Data List (https://github.com/Hipo/university-domains-list).";

/// Render the whole screen for the current state.
pub fn render(state: &ViewState, config: &ViewConfig) -> String {
    let view = state.view();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Select Country: {} ({} available)",
        state.selection.label(),
        state.countries.len()
    );
    let _ = writeln!(out, "Items Per Page: {}", size_options(state.page.page_size));
    let _ = writeln!(
        out,
        "Total # of universities found for {}: {}",
        state.selection.label(),
        view.total_matches
    );
    out.push('\n');

    if state.is_error {
        let _ = writeln!(out, "{ERROR_BANNER}");
    }

    if state.is_loading {
        let _ = writeln!(out, "{LOADING_BANNER}");
    } else if !state.is_error {
        for uni in &view.visible {
            let _ = writeln!(out, "  - {}", uni.format(&config.item_template));
        }
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "{} {}  (page {} of {})",
        button("Previous", view.can_previous),
        button("Next", view.can_next),
        view.current_page,
        view.total_pages
    );
    let _ = writeln!(out, "{ATTRIBUTION}");
    if let Some(line) = provenance(state) {
        let _ = writeln!(out, "{line}");
    }
    out
}

/// The country selector's options, one per line, with the selection marked.
pub fn render_countries(state: &ViewState) -> String {
    std::iter::once(ALL_COUNTRIES)
        .chain(state.countries.iter().map(String::as_str))
        .map(|country| {
            let marker = if state.selection.label() == country {
                "*"
            } else {
                " "
            };
            format!("{marker} {country}\n")
        })
        .collect()
}

/// Where and when the loaded records were fetched.
pub fn provenance(state: &ViewState) -> Option<String> {
    let fetched_at = state.dataset.fetched_at?;
    Some(format!(
        "Loaded {} records from {} at {}",
        state.dataset.len(),
        state.dataset.source,
        fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
    ))
}

/// Page-size selector line, e.g. `5 | [10] | 20 | Show All`.
fn size_options(selected: PageSize) -> String {
    let mut options: Vec<String> = PageSize::options()
        .iter()
        .map(|&size| {
            let label = size_label(size);
            if size == selected {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    // A configured size outside the standard options still shows as selected.
    if !PageSize::options().contains(&selected) {
        options.push(format!("[{}]", size_label(selected)));
    }
    options.join(" | ")
}

fn size_label(size: PageSize) -> String {
    match size {
        PageSize::Unbounded => "Show All".to_string(),
        size => size.to_string(),
    }
}

/// One result per line, no chrome.
pub fn render_list(state: &ViewState, config: &ViewConfig) -> String {
    state
        .view()
        .visible
        .iter()
        .map(|uni| uni.format(&config.item_template) + "\n")
        .collect()
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!("({label})")
    }
}
