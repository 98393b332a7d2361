// src/view/state.rs

//! Session state and its transitions.
//!
//! `ViewState` only changes through [`transition`] and the load lifecycle
//! methods; the visible page is derived on demand by [`ViewState::view`].

use crate::models::{Dataset, FilterSelection, PageConfig, PageSize, University};
use crate::pipeline::{country_index, filter, page_count, paginate};

/// A user action from the selectors and buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Country selector changed. Does not reset the page.
    SelectCountry(FilterSelection),
    /// Page-size selector changed. Does not reset the page.
    SelectPageSize(PageSize),
    /// "Apply Filters": back to page 1.
    ApplyFilters,
    NextPage,
    PreviousPage,
}

/// Everything the view is derived from.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub dataset: Dataset,
    pub countries: Vec<String>,
    pub selection: FilterSelection,
    pub page: PageConfig,
    pub is_loading: bool,
    pub is_error: bool,
}

impl ViewState {
    /// Fresh session state with the given page size selected.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page: PageConfig::new(page_size),
            ..Self::default()
        }
    }

    /// Fetch started.
    pub fn loading(self) -> Self {
        Self {
            is_loading: true,
            ..self
        }
    }

    /// Fetch succeeded: store the records and derive the country index.
    pub fn loaded(self, dataset: Dataset) -> Self {
        Self {
            countries: country_index(&dataset.records),
            dataset,
            is_loading: false,
            ..self
        }
    }

    /// Fetch failed: the dataset stays empty for the rest of the session.
    pub fn failed(self) -> Self {
        Self {
            is_loading: false,
            is_error: true,
            ..self
        }
    }

    /// Whether "Previous" is offered.
    pub fn can_previous(&self) -> bool {
        self.page.page() > 1
    }

    /// Whether "Next" is offered.
    ///
    /// Compares against the unfiltered dataset length, so with a country
    /// selected this can stay enabled past the last matching page, or turn
    /// off while matches remain. With "Show All" everything is already on
    /// screen and "Next" is never offered.
    pub fn can_next(&self) -> bool {
        match self.page.page_size {
            PageSize::Unbounded => false,
            PageSize::Limited(size) => {
                self.page.page().saturating_mul(size.get()) < self.dataset.len()
            }
        }
    }

    /// Derive the visible page from the current state.
    pub fn view(&self) -> View<'_> {
        let filtered = filter(&self.dataset.records, &self.selection);
        let visible = paginate(&filtered.matches, &self.page).to_vec();
        View {
            total_pages: page_count(filtered.count, self.page.page_size),
            total_matches: filtered.count,
            visible,
            current_page: self.page.page(),
            can_previous: self.can_previous(),
            can_next: self.can_next(),
        }
    }
}

/// Output derived from a `ViewState`.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a> {
    pub visible: Vec<&'a University>,
    pub total_matches: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

/// Apply one action to the state.
pub fn transition(state: ViewState, action: &Action) -> ViewState {
    match action {
        Action::SelectCountry(selection) => ViewState {
            selection: selection.clone(),
            ..state
        },
        Action::SelectPageSize(size) => ViewState {
            page: PageConfig {
                page_size: *size,
                ..state.page
            },
            ..state
        },
        Action::ApplyFilters => ViewState {
            page: state.page.first_page(),
            ..state
        },
        Action::NextPage => {
            if !state.can_next() {
                log::debug!("Ignoring next page: already at the end");
                return state;
            }
            ViewState {
                page: state.page.next_page(),
                ..state
            }
        }
        Action::PreviousPage => ViewState {
            page: state.page.previous_page(),
            ..state
        },
    }
}
