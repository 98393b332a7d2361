// src/view/controller.rs

//! Session controller: owns the state and the dataset source.

use std::time::Instant;

use crate::models::{Dataset, PageSize};
use crate::services::DataSource;
use crate::utils::format_elapsed;
use crate::view::state::{Action, View, ViewState, transition};

/// Drives one browsing session.
pub struct ViewController {
    source: Box<dyn DataSource>,
    state: ViewState,
    load_attempted: bool,
}

impl ViewController {
    pub fn new(source: Box<dyn DataSource>, page_size: PageSize) -> Self {
        Self {
            source,
            state: ViewState::new(page_size),
            load_attempted: false,
        }
    }

    /// Fetch the dataset. Runs once per session; failures are final.
    pub async fn load(&mut self) {
        if self.load_attempted {
            log::warn!("Dataset already requested this session; not fetching again");
            return;
        }
        self.load_attempted = true;

        let location = self.source.location().to_string();
        log::info!("Fetching universities from {location}");
        self.state = std::mem::take(&mut self.state).loading();

        let started = Instant::now();
        let result = self.source.fetch_json().await;
        let state = std::mem::take(&mut self.state);

        self.state = match result {
            Ok(records) => {
                log::info!(
                    "Loaded {} universities in {}",
                    records.len(),
                    format_elapsed(started.elapsed())
                );
                let state = state.loaded(Dataset::new(records, location));
                log::debug!("Indexed {} countries", state.countries.len());
                state
            }
            Err(e) => {
                log::warn!("Failed to load universities from {location}: {e}");
                state.failed()
            }
        };
    }

    /// Apply a user action.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("Action: {action:?}");
        self.state = transition(std::mem::take(&mut self.state), &action);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Derive the current page.
    pub fn view(&self) -> View<'_> {
        self.state.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterSelection, University};
    use crate::services::StaticSource;

    fn records() -> Vec<University> {
        (0..25)
            .map(|i| {
                let country = if i % 5 < 3 { "USA" } else { "Canada" };
                University::new(format!("University {i}"), country, [format!("u{i}.edu")])
            })
            .collect()
    }

    #[tokio::test]
    async fn test_load_success() {
        let source = StaticSource::new("memory", records());
        let mut controller = ViewController::new(Box::new(source), PageSize::limited(10));
        assert!(!controller.state().is_loading);

        controller.load().await;

        let state = controller.state();
        assert!(!state.is_loading);
        assert!(!state.is_error);
        assert_eq!(state.dataset.len(), 25);
        assert_eq!(state.dataset.source, "memory");
        assert!(state.dataset.fetched_at.is_some());
        assert_eq!(state.countries, vec!["USA", "Canada"]);
    }

    #[tokio::test]
    async fn test_load_failure_sets_error() {
        let source = StaticSource::failing("memory", "connection reset");
        let mut controller = ViewController::new(Box::new(source), PageSize::limited(10));

        controller.load().await;

        let state = controller.state();
        assert!(state.is_error);
        assert!(!state.is_loading);
        assert!(state.dataset.is_empty());
        assert!(state.countries.is_empty());

        let view = controller.view();
        assert!(view.visible.is_empty());
        assert_eq!(view.total_matches, 0);
    }

    #[tokio::test]
    async fn test_load_runs_once() {
        let source = StaticSource::new("memory", records());
        let mut controller = ViewController::new(Box::new(source), PageSize::limited(10));
        controller.load().await;
        controller.dispatch(Action::NextPage);

        controller.load().await;
        assert_eq!(controller.state().page.page(), 2);
        assert_eq!(controller.state().dataset.len(), 25);
    }

    #[tokio::test]
    async fn test_dispatch_filters_and_pages() {
        let source = StaticSource::new("memory", records());
        let mut controller = ViewController::new(Box::new(source), PageSize::limited(5));
        controller.load().await;

        controller.dispatch(Action::SelectCountry(FilterSelection::from_input("USA")));
        controller.dispatch(Action::ApplyFilters);
        assert_eq!(controller.view().total_matches, 15);
        assert_eq!(controller.view().total_pages, 3);

        controller.dispatch(Action::NextPage);
        controller.dispatch(Action::NextPage);
        let view = controller.view();
        assert_eq!(view.current_page, 3);
        assert_eq!(view.visible.len(), 5);
        assert!(view.can_previous);
        // 15 of 25 shown in total, but "Next" follows the unfiltered length.
        assert!(view.can_next);
    }
}
