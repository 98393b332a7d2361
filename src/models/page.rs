//! Filter selection and pagination settings.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Label shown for the "no filter" selection.
pub const ALL_COUNTRIES: &str = "All Countries";

/// The country constraint chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterSelection {
    /// No constraint: every record matches.
    #[default]
    All,
    /// Only records whose country equals this string exactly.
    Country(String),
}

impl FilterSelection {
    /// Build a selection from raw selector input. Empty input means `All`.
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            Self::All
        } else {
            Self::Country(input.to_string())
        }
    }

    /// Whether a record's country satisfies this selection.
    pub fn matches(&self, country: &str) -> bool {
        match self {
            Self::All => true,
            Self::Country(selected) => selected == country,
        }
    }

    /// Selector label for display.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_COUNTRIES,
            Self::Country(country) => country,
        }
    }
}

/// Number of records shown per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PageSize {
    Limited(NonZeroUsize),
    /// "Show All": the whole filtered set on one page.
    Unbounded,
}

impl PageSize {
    /// The sizes offered by the page-size selector.
    pub fn options() -> [PageSize; 4] {
        [
            Self::limited(5),
            Self::limited(10),
            Self::limited(20),
            Self::Unbounded,
        ]
    }

    /// Shorthand for a limited size; zero falls back to one record per page.
    pub fn limited(size: usize) -> Self {
        Self::Limited(NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN))
    }

    /// The numeric size, or `None` when unbounded.
    pub fn get(self) -> Option<usize> {
        match self {
            Self::Limited(size) => Some(size.get()),
            Self::Unbounded => None,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::limited(10)
    }
}

impl FromStr for PageSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "all" | "show all" => Ok(Self::Unbounded),
            _ => trimmed
                .parse::<usize>()
                .ok()
                .and_then(NonZeroUsize::new)
                .map(Self::Limited)
                .ok_or_else(|| {
                    AppError::validation(format!(
                        "invalid page size '{s}': expected a positive integer or 'all'"
                    ))
                }),
        }
    }
}

impl TryFrom<String> for PageSize {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PageSize> for String {
    fn from(size: PageSize) -> Self {
        size.to_string()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(size) => write!(f, "{size}"),
            Self::Unbounded => f.write_str("all"),
        }
    }
}

/// Page size plus the 1-based page currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub page_size: PageSize,
    pub current_page: NonZeroUsize,
}

impl PageConfig {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current_page: NonZeroUsize::MIN,
        }
    }

    /// Current page as a plain number (always >= 1).
    pub fn page(&self) -> usize {
        self.current_page.get()
    }

    /// Jump to a page; zero is clamped to the first page.
    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: NonZeroUsize::new(page).unwrap_or(NonZeroUsize::MIN),
            ..self
        }
    }

    pub fn first_page(self) -> Self {
        self.with_page(1)
    }

    pub fn next_page(self) -> Self {
        self.with_page(self.page().saturating_add(1))
    }

    pub fn previous_page(self) -> Self {
        self.with_page(self.page().saturating_sub(1))
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
