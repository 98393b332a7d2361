//! University record and dataset structures.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// A university entry from the domains list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct University {
    /// University display name
    pub name: String,

    /// Country name as published by the dataset (e.g., "United States")
    pub country: String,

    /// Web domains owned by the university
    #[serde(default)]
    pub domains: Vec<String>,

    /// Remaining source fields (`alpha_two_code`, `web_pages`, ...), kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl University {
    /// Create a record with no passthrough fields.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        domains: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            domains: domains.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }

    /// Load records from a JSON file holding the same array the dataset URL serves.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Format the record for display using a template.
    ///
    /// Supported placeholders:
    /// - `{name}`, `{country}`
    /// - `{domains}` (joined with ", ")
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{name}", &self.name)
            .replace("{country}", &self.country)
            .replace("{domains}", &self.domains.join(", "))
    }
}

/// The records fetched for a session, plus where and when they came from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<University>,
    pub source: String,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Dataset {
    /// Wrap freshly fetched records.
    pub fn new(records: Vec<University>, source: impl Into<String>) -> Self {
        Self {
            records,
            source: source.into(),
            fetched_at: Some(Utc::now()),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
