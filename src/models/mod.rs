// src/models/mod.rs

//! Domain models for the directory application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod page;
mod university;

// Re-export all public types
pub use config::{Config, LoggingConfig, SourceConfig, ViewConfig};
pub use page::{ALL_COUNTRIES, FilterSelection, PageConfig, PageSize};
pub use university::{Dataset, University};
