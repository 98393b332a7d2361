//! Service layer for the directory application.
//!
//! This module contains the dataset sources (`HttpSource`, `StaticSource`)
//! behind the `DataSource` trait.

mod source;

pub use source::{DataSource, HttpSource, StaticSource};
