//! Derivation pipeline over the loaded dataset.
//!
//! - `country_index`: Distinct countries for the selector
//! - `filter`: Records matching the country selection
//! - `paginate`: The visible page of the filtered records
//!
//! All three are pure and total; they are re-run after every state change.

pub mod filter;
pub mod index;
pub mod paginate;

pub use filter::{Filtered, filter};
pub use index::country_index;
pub use paginate::{page_count, paginate};
