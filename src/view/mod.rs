//! Session state, the controller that drives it, and text rendering.

pub mod controller;
pub mod render;
pub mod state;

pub use controller::ViewController;
pub use render::{provenance, render, render_countries, render_list};
pub use state::{Action, View, ViewState, transition};
