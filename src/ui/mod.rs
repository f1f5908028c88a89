//! Terminal presentation layer
//!
//! Thin rendering over the engine's data contracts; no decision logic
//! lives here.

pub mod layout;
pub mod renderer;
pub mod terminal;

pub use terminal::run_ui;
