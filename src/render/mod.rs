//! Human-readable console output.

pub mod summary;

pub use summary::{render_listing, render_summary};
