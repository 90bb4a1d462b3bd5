//! Custom Axum extractors.
//!
//! Extractors for parsing and validating request data.

pub mod json;
pub mod page;

pub use json::ValidJson;
pub use page::Page;
