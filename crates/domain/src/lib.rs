//! Domain layer for the SiteCMS backend.
//!
//! This crate contains:
//! - Domain models for every content type, with request/response payloads
//! - Visibility, filtering and ordering rules
//! - Media URL resolution and computed fields
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::DomainError;
