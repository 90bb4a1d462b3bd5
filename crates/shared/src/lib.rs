//! Shared utilities and common types for the SiteCMS backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Page-number pagination envelopes
//! - Slug derivation
//! - Common validation logic
//! - Partial-update deserialization helpers

pub mod nullable;
pub mod pagination;
pub mod slug;
pub mod validation;
