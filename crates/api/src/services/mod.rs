//! Infrastructure services used by the route handlers.

pub mod media_storage;

pub use media_storage::LocalMediaStore;
