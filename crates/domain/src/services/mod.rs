//! Domain services for SiteCMS.
//!
//! Services hold the rules that operate on domain models without touching
//! storage.

pub mod media;
pub mod visibility;

pub use media::{MediaFolder, MediaStore, MediaStoreError, MediaUrls};
pub use visibility::{CategoryRef, FeaturedFilter, Ordering, ViewAction};
