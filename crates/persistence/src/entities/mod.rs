//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod album;
pub mod contact;
pub mod event;
pub mod hero;
pub mod image;
pub mod library;
pub mod link;
pub mod news;
pub mod notice;
pub mod publication;
pub mod site_text;
pub mod stat;
pub mod video;

pub use album::{AlbumEntity, GalleryImageEntity};
pub use contact::{ContactInfoEntity, ContactMessageEntity, NewsletterSubscriptionEntity};
pub use event::EventEntity;
pub use hero::{HeroIntroEntity, HeroSlideEntity};
pub use image::AttachedImageEntity;
pub use library::{BookImageEntity, LibraryCategoryEntity, LibraryEntryEntity};
pub use link::{ExternalLinkEntity, FooterLinkEntity};
pub use news::NewsEntity;
pub use notice::NoticeEntity;
pub use publication::{DownloadCategoryEntity, PublicationEntity};
pub use site_text::{AboutSectionEntity, FooterAboutEntity, SiteTextSnippetEntity};
pub use stat::StatEntity;
pub use video::VideoEntity;
