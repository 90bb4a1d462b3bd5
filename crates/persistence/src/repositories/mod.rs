//! Repository implementations for database operations.

pub mod album;
pub mod contact;
pub mod event;
pub mod hero;
pub mod image;
pub mod library;
pub mod link;
pub mod news;
pub mod newsletter;
pub mod notice;
pub mod publication;
pub mod site_text;
pub mod video;

pub use album::{AlbumRepository, GalleryImageRepository};
pub use contact::{ContactInfoRepository, ContactMessageRepository};
pub use event::{EventRepository, StatRepository};
pub use hero::{HeroIntroRepository, HeroSlideRepository};
pub use image::{group_by_parent, AttachedImageRepository, ImageOwner};
pub use library::{BookImageRepository, LibraryCategoryRepository, LibraryEntryRepository};
pub use link::{ExternalLinkRepository, FooterLinkRepository};
pub use news::NewsRepository;
pub use newsletter::NewsletterRepository;
pub use notice::NoticeRepository;
pub use publication::{DownloadCategoryRepository, PublicationRepository};
pub use site_text::{AboutSectionRepository, FooterAboutRepository, SiteTextSnippetRepository};
pub use video::VideoRepository;
