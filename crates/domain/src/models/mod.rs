//! Domain models for SiteCMS.

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
pub mod stat;
pub mod video;

pub use album::{Album, GalleryImage};
pub use contact::{ContactInfo, ContactMessage};
pub use event::Event;
pub use hero::{HeroIntro, HeroSlide};
pub use image::AttachedImage;
pub use library::{BookImage, LibraryCategory, LibraryEntry};
pub use link::{ExternalLink, FooterLink};
pub use news::News;
pub use newsletter::NewsletterSubscription;
pub use notice::Notice;
pub use publication::{DownloadCategory, Publication};
pub use site_text::{AboutSection, FooterAbout, SiteTextSnippet};
pub use stat::Stat;
pub use video::Video;
