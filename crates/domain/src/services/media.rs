//! Media paths, public URLs and the storage seam for uploads.
//!
//! Records store media as paths relative to the media root
//! (`news/photo.jpg`). Responses expose them as URLs resolved against the
//! configured media base URL (`/media/news/photo.jpg`).

use serde::Serialize;
use thiserror::Error;

/// Resolves stored media paths to client-facing URLs.
#[derive(Debug, Clone)]
pub struct MediaUrls {
    base_url: String,
}

impl MediaUrls {
    /// Creates a resolver. A trailing `/` is added to the base if missing.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// URL for a stored media path.
    ///
    /// Values that are already absolute URLs are passed through untouched.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL for an optional media path.
    pub fn url_opt(&self, path: Option<&str>) -> Option<String> {
        path.filter(|p| !p.is_empty()).map(|p| self.url(p))
    }

    /// Link that prefers an external URL over an uploaded file.
    ///
    /// Returns an empty string when neither is present. Used for
    /// `Video.playback_url` and `LibraryPublicationEntry.download_href`.
    pub fn prefer_external(&self, external_url: &str, file: Option<&str>) -> String {
        if !external_url.is_empty() {
            return external_url.to_string();
        }
        self.url_opt(file).unwrap_or_default()
    }
}

/// Media sub-folders that uploads may be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaFolder {
    News,
    NewsGallery,
    Notice,
    NoticeGallery,
    Publications,
    PublicationCovers,
    PublicationImages,
    Videos,
    VideoThumbs,
    AlbumCovers,
    AlbumImages,
    Slides,
}

impl MediaFolder {
    pub const ALL: [MediaFolder; 12] = [
        MediaFolder::News,
        MediaFolder::NewsGallery,
        MediaFolder::Notice,
        MediaFolder::NoticeGallery,
        MediaFolder::Publications,
        MediaFolder::PublicationCovers,
        MediaFolder::PublicationImages,
        MediaFolder::Videos,
        MediaFolder::VideoThumbs,
        MediaFolder::AlbumCovers,
        MediaFolder::AlbumImages,
        MediaFolder::Slides,
    ];

    /// Relative directory under the media root.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFolder::News => "news",
            MediaFolder::NewsGallery => "news/gallery",
            MediaFolder::Notice => "notice",
            MediaFolder::NoticeGallery => "notice/gallery",
            MediaFolder::Publications => "publications",
            MediaFolder::PublicationCovers => "publication_covers",
            MediaFolder::PublicationImages => "publication_images",
            MediaFolder::Videos => "videos",
            MediaFolder::VideoThumbs => "video_thumbs",
            MediaFolder::AlbumCovers => "albums/covers",
            MediaFolder::AlbumImages => "albums/images",
            MediaFolder::Slides => "slides",
        }
    }

    /// Parses a folder from its relative directory name.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim_matches('/');
        Self::ALL.into_iter().find(|folder| folder.as_str() == s)
    }

    /// Whether only image files belong in this folder.
    pub fn images_only(&self) -> bool {
        !matches!(self, MediaFolder::Publications | MediaFolder::Videos)
    }
}

/// Errors raised by a media store.
#[derive(Debug, Error)]
pub enum MediaStoreError {
    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Media storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage backend for uploaded media.
#[async_trait::async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores `bytes` in `folder` and returns the relative media path.
    async fn save(
        &self,
        folder: MediaFolder,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, MediaStoreError>;
}

/// Reduces a client file name to a safe `stem.ext` form.
///
/// Directory components are dropped and the stem is slugified. Returns
/// `None` when nothing usable remains.
pub fn sanitize_file_name(file_name: &str) -> Option<String> {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let (stem, ext) = match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (base, None),
    };

    let stem = shared::slug::slugify(stem, 100);
    if stem.is_empty() {
        return None;
    }

    let ext = ext
        .map(|e| e.to_ascii_lowercase())
        .filter(|e| !e.is_empty() && e.len() <= 10 && e.chars().all(|c| c.is_ascii_alphanumeric()));

    Some(match ext {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    })
}
