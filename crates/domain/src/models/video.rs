//! Video domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::DomainError;
use crate::services::MediaUrls;

/// Message returned when a video has nothing to play.
pub const VIDEO_SOURCE_REQUIRED: &str = "Provide either a video file or an external URL.";

/// A video, either uploaded or hosted elsewhere (YouTube, Vimeo).
#[derive(Debug, Clone)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub url: String,
    pub file: Option<String>,
    pub thumbnail: Option<String>,
    pub description: String,
    pub description_si: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// A video needs an uploaded file or an external URL.
    pub fn ensure_playable(url: &str, file: Option<&str>) -> Result<(), DomainError> {
        if url.is_empty() && file.map_or(true, str::is_empty) {
            Err(DomainError::MissingSource(VIDEO_SOURCE_REQUIRED))
        } else {
            Ok(())
        }
    }
}

/// Request payload for creating a video.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideoRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub url: String,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub file: Option<String>,

    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub description_si: String,

    pub published_at: Option<DateTime<Utc>>,
}

impl CreateVideoRequest {
    pub fn ensure_playable(&self) -> Result<(), DomainError> {
        Video::ensure_playable(&self.url, self.file.as_deref())
    }
}

/// Request payload for updating a video (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title_si: Option<String>,

    #[validate(custom(function = "shared::validation::validate_blank_or_url"))]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub file: Option<Option<String>>,

    #[serde(default, deserialize_with = "shared::nullable::deserialize")]
    #[validate(custom(function = "shared::validation::validate_media_path"))]
    pub thumbnail: Option<Option<String>>,

    pub description: Option<String>,

    pub description_si: Option<String>,

    pub published_at: Option<DateTime<Utc>>,
}

impl UpdateVideoRequest {
    /// Checks the record that would result from applying this update.
    pub fn ensure_playable(&self, current: &Video) -> Result<(), DomainError> {
        let url = self.url.as_deref().unwrap_or(&current.url);
        let file = match &self.file {
            Some(file) => file.as_deref(),
            None => current.file.as_deref(),
        };
        Video::ensure_playable(url, file)
    }
}

/// Response payload for a video.
#[derive(Debug, Clone, Serialize)]
pub struct VideoResponse {
    pub id: i64,
    pub title: String,
    pub title_si: String,
    pub url: String,
    pub file: Option<String>,
    pub thumbnail: Option<String>,
    pub description: String,
    pub description_si: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `url` when set, otherwise the uploaded file's URL.
    pub playback_url: String,
}

impl VideoResponse {
    pub fn new(video: Video, media: &MediaUrls) -> Self {
        let playback_url = media.prefer_external(&video.url, video.file.as_deref());
        Self {
            id: video.id,
            title: video.title,
            title_si: video.title_si,
            url: video.url,
            file: media.url_opt(video.file.as_deref()),
            thumbnail: media.url_opt(video.thumbnail.as_deref()),
            description: video.description,
            description_si: video.description_si,
            published_at: video.published_at,
            created_at: video.created_at,
            updated_at: video.updated_at,
            playback_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &str, file: Option<&str>) -> Video {
        let now = Utc::now();
        Video {
            id: 1,
            title: "Opening ceremony".into(),
            title_si: String::new(),
            url: url.into(),
            file: file.map(String::from),
            thumbnail: None,
            description: String::new(),
            description_si: String::new(),
            published_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_ensure_playable() {
        assert!(Video::ensure_playable("", None).is_err());
        assert!(Video::ensure_playable("", Some("")).is_err());
        assert!(Video::ensure_playable("https://youtu.be/abc", None).is_ok());
        assert!(Video::ensure_playable("", Some("videos/a.mp4")).is_ok());
    }

    #[test]
    fn test_create_without_source_is_rejected() {
        let req: CreateVideoRequest =
            serde_json::from_value(serde_json::json!({"title": "Silent"})).unwrap();
        assert_eq!(
            req.ensure_playable(),
            Err(DomainError::MissingSource(VIDEO_SOURCE_REQUIRED))
        );
    }

    #[test]
    fn test_update_checks_merged_record() {
        let current = video("https://youtu.be/abc", None);

        let clear_url = UpdateVideoRequest {
            url: Some(String::new()),
            ..Default::default()
        };
        assert!(clear_url.ensure_playable(&current).is_err());

        let swap_to_file = UpdateVideoRequest {
            url: Some(String::new()),
            file: Some(Some("videos/a.mp4".into())),
            ..Default::default()
        };
        assert!(swap_to_file.ensure_playable(&current).is_ok());

        let title_only = UpdateVideoRequest {
            title: Some("Renamed".into()),
            ..Default::default()
        };
        assert!(title_only.ensure_playable(&current).is_ok());
    }

    #[test]
    fn test_playback_url_prefers_external() {
        let media = MediaUrls::new("/media/");
        let resp = VideoResponse::new(video("https://youtu.be/abc", Some("videos/a.mp4")), &media);
        assert_eq!(resp.playback_url, "https://youtu.be/abc");
        assert_eq!(resp.file.as_deref(), Some("/media/videos/a.mp4"));

        let resp = VideoResponse::new(video("", Some("videos/a.mp4")), &media);
        assert_eq!(resp.playback_url, "/media/videos/a.mp4");
    }
}
