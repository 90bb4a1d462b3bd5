//! Media upload endpoint.
//!
//! Files are posted as `multipart/form-data` with a single `file` field and
//! land in one of the allow-listed media folders. The stored relative path
//! is what content records reference in their media fields.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_media_upload;
use domain::services::MediaFolder;

/// Form field carrying the file.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Relative path to store in a media field.
    pub path: String,
    /// Absolute URL of the stored file.
    pub url: String,
}

/// Rejects non-image files for image-only folders, judged by extension.
fn check_file_type(folder: MediaFolder, file_name: &str) -> Result<(), ApiError> {
    if !folder.images_only() {
        return Ok(());
    }
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    if mime.type_() == mime_guess::mime::IMAGE {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "Only image files may be uploaded to '{}'.",
            folder.as_str()
        )))
    }
}

/// POST /api/uploads/*folder
pub async fn upload_media(
    State(state): State<AppState>,
    Path(folder): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let folder = MediaFolder::parse(&folder)
        .ok_or_else(|| ApiError::Validation(format!("Unknown media folder '{}'.", folder)))?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::Validation("The file field needs a file name.".into()))?;
        check_file_type(folder, &file_name)?;

        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            return Err(ApiError::Validation("The submitted file is empty.".into()));
        }

        let path = state.media_store.save(folder, &file_name, &bytes).await?;

        info!(folder = folder.as_str(), path = %path, bytes = bytes.len(), "Media uploaded");
        record_media_upload(folder.as_str(), bytes.len());

        let url = state.media.url(&path);
        return Ok((StatusCode::CREATED, Json(UploadResponse { path, url })));
    }

    Err(ApiError::Validation(format!(
        "No '{}' field was submitted.",
        FILE_FIELD
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_only_folder_rejects_pdf() {
        assert!(check_file_type(MediaFolder::AlbumImages, "photo.jpg").is_ok());
        assert!(check_file_type(MediaFolder::AlbumImages, "photo.PNG").is_ok());
        assert!(matches!(
            check_file_type(MediaFolder::AlbumImages, "report.pdf"),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_document_folders_accept_any_type() {
        assert!(check_file_type(MediaFolder::Publications, "report.pdf").is_ok());
        assert!(check_file_type(MediaFolder::Videos, "clip.mp4").is_ok());
    }
}
