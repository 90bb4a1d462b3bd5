//! Local-disk media store.

use std::path::PathBuf;

use domain::services::media::sanitize_file_name;
use domain::services::{MediaFolder, MediaStore, MediaStoreError};
use tracing::debug;
use uuid::Uuid;

/// Writes uploads below a root directory, one sub-folder per media folder.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

/// Relative media path for a new upload.
///
/// A short random prefix keeps repeated uploads of the same file apart.
pub fn upload_path(folder: MediaFolder, file_name: &str) -> Result<String, MediaStoreError> {
    let clean = sanitize_file_name(file_name)
        .ok_or_else(|| MediaStoreError::InvalidFileName(file_name.to_string()))?;
    let prefix = Uuid::new_v4().simple().to_string();
    Ok(format!("{}/{}-{}", folder.as_str(), &prefix[..8], clean))
}

#[async_trait::async_trait]
impl MediaStore for LocalMediaStore {
    async fn save(
        &self,
        folder: MediaFolder,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, MediaStoreError> {
        let relative = upload_path(folder, file_name)?;
        let target = self.root.join(&relative);

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, bytes).await?;

        debug!(path = %relative, bytes = bytes.len(), "Media file stored");
        Ok(relative)
    }
}
