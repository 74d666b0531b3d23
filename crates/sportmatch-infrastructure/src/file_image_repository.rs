//! Profile image repository implementation.
//!
//! A single-slot JSON store holding the avatar as a self-contained `data:`
//! URL, the same shape the image lands in after the upload encoding step.
//!
//! File location: `~/.config/sportmatch/profile_image.json`

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use sportmatch_core::error::{Result, SportMatchError};
use sportmatch_core::profile::ProfileImageRepository;

use crate::dto::ProfileImageFileV1;
use crate::paths::SportMatchPaths;

/// Reads an image file and encodes it as a `data:<mime>;base64,<payload>` URL.
///
/// The content type is guessed from the file extension; anything that does
/// not look like an image is rejected with a validation error.
pub async fn encode_data_url(path: &Path) -> Result<String> {
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    if mime.type_() != mime_guess::mime::IMAGE {
        return Err(SportMatchError::validation(format!(
            "not an image file: {}",
            path.display()
        )));
    }

    let bytes = fs::read(path)
        .await
        .map_err(|e| SportMatchError::io(format!("failed to read {}: {}", path.display(), e)))?;

    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

/// File-based single-slot avatar store.
pub struct FileImageRepository {
    path: PathBuf,
}

impl FileImageRepository {
    const SLOT_FILENAME: &'static str = "profile_image.json";

    /// Creates a repository over the default per-user slot location.
    pub fn new() -> Result<Self> {
        let path = SportMatchPaths::profile_image_file()
            .map_err(|e| SportMatchError::data_access(e.to_string()))?;
        Ok(Self { path })
    }

    /// Creates a repository storing under a custom base directory (used by
    /// tests and the `--data-dir` flag).
    pub fn with_base_path(base: PathBuf) -> Self {
        Self {
            path: base.join(Self::SLOT_FILENAME),
        }
    }
}

#[async_trait]
impl ProfileImageRepository for FileImageRepository {
    async fn load_image(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SportMatchError::io(format!("failed to read avatar slot: {}", e)))?;

        match serde_json::from_str::<ProfileImageFileV1>(&content) {
            Ok(slot) => Ok(Some(slot.data_url)),
            Err(err) => {
                // Malformed content is treated as an empty slot.
                warn!(error = %err, "avatar slot unreadable, treating as absent");
                Ok(None)
            }
        }
    }

    async fn save_image(&self, data_url: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SportMatchError::io(format!("failed to create directory: {}", e)))?;
        }

        let serialized = serde_json::to_string_pretty(&ProfileImageFileV1::new(data_url))?;

        fs::write(&self.path, serialized)
            .await
            .map_err(|e| SportMatchError::io(format!("failed to write avatar slot: {}", e)))?;

        Ok(())
    }
}
