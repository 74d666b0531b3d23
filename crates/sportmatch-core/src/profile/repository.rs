//! Profile image repository trait.
//!
//! Defines the interface for the single-slot avatar image store. The image
//! is a self-contained `data:` URL string and is keyed independently of the
//! event store.

use crate::error::Result;

/// An abstract single-slot store for the profile avatar.
///
/// Implementations should treat malformed persisted content as absent rather
/// than surfacing an error to the user.
#[async_trait::async_trait]
pub trait ProfileImageRepository: Send + Sync {
    /// Retrieves the stored avatar.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(String))`: The stored `data:` URL
    /// - `Ok(None)`: No avatar stored (or the slot was unreadable)
    /// - `Err(SportMatchError)`: Error if retrieval fails
    async fn load_image(&self) -> Result<Option<String>>;

    /// Stores the avatar, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `data_url` - A self-contained `data:` URL for the image
    async fn save_image(&self, data_url: &str) -> Result<()>;
}
