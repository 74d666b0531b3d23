//! Profile use case implementation.

use std::sync::Arc;

use tracing::info;

use sportmatch_core::error::Result;
use sportmatch_core::profile::{
    demo_profile, Badge, HistoryEntry, ProfileImageRepository, UserProfile, BADGES, HISTORY,
};

/// Use case for the profile screen.
pub struct ProfileUseCase {
    /// Single-slot store for the avatar image
    images: Arc<dyn ProfileImageRepository>,
}

impl ProfileUseCase {
    /// Creates a new `ProfileUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `images` - Single-slot store for the avatar image
    pub fn new(images: Arc<dyn ProfileImageRepository>) -> Self {
        Self { images }
    }

    /// The profile card.
    pub fn profile(&self) -> UserProfile {
        demo_profile()
    }

    /// The earned badge collection.
    pub fn badges(&self) -> &'static [Badge] {
        BADGES.as_slice()
    }

    /// The recent activity history.
    pub fn history(&self) -> &'static [HistoryEntry] {
        HISTORY.as_slice()
    }

    /// Loads the stored avatar, if any.
    pub async fn avatar(&self) -> Result<Option<String>> {
        self.images.load_image().await
    }

    /// Stores a new avatar (a self-contained `data:` URL).
    pub async fn set_avatar(&self, data_url: &str) -> Result<()> {
        self.images.save_image(data_url).await?;
        info!(bytes = data_url.len(), "avatar updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct InMemoryImageRepository {
        slot: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ProfileImageRepository for InMemoryImageRepository {
        async fn load_image(&self) -> Result<Option<String>> {
            Ok(self.slot.lock().await.clone())
        }

        async fn save_image(&self, data_url: &str) -> Result<()> {
            *self.slot.lock().await = Some(data_url.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_avatar_slot_round_trip() {
        let usecase = ProfileUseCase::new(Arc::new(InMemoryImageRepository::default()));

        assert!(usecase.avatar().await.unwrap().is_none());
        usecase.set_avatar("data:image/png;base64,Zm9v").await.unwrap();
        assert_eq!(
            usecase.avatar().await.unwrap().as_deref(),
            Some("data:image/png;base64,Zm9v")
        );
    }

    #[tokio::test]
    async fn test_fixture_accessors() {
        let usecase = ProfileUseCase::new(Arc::new(InMemoryImageRepository::default()));
        assert_eq!(usecase.badges().len(), 4);
        assert_eq!(usecase.history().len(), 2);
        assert_eq!(usecase.profile().name, "Chema Ruiz");
    }
}
