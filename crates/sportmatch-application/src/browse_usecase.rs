//! Browse use case implementation.
//!
//! Loads the event inventory and runs the discovery sampler on explicit
//! search actions. The initial browse listing shows the whole inventory
//! untagged; forced suggestions only appear once the user searches.

use std::sync::Arc;

use rand::Rng;
use tracing::debug;

use sportmatch_core::discovery::{discover, DisplayItem, SearchFilter};
use sportmatch_core::error::Result;
use sportmatch_core::event::EventRepository;

/// Use case for the browse screen.
pub struct BrowseUseCase {
    /// Repository for event persistence
    events: Arc<dyn EventRepository>,
}

impl BrowseUseCase {
    /// Creates a new `BrowseUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `events` - Repository for event persistence
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Returns the full inventory as an untagged display list (the state of
    /// the browse screen before any search has run).
    pub async fn list_all(&self) -> Result<Vec<DisplayItem>> {
        let events = self.events.load_all().await?;
        Ok(events
            .into_iter()
            .map(|event| DisplayItem {
                event,
                is_forced: false,
            })
            .collect())
    }

    /// Runs a discovery search with a thread-local random source.
    pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<DisplayItem>> {
        self.search_with_rng(filter, &mut rand::thread_rng()).await
    }

    /// Runs a discovery search with an injected random source.
    pub async fn search_with_rng<R: Rng>(
        &self,
        filter: &SearchFilter,
        rng: &mut R,
    ) -> Result<Vec<DisplayItem>> {
        let events = self.events.load_all().await?;
        let items = discover(&events, filter, rng);
        debug!(
            total = events.len(),
            shown = items.len(),
            forced = items.iter().filter(|d| d.is_forced).count(),
            "discovery search"
        );
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sportmatch_core::event::{seed_events, SportEvent};
    use tokio::sync::Mutex;

    /// In-memory repository stub for use case tests.
    struct InMemoryEventRepository {
        events: Mutex<Vec<SportEvent>>,
    }

    impl InMemoryEventRepository {
        fn seeded() -> Self {
            Self {
                events: Mutex::new(seed_events()),
            }
        }
    }

    #[async_trait]
    impl EventRepository for InMemoryEventRepository {
        async fn load_all(&self) -> Result<Vec<SportEvent>> {
            Ok(self.events.lock().await.clone())
        }

        async fn save_all(&self, events: &[SportEvent]) -> Result<()> {
            *self.events.lock().await = events.to_vec();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_list_all_is_untagged() {
        let usecase = BrowseUseCase::new(Arc::new(InMemoryEventRepository::seeded()));
        let display = usecase.list_all().await.unwrap();
        assert_eq!(display.len(), 7);
        assert!(display.iter().all(|d| !d.is_forced));
    }

    #[tokio::test]
    async fn test_search_tags_forced_suggestions() {
        let usecase = BrowseUseCase::new(Arc::new(InMemoryEventRepository::seeded()));
        let filter = SearchFilter {
            activity: Some("Surf".to_string()),
            level: None,
        };
        let mut rng = StdRng::seed_from_u64(11);
        let display = usecase.search_with_rng(&filter, &mut rng).await.unwrap();

        assert_eq!(display.iter().filter(|d| !d.is_forced).count(), 3);
        assert_eq!(display.iter().filter(|d| d.is_forced).count(), 2);
    }
}
