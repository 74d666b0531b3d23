//! Event repository trait.
//!
//! Defines the interface for event persistence operations.

use super::model::SportEvent;
use crate::error::Result;

/// An abstract repository for managing event persistence.
///
/// This trait defines the contract for persisting and retrieving events,
/// decoupling the application's core logic from the specific storage
/// mechanism (e.g., TOML file, database, remote API).
///
/// # Implementation Notes
///
/// Implementations should handle:
/// - Seeding an empty store with the fixture events before the first read
/// - Treating malformed persisted data as absent
/// - Preserving the stored order, so a save-then-load round-trip yields a
///   field-for-field identical sequence
#[async_trait::async_trait]
pub trait EventRepository: Send + Sync {
    /// Retrieves all events from storage.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<SportEvent>)`: All stored events, in stored order
    /// - `Err(SportMatchError)`: Error if retrieval fails
    async fn load_all(&self) -> Result<Vec<SportEvent>>;

    /// Saves all events to storage, replacing existing ones.
    ///
    /// # Arguments
    ///
    /// * `events` - The events to save
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Events saved successfully
    /// - `Err(SportMatchError)`: Error if save fails
    async fn save_all(&self, events: &[SportEvent]) -> Result<()>;
}
