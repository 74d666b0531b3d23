//! Event repository implementation.
//!
//! Stores the event list as a versioned TOML document.
//!
//! File location: `~/.config/sportmatch/events.toml`
//!
//! Seeding policy: a missing, empty, or malformed store is treated as absent
//! and repopulated with the fixture events before the first read returns, so
//! the browse view never starts from nothing and corrupt data is never
//! surfaced to the user.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, warn};

use sportmatch_core::error::{Result, SportMatchError};
use sportmatch_core::event::{seed_events, EventRepository, SportEvent};

use crate::dto::EventsFileV1;
use crate::paths::SportMatchPaths;
use crate::storage::AtomicTomlFile;

/// File-based event repository over a versioned `events.toml`.
pub struct TomlEventRepository {
    file: AtomicTomlFile<EventsFileV1>,
}

impl TomlEventRepository {
    const STORE_FILENAME: &'static str = "events.toml";

    /// Creates a repository over the default per-user store location.
    pub fn new() -> Result<Self> {
        let path = SportMatchPaths::events_file()
            .map_err(|e| SportMatchError::data_access(e.to_string()))?;
        Ok(Self {
            file: AtomicTomlFile::new(path),
        })
    }

    /// Creates a repository storing under a custom base directory (used by
    /// tests and the `--data-dir` flag).
    pub fn with_base_path(base: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(base.join(Self::STORE_FILENAME)),
        }
    }

    /// Writes the fixture events and returns them.
    fn reseed(&self) -> Result<Vec<SportEvent>> {
        let events = seed_events();
        self.write(&events)?;
        Ok(events)
    }

    fn write(&self, events: &[SportEvent]) -> Result<()> {
        self.file.save(&EventsFileV1::from_events(events))
    }
}

#[async_trait]
impl EventRepository for TomlEventRepository {
    async fn load_all(&self) -> Result<Vec<SportEvent>> {
        match self.file.load() {
            Ok(Some(doc)) if !doc.events.is_empty() => {
                let events = doc.into_events();
                debug!(count = events.len(), "loaded event store");
                Ok(events)
            }
            Ok(_) => {
                debug!("event store missing or empty, seeding fixtures");
                self.reseed()
            }
            Err(err) => {
                warn!(error = %err, "event store unreadable, reseeding fixtures");
                self.reseed()
            }
        }
    }

    async fn save_all(&self, events: &[SportEvent]) -> Result<()> {
        self.write(events)?;
        debug!(count = events.len(), "saved event store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportmatch_core::event::SkillLevel;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_empty_store_is_seeded_on_first_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlEventRepository::with_base_path(temp_dir.path().to_path_buf());

        let events = repo.load_all().await.unwrap();
        assert_eq!(events.len(), 7);
        // The seed was also persisted.
        assert!(temp_dir.path().join("events.toml").exists());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips_identically() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlEventRepository::with_base_path(temp_dir.path().to_path_buf());

        let mut events = seed_events();
        events.insert(
            0,
            SportEvent::new(
                "Padel",
                SkillLevel::Intermediate,
                "Zona Ciudad Jardín / Parque Romano",
                "2026-08-09",
                "18:00",
                true,
            ),
        );

        repo.save_all(&events).await.unwrap();
        let loaded = repo.load_all().await.unwrap();
        assert_eq!(loaded, events);
    }

    #[tokio::test]
    async fn test_malformed_store_is_treated_as_absent_and_reseeded() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("events.toml"), "this is { not toml").unwrap();
        let repo = TomlEventRepository::with_base_path(temp_dir.path().to_path_buf());

        let events = repo.load_all().await.unwrap();
        assert_eq!(events.len(), 7);

        // The store was rewritten with a valid document.
        let repo2 = TomlEventRepository::with_base_path(temp_dir.path().to_path_buf());
        let reloaded = repo2.load_all().await.unwrap();
        assert_eq!(reloaded.len(), 7);
    }

    #[tokio::test]
    async fn test_stored_empty_list_is_reseeded() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlEventRepository::with_base_path(temp_dir.path().to_path_buf());

        repo.save_all(&[]).await.unwrap();
        let events = repo.load_all().await.unwrap();
        assert_eq!(events.len(), 7);
    }
}
