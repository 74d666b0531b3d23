//! Versioned file DTOs.
//!
//! Persisted documents carry a `schema_version` field so a future format
//! change can dispatch on it at load time. Domain models stay free of
//! storage concerns; conversions live here.

use serde::{Deserialize, Serialize};
use sportmatch_core::event::{SkillLevel, SportEvent};

/// Current schema version of the event store file.
pub const EVENTS_FILE_V1_VERSION: &str = "1.0.0";

/// Current schema version of the avatar slot file.
pub const PROFILE_IMAGE_V1_VERSION: &str = "1.0.0";

/// On-disk form of a single event (V1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecordV1 {
    pub id: String,
    pub activity: String,
    pub level: SkillLevel,
    pub location: String,
    pub date: String,
    pub time: String,
    pub is_mentor: bool,
    pub created_at: i64,
}

impl From<&SportEvent> for EventRecordV1 {
    fn from(event: &SportEvent) -> Self {
        Self {
            id: event.id.clone(),
            activity: event.activity.clone(),
            level: event.level,
            location: event.location.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            is_mentor: event.is_mentor,
            created_at: event.created_at,
        }
    }
}

impl From<EventRecordV1> for SportEvent {
    fn from(record: EventRecordV1) -> Self {
        Self {
            id: record.id,
            activity: record.activity,
            level: record.level,
            location: record.location,
            date: record.date,
            time: record.time,
            is_mentor: record.is_mentor,
            created_at: record.created_at,
        }
    }
}

/// On-disk form of the event store (V1): `events.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsFileV1 {
    pub schema_version: String,
    #[serde(default)]
    pub events: Vec<EventRecordV1>,
}

impl EventsFileV1 {
    /// Builds the on-disk document for an event sequence, preserving order.
    pub fn from_events(events: &[SportEvent]) -> Self {
        Self {
            schema_version: EVENTS_FILE_V1_VERSION.to_string(),
            events: events.iter().map(EventRecordV1::from).collect(),
        }
    }

    /// Converts back into domain events, preserving order.
    pub fn into_events(self) -> Vec<SportEvent> {
        self.events.into_iter().map(SportEvent::from).collect()
    }
}

/// On-disk form of the avatar slot (V1): `profile_image.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileImageFileV1 {
    pub schema_version: String,
    /// Self-contained `data:` URL for the image
    pub data_url: String,
}

impl ProfileImageFileV1 {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            schema_version: PROFILE_IMAGE_V1_VERSION.to_string(),
            data_url: data_url.into(),
        }
    }
}
