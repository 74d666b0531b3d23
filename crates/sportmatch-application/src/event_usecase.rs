//! Event creation use case implementation.

use std::sync::Arc;

use tracing::info;

use sportmatch_core::error::{Result, SportMatchError};
use sportmatch_core::event::{EventRepository, SkillLevel, SportEvent};

/// Input for creating a new event.
///
/// Mirrors the creation form: activity and venue come from the catalogs,
/// date and time are free inputs, and the mentor flag marks the organizer as
/// willing to guide beginners.
#[derive(Debug, Clone)]
pub struct NewEventRequest {
    pub activity: String,
    pub level: SkillLevel,
    pub location: String,
    pub date: String,
    pub time: String,
    pub is_mentor: bool,
}

/// Use case for publishing new events.
pub struct EventUseCase {
    /// Repository for event persistence
    events: Arc<dyn EventRepository>,
}

impl EventUseCase {
    /// Creates a new `EventUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `events` - Repository for event persistence
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Validates the request, builds the event, and publishes it.
    ///
    /// The new event is prepended so the store reads newest first. Returns
    /// the published event.
    pub async fn create(&self, request: NewEventRequest) -> Result<SportEvent> {
        validate_required("activity", &request.activity)?;
        validate_required("location", &request.location)?;
        validate_required("date", &request.date)?;
        validate_required("time", &request.time)?;

        let event = SportEvent::new(
            request.activity.trim(),
            request.level,
            request.location.trim(),
            request.date.trim(),
            request.time.trim(),
            request.is_mentor,
        );

        let mut events = self.events.load_all().await?;
        events.insert(0, event.clone());
        self.events.save_all(&events).await?;

        info!(id = %event.id, activity = %event.activity, "event published");
        Ok(event)
    }
}

fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SportMatchError::validation(format!(
            "required field '{}' is blank",
            field
        )));
    }
    Ok(())
}
