//! Event domain model.
//!
//! Represents informal sports meetups that users create, browse, and join.
//! Events are immutable once created: they are written by the creation form
//! or by fixture seeding and removed only by clearing the whole store.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

/// Required skill level for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Beginner
    }
}

/// A sports meetup event.
///
/// Events are the central entity of SportMatch: a free-text activity at a
/// fixed local venue (PIL), on a date and time, with a required skill level
/// and an optional mentor flag marking the event as suitable for guiding
/// beginners.
///
/// Invariant: `id` is unique within the event store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportEvent {
    /// Unique identifier (UUID for user-created events)
    pub id: String,
    /// Activity label (e.g., "Surf", "Pádel")
    pub activity: String,
    /// Required skill level
    pub level: SkillLevel,
    /// Venue label, drawn from the PIL catalog for user-created events
    pub location: String,
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Clock time in `HH:MM` form
    pub time: String,
    /// Whether the organizer offers to mentor beginners
    pub is_mentor: bool,
    /// Creation timestamp (epoch milliseconds)
    pub created_at: i64,
}

impl SportEvent {
    /// Creates a new event with a fresh UUID and the current timestamp.
    ///
    /// Field validation is the caller's concern; see the event use case.
    pub fn new(
        activity: impl Into<String>,
        level: SkillLevel,
        location: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        is_mentor: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            activity: activity.into(),
            level,
            location: location.into(),
            date: date.into(),
            time: time.into(),
            is_mentor,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = SportEvent::new("Surf", SkillLevel::Expert, "La Cícer", "2026-08-06", "08:30", false);
        let b = SportEvent::new("Surf", SkillLevel::Expert, "La Cícer", "2026-08-06", "08:30", false);
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
        assert!(a.created_at > 0);
    }

    #[test]
    fn test_skill_level_wire_form() {
        let json = serde_json::to_string(&SkillLevel::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");
        let back: SkillLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SkillLevel::Intermediate);
    }

    #[test]
    fn test_skill_level_display_and_parse() {
        assert_eq!(SkillLevel::Expert.to_string(), "Expert");
        let parsed: SkillLevel = "beginner".parse().unwrap();
        assert_eq!(parsed, SkillLevel::Beginner);
    }
}
