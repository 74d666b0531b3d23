//! Seed events for an empty store.
//!
//! The store is populated with these fixtures on first start (or whenever the
//! persisted file is missing or unreadable). The set is fixed: 3 surf events,
//! 2 hiking events, 1 padel event, and 1 running event, all dated today so
//! the demo always shows upcoming activity.

use chrono::Utc;

use super::model::{SkillLevel, SportEvent};

/// Returns the fixed seed fixture: 7 events with stable identifiers.
///
/// Identifiers are stable strings (not UUIDs) so reseeding is idempotent and
/// tests can refer to individual fixture events. `created_at` values are
/// staggered to preserve a deterministic newest-first ordering.
pub fn seed_events() -> Vec<SportEvent> {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    let now = Utc::now().timestamp_millis();

    let seed = |id: &str,
                activity: &str,
                level: SkillLevel,
                location: &str,
                time: &str,
                is_mentor: bool,
                age_ms: i64| SportEvent {
        id: id.to_string(),
        activity: activity.to_string(),
        level,
        location: location.to_string(),
        date: today.clone(),
        time: time.to_string(),
        is_mentor,
        created_at: now - age_ms,
    };

    vec![
        seed(
            "surf-exp-1",
            "Surf",
            SkillLevel::Expert,
            "La Cícer (Las Canteras)",
            "08:30",
            false,
            1000,
        ),
        seed(
            "surf-exp-2",
            "Surf",
            SkillLevel::Expert,
            "La Cícer (Las Canteras)",
            "10:00",
            true,
            2000,
        ),
        seed(
            "surf-beg-mentor",
            "Surf",
            SkillLevel::Beginner,
            "La Cícer (Las Canteras)",
            "11:30",
            true,
            3000,
        ),
        seed(
            "send-int-1",
            "Senderismo",
            SkillLevel::Intermediate,
            "El Confital",
            "09:00",
            false,
            4000,
        ),
        seed(
            "send-int-2",
            "Senderismo",
            SkillLevel::Intermediate,
            "Barranco de Guiniguada",
            "17:00",
            true,
            5000,
        ),
        seed(
            "padel-beg-1",
            "Pádel",
            SkillLevel::Beginner,
            "Parque Romano",
            "19:30",
            false,
            6000,
        ),
        seed(
            "run-int-1",
            "Running",
            SkillLevel::Intermediate,
            "Parque Santa Catalina",
            "20:00",
            false,
            7000,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_seven_events_with_unique_ids() {
        let events = seed_events();
        assert_eq!(events.len(), 7);

        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_seed_surf_split() {
        let events = seed_events();
        let surf = events.iter().filter(|e| e.activity == "Surf").count();
        assert_eq!(surf, 3);
        assert_eq!(events.len() - surf, 4);
    }

    #[test]
    fn test_seed_mentor_flags() {
        let events = seed_events();
        let mentors: Vec<&str> = events
            .iter()
            .filter(|e| e.is_mentor)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(mentors, vec!["surf-exp-2", "surf-beg-mentor", "send-int-2"]);
    }
}
