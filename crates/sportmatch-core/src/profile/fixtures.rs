//! Static profile content.
//!
//! The demo ships a single fixture profile with a fixed badge and history
//! collection; none of it is created or mutated at runtime.

use once_cell::sync::Lazy;

use super::model::{Badge, HistoryEntry, UserProfile};
use crate::event::SkillLevel;

/// The earned badge collection.
pub static BADGES: Lazy<Vec<Badge>> = Lazy::new(|| {
    let badge = |id: &str, icon: &str, title: &str, description: &str, color: &str| Badge {
        id: id.to_string(),
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        color: color.to_string(),
    };

    vec![
        badge(
            "b1",
            "🏆",
            "Mentor Verificado",
            "Ayuda a principiantes a empezar.",
            "yellow",
        ),
        badge(
            "b2",
            "🌊",
            "Amante del Mar",
            "5 eventos en la costa de la isla.",
            "cyan",
        ),
        badge(
            "b3",
            "⭐",
            "Compañero 5 Estrellas",
            "Valoración máxima en deportividad.",
            "magenta",
        ),
        badge(
            "b4",
            "🥾",
            "Explorador Cumbres",
            "Completó 3 rutas de senderismo.",
            "green",
        ),
    ]
});

/// The recent activity history, newest first.
pub static HISTORY: Lazy<Vec<HistoryEntry>> = Lazy::new(|| {
    vec![
        HistoryEntry {
            activity: "Pádel".to_string(),
            location: "Parque Romano".to_string(),
            when: "Hace 2 días".to_string(),
        },
        HistoryEntry {
            activity: "Surf".to_string(),
            location: "La Cícer".to_string(),
            when: "Hace 5 días".to_string(),
        },
    ]
});

/// Returns the fixture profile card.
pub fn demo_profile() -> UserProfile {
    UserProfile {
        name: "Chema Ruiz".to_string(),
        bio: "Residente en Las Palmas. Aficionado al deporte al aire libre y la vida sana. \
              Busco compañeros puntuales para partidos de nivel intermedio."
            .to_string(),
        level: SkillLevel::Intermediate,
        progress_to_next: 75,
        member_since: "Diciembre 2023".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_are_unique() {
        let mut ids: Vec<&str> = BADGES.iter().map(|b| b.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), BADGES.len());
        assert_eq!(BADGES.len(), 4);
    }

    #[test]
    fn test_demo_profile_progress_is_a_percentage() {
        let profile = demo_profile();
        assert!(profile.progress_to_next <= 100);
        assert_eq!(profile.level, SkillLevel::Intermediate);
    }
}
