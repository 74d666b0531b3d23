//! Profile domain models.

use serde::{Deserialize, Serialize};

use crate::event::SkillLevel;

/// An earned gamification badge.
///
/// Badges are static descriptive records with no lifecycle: they are shipped
/// as fixtures and never created or mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    /// Emoji glyph shown next to the title
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Accent color token consumed by the renderer
    pub color: String,
}

/// A past event the user took part in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub activity: String,
    pub location: String,
    /// Relative date label (e.g., "Hace 2 días")
    pub when: String,
}

/// The profile card data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub bio: String,
    pub level: SkillLevel,
    /// Progress toward the next level, in percent
    pub progress_to_next: u8,
    pub member_since: String,
}
