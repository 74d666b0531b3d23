//! Static activity and venue catalogs.
//!
//! These lists are fixed product content: the activities offered by the
//! creation form, the official Puntos de Interés Local (PIL) used as event
//! venues, and the shorter activity list the browse filter exposes.

/// Activities offered by the event creation form.
pub const CREATE_ACTIVITIES: [&str; 15] = [
    "Surf / Bodyboard",
    "Fútbol 7",
    "Fútbol 11",
    "Fútbol Sala",
    "Baloncesto",
    "Padel",
    "Tenis",
    "Golf",
    "Voleibol Playa",
    "Balonmano",
    "Trail Running / Senderismo",
    "Ciclismo / MTB",
    "Calistenia (Entreno callejero)",
    "Yoga al aire libre",
    "Buceo / Snorkel",
];

/// Official local venues (PIL) an event can be pinned to.
pub const PIL_VENUES: [&str; 11] = [
    "Zona Las Canteras / Cícer (Playa)",
    "Zona Las Canteras / Playa Chica (Playa)",
    "Zona El Confital / La Isleta",
    "Zona Puerto / Parque Santa Catalina",
    "Zona Ciudad Jardín / Parque Romano",
    "Zona Triana / Vegueta",
    "Zona Siete Palmas",
    "Zona Escaleritas / La Ballena",
    "Zona Tafira / Bandama (Montaña/Golf)",
    "Zona Cumbre / Roque Nublo",
    "Zona Sur / Maspalomas",
];

/// Activity labels exposed by the browse filter ("All" is a separate sentinel).
pub const BROWSE_ACTIVITIES: [&str; 6] = [
    "Surf",
    "Senderismo",
    "Pádel",
    "Running",
    "Crossfit Beach",
    "Voley Playa",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_have_no_duplicates() {
        let mut activities: Vec<&str> = CREATE_ACTIVITIES.to_vec();
        activities.sort_unstable();
        activities.dedup();
        assert_eq!(activities.len(), CREATE_ACTIVITIES.len());

        let mut venues: Vec<&str> = PIL_VENUES.to_vec();
        venues.sort_unstable();
        venues.dedup();
        assert_eq!(venues.len(), PIL_VENUES.len());
    }
}
