//! The discovery sampler.
//!
//! A pure transform invoked on an explicit search action: partition the event
//! list by the filter, then append a small uniformly drawn sample of
//! non-matching events so every search surfaces activity outside the user's
//! stated preferences.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::event::{SkillLevel, SportEvent};

/// Share of the total inventory that is forcibly surfaced per search.
///
/// The share is computed against the unfiltered total, not against the
/// leftover pool, so forced exposure stays proportional to overall inventory.
const FORCED_SHARE: f64 = 0.15;

/// Bounds on the forced sample size when the non-matching pool is non-empty.
const FORCED_MIN: usize = 1;
const FORCED_MAX: usize = 2;

/// Filter selections for a search. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Activity label to match exactly, or `None` for all activities
    pub activity: Option<String>,
    /// Skill level to match, or `None` for all levels
    pub level: Option<SkillLevel>,
}

impl SearchFilter {
    /// The filter that matches every event.
    pub fn any() -> Self {
        Self::default()
    }

    /// Returns true when the event satisfies both filter predicates.
    pub fn matches(&self, event: &SportEvent) -> bool {
        let activity_ok = self
            .activity
            .as_deref()
            .is_none_or(|activity| event.activity == activity);
        let level_ok = self.level.is_none_or(|level| event.level == level);
        activity_ok && level_ok
    }
}

/// A single entry of the browse display list.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub event: SportEvent,
    /// True when the event was injected from outside the filter match
    pub is_forced: bool,
}

/// Computes the forced sample size for a search.
///
/// `clamp(ceil(total * 0.15), 1, 2)` while the non-matching pool is
/// non-empty, zero otherwise. The result is additionally capped by the pool
/// size since the draw is without replacement.
pub fn forced_sample_size(total: usize, non_matching: usize) -> usize {
    if non_matching == 0 {
        return 0;
    }
    let raw = (total as f64 * FORCED_SHARE).ceil() as usize;
    raw.clamp(FORCED_MIN, FORCED_MAX).min(non_matching)
}

/// Runs a discovery search over `events`.
///
/// Returns all matching events in their original relative order, followed by
/// the forced sample drawn uniformly without replacement from the
/// non-matching pool, each entry tagged with its origin. Pure apart from the
/// injected random source; an empty input yields an empty output.
pub fn discover<R: Rng + ?Sized>(
    events: &[SportEvent],
    filter: &SearchFilter,
    rng: &mut R,
) -> Vec<DisplayItem> {
    let (matching, non_matching): (Vec<&SportEvent>, Vec<&SportEvent>) =
        events.iter().partition(|event| filter.matches(event));

    let forced_len = forced_sample_size(events.len(), non_matching.len());

    let mut display: Vec<DisplayItem> = matching
        .into_iter()
        .map(|event| DisplayItem {
            event: event.clone(),
            is_forced: false,
        })
        .collect();

    // Uniform draw without replacement; replaces the comparator-shuffle of
    // earlier prototypes, which is known to be biased.
    for index in rand::seq::index::sample(rng, non_matching.len(), forced_len) {
        display.push(DisplayItem {
            event: non_matching[index].clone(),
            is_forced: true,
        });
    }

    display
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::seed_events;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn surf_filter() -> SearchFilter {
        SearchFilter {
            activity: Some("Surf".to_string()),
            level: None,
        }
    }

    #[test]
    fn test_empty_events_yield_empty_display() {
        let mut rng = StdRng::seed_from_u64(1);
        let display = discover(&[], &surf_filter(), &mut rng);
        assert!(display.is_empty());

        let display = discover(&[], &SearchFilter::any(), &mut rng);
        assert!(display.is_empty());
    }

    #[test]
    fn test_forced_sample_size_formula() {
        // Empty non-matching pool disables forcing entirely.
        assert_eq!(forced_sample_size(7, 0), 0);
        // ceil(1 * 0.15) = 1
        assert_eq!(forced_sample_size(1, 1), 1);
        // ceil(3 * 0.15) = 1
        assert_eq!(forced_sample_size(3, 2), 1);
        // ceil(7 * 0.15) = 2
        assert_eq!(forced_sample_size(7, 4), 2);
        // ceil(20 * 0.15) = 3, clamped to 2
        assert_eq!(forced_sample_size(20, 10), 2);
        // Capped by the pool when the draw is without replacement.
        assert_eq!(forced_sample_size(20, 1), 1);
    }

    #[test]
    fn test_seed_fixture_surf_search() {
        let events = seed_events();
        let mut rng = StdRng::seed_from_u64(42);
        let display = discover(&events, &surf_filter(), &mut rng);

        let matching: Vec<&DisplayItem> = display.iter().filter(|d| !d.is_forced).collect();
        let forced: Vec<&DisplayItem> = display.iter().filter(|d| d.is_forced).collect();

        // The 3 surf events match regardless of level, in stored order.
        let matching_ids: Vec<&str> = matching.iter().map(|d| d.event.id.as_str()).collect();
        assert_eq!(matching_ids, vec!["surf-exp-1", "surf-exp-2", "surf-beg-mentor"]);

        // Forced size per formula, drawn from the 4 non-surf events.
        assert_eq!(forced.len(), forced_sample_size(7, 4));
        assert!(forced.iter().all(|d| d.event.activity != "Surf"));

        // Matching comes first, forced items trail.
        let first_forced = display.iter().position(|d| d.is_forced).unwrap();
        assert!(display[..first_forced].iter().all(|d| !d.is_forced));
    }

    #[test]
    fn test_no_duplicate_ids_in_display() {
        let events = seed_events();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let display = discover(&events, &surf_filter(), &mut rng);
            let ids: HashSet<&str> = display.iter().map(|d| d.event.id.as_str()).collect();
            assert_eq!(ids.len(), display.len());
        }
    }

    #[test]
    fn test_zero_match_filter_still_shows_forced_items() {
        let events = seed_events();
        let filter = SearchFilter {
            activity: Some("Esgrima".to_string()),
            level: None,
        };
        let mut rng = StdRng::seed_from_u64(7);
        let display = discover(&events, &filter, &mut rng);

        assert!(!display.is_empty());
        assert!(display.iter().all(|d| d.is_forced));
        assert_eq!(display.len(), forced_sample_size(events.len(), events.len()));
    }

    #[test]
    fn test_all_match_filter_has_no_forced_items() {
        let events = seed_events();
        let mut rng = StdRng::seed_from_u64(9);
        let display = discover(&events, &SearchFilter::any(), &mut rng);

        assert_eq!(display.len(), events.len());
        assert!(display.iter().all(|d| !d.is_forced));
    }

    #[test]
    fn test_combined_activity_and_level_filter() {
        let events = seed_events();
        let filter = SearchFilter {
            activity: Some("Surf".to_string()),
            level: Some(SkillLevel::Expert),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let display = discover(&events, &filter, &mut rng);

        let matching: Vec<&DisplayItem> = display.iter().filter(|d| !d.is_forced).collect();
        assert_eq!(matching.len(), 2);
        assert!(matching
            .iter()
            .all(|d| d.event.activity == "Surf" && d.event.level == SkillLevel::Expert));
    }

    #[test]
    fn test_forced_draw_is_without_replacement_across_seeds() {
        // With a 4-event pool and a forced size of 2, the two drawn events
        // must always differ.
        let events = seed_events();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let display = discover(&events, &surf_filter(), &mut rng);
            let forced: Vec<&str> = display
                .iter()
                .filter(|d| d.is_forced)
                .map(|d| d.event.id.as_str())
                .collect();
            assert_eq!(forced.len(), 2);
            assert_ne!(forced[0], forced[1]);
        }
    }
}
