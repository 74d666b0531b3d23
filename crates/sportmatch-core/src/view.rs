//! View router state machine.
//!
//! An explicit finite selection among the five application screens, driven
//! by discrete navigation events and independent of any rendering
//! technology. The transition into `Chat` carries the joined event as
//! payload and is only reachable by joining from `Browse`; a navigation to
//! `Chat` without a carried event is invalid and falls back to `Home`.

use serde::{Deserialize, Serialize};

use crate::event::SportEvent;

/// The five mutually exclusive application screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    CreateEvent,
    Browse,
    Chat,
    Profile,
}

/// The router: current screen plus the at-most-one event carried into chat.
///
/// There is no terminal state; the router runs until the host process exits.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    current: View,
    carried_event: Option<SportEvent>,
}

impl ViewRouter {
    /// Creates a router at the initial `Home` screen.
    pub fn new() -> Self {
        Self {
            current: View::Home,
            carried_event: None,
        }
    }

    /// The currently selected screen.
    pub fn current(&self) -> View {
        self.current
    }

    /// The event carried into the chat screen, if any.
    pub fn carried_event(&self) -> Option<&SportEvent> {
        self.carried_event.as_ref()
    }

    /// Navigates to a screen.
    ///
    /// Any screen may be reached from any other, except that `Chat` requires
    /// a carried event: without one the router falls back to `Home` instead
    /// of rendering a broken screen. Navigating anywhere but `Chat` clears
    /// the carried event.
    pub fn navigate(&mut self, target: View) {
        match target {
            View::Chat if self.carried_event.is_none() => {
                self.current = View::Home;
            }
            View::Chat => {
                self.current = View::Chat;
            }
            other => {
                self.carried_event = None;
                self.current = other;
            }
        }
    }

    /// Joins an event from the browse screen, entering chat with the event
    /// as payload.
    ///
    /// Returns false (and stays put) when not on `Browse`, the only screen
    /// chat is reachable from.
    pub fn join_event(&mut self, event: SportEvent) -> bool {
        if self.current != View::Browse {
            return false;
        }
        self.carried_event = Some(event);
        self.current = View::Chat;
        true
    }

    /// Leaves the chat screen, discarding the carried event.
    pub fn leave_chat(&mut self) {
        self.carried_event = None;
        self.current = View::Home;
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::seed_events;

    fn some_event() -> SportEvent {
        seed_events().into_iter().next().unwrap()
    }

    #[test]
    fn test_initial_state_is_home() {
        let router = ViewRouter::new();
        assert_eq!(router.current(), View::Home);
        assert!(router.carried_event().is_none());
    }

    #[test]
    fn test_free_navigation_between_plain_screens() {
        let mut router = ViewRouter::new();
        router.navigate(View::Browse);
        assert_eq!(router.current(), View::Browse);
        router.navigate(View::Profile);
        assert_eq!(router.current(), View::Profile);
        router.navigate(View::CreateEvent);
        assert_eq!(router.current(), View::CreateEvent);
        router.navigate(View::Home);
        assert_eq!(router.current(), View::Home);
    }

    #[test]
    fn test_chat_without_event_falls_back_to_home() {
        let mut router = ViewRouter::new();
        router.navigate(View::Browse);
        router.navigate(View::Chat);
        assert_eq!(router.current(), View::Home);
        assert!(router.carried_event().is_none());
    }

    #[test]
    fn test_join_event_from_browse_carries_payload() {
        let mut router = ViewRouter::new();
        router.navigate(View::Browse);
        let event = some_event();
        assert!(router.join_event(event.clone()));
        assert_eq!(router.current(), View::Chat);
        assert_eq!(router.carried_event(), Some(&event));
    }

    #[test]
    fn test_join_event_outside_browse_is_rejected() {
        let mut router = ViewRouter::new();
        assert!(!router.join_event(some_event()));
        assert_eq!(router.current(), View::Home);
        assert!(router.carried_event().is_none());
    }

    #[test]
    fn test_leave_chat_returns_home_and_drops_payload() {
        let mut router = ViewRouter::new();
        router.navigate(View::Browse);
        router.join_event(some_event());
        router.leave_chat();
        assert_eq!(router.current(), View::Home);
        assert!(router.carried_event().is_none());
    }

    #[test]
    fn test_leaving_for_other_screens_clears_payload() {
        let mut router = ViewRouter::new();
        router.navigate(View::Browse);
        router.join_event(some_event());
        router.navigate(View::Profile);
        assert!(router.carried_event().is_none());
        // Chat is no longer reachable without a fresh join.
        router.navigate(View::Chat);
        assert_eq!(router.current(), View::Home);
    }
}
