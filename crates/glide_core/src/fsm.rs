//! Event-driven state transitions
//!
//! Widgets describe their interaction states as a small `Copy` enum and
//! implement [`StateTransitions`] to map `(state, event)` pairs to a new
//! state.

use std::hash::Hash;

use crate::events::EventType;

/// Trait for state enums driven by event ids
///
/// # Example
///
/// ```rust
/// use glide_core::event_types::*;
/// use glide_core::StateTransitions;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// enum Grab {
///     #[default]
///     Released,
///     Held,
/// }
///
/// impl StateTransitions for Grab {
///     fn on_event(&self, event: u32) -> Option<Self> {
///         match (self, event) {
///             (Grab::Released, POINTER_DOWN) => Some(Grab::Held),
///             (Grab::Held, POINTER_UP) => Some(Grab::Released),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Grab::Released.on_event(POINTER_DOWN), Some(Grab::Held));
/// assert_eq!(Grab::Released.on_event(POINTER_UP), None);
/// ```
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Apply `event` to `state` in place
///
/// Returns true if the state changed.
pub fn transition<S: StateTransitions>(state: &mut S, event: EventType) -> bool {
    match state.on_event(event) {
        Some(next) if next != *state => {
            tracing::trace!(from = ?*state, to = ?next, event, "state transition");
            *state = next;
            true
        }
        _ => false,
    }
}
