//! Event type identifiers
//!
//! Interaction state machines receive plain `u32` event ids so that
//! widget-specific events can live next to the shared ones without a
//! central enum.

/// Raw event type id
pub type EventType = u32;

/// Shared event type ids
pub mod event_types {
    use super::EventType;

    /// Pointer pressed on the element
    pub const POINTER_DOWN: EventType = 1;
    /// Pointer released
    pub const POINTER_UP: EventType = 2;
    /// Pointer moved while over (or captured by) the element
    pub const POINTER_MOVE: EventType = 3;
    /// Pointer entered the element bounds
    pub const POINTER_ENTER: EventType = 4;
    /// Pointer left the element bounds
    pub const POINTER_LEAVE: EventType = 5;

    /// Scroll offset changed
    pub const SCROLL: EventType = 30;
    /// Scroll input ended
    pub const SCROLL_END: EventType = 31;

    /// Element or viewport size changed
    pub const RESIZE: EventType = 40;

    /// First id available for widget-specific events
    pub const CUSTOM_BASE: EventType = 10_000;
}
