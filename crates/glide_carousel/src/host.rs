//! Host surface contract
//!
//! The carousel never touches a rendering tree directly. A host adapts the
//! rendered strip (a DOM node, a retained-mode scroll container, a simulator)
//! to the handful of primitives the component needs.

use glide_core::CardMetrics;

/// Scroll animation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Instant scroll (no animation)
    #[default]
    Auto,
    /// Smooth animated scroll
    Smooth,
}

/// The rendered strip as seen by the carousel
pub trait CarouselHost {
    /// Width of the first rendered card and the gap after it
    ///
    /// None while no card is rendered.
    fn measure(&self) -> Option<CardMetrics>;

    /// Current horizontal scroll offset, including mid-animation values
    fn scroll_offset(&self) -> f32;

    /// Write the scroll offset instantly, cancelling any in-flight animation
    fn set_scroll_offset(&mut self, offset: f32);

    /// Scroll to `offset`, animated when `behavior` is `Smooth`
    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior);

    /// Current time in milliseconds, on the clock passed to
    /// [`advance`](crate::InfiniteDragCarousel::advance)
    ///
    /// Settle and debounce delays are measured from this time.
    fn now_ms(&self) -> u64;

    /// Whether a smooth scroll is still in flight
    ///
    /// The boundary check waits until this is false.
    fn is_scrolling(&self) -> bool {
        false
    }

    /// Enable or disable the strip's own easing
    ///
    /// Disabled for the duration of a drag so the strip tracks the pointer.
    fn set_smooth_scrolling(&mut self, _enabled: bool) {}

    /// Stop delivering pointer and scroll events
    fn detach(&mut self) {}
}
