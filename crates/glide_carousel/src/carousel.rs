//! Infinite drag carousel
//!
//! Owns the interaction state of a triplicated strip and drives a
//! [`CarouselHost`]. All entry points are event handlers; none of them return
//! errors. Degenerate states (no items, nothing measurable yet, unmounted)
//! turn them into no-ops.
//!
//! Debounce and settle timers are armed at the host's clock
//! ([`CarouselHost::now_ms`]) and fire from [`InfiniteDragCarousel::advance`].
//!
//! # Example
//!
//! ```rust
//! use glide_carousel::prelude::*;
//!
//! struct Fixed {
//!     offset: f32,
//! }
//!
//! impl CarouselHost for Fixed {
//!     fn measure(&self) -> Option<CardMetrics> {
//!         Some(CardMetrics::new(300.0, 24.0))
//!     }
//!     fn scroll_offset(&self) -> f32 {
//!         self.offset
//!     }
//!     fn set_scroll_offset(&mut self, offset: f32) {
//!         self.offset = offset;
//!     }
//!     fn scroll_to(&mut self, offset: f32, _behavior: ScrollBehavior) {
//!         self.offset = offset;
//!     }
//!     fn now_ms(&self) -> u64 {
//!         0
//!     }
//! }
//!
//! let strip = Strip::new((0..8).map(|i| format!("card-{i}")).collect::<Vec<_>>());
//! let mut carousel = InfiniteDragCarousel::new(strip, Fixed { offset: 0.0 }, CarouselConfig::default());
//! carousel.mount();
//! assert_eq!(carousel.current_index(), 8);
//! assert_eq!(carousel.host().offset, 2592.0);
//!
//! carousel.previous();
//! assert_eq!(carousel.current_index(), 7);
//!
//! // The settle delay runs the boundary check, which moves slot 7 into the middle copy
//! carousel.advance(600);
//! assert_eq!(carousel.current_index(), 15);
//! assert_eq!(carousel.state(), CarouselState::Idle);
//! ```

use std::fmt;

use glide_animation::{TimerId, TimerQueue};
use glide_core::{event_types, transition, CardMetrics, EventType};
use tracing::{debug, trace, warn};

use crate::config::CarouselConfig;
use crate::host::{CarouselHost, ScrollBehavior};
use crate::state::{carousel_events, CarouselState};
use crate::strip::Strip;
use crate::wrap::{next_slot, previous_slot, snap_slot, wrap_target};

/// Mount lifecycle of the component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not yet mounted
    Created,
    /// Mounted, waiting for a measurable card
    Pending,
    /// Positioned on the middle copy; fully interactive
    Ready,
    /// Unmounted; every handler is a no-op
    Unmounted,
}

/// Pointer state captured at pointer-down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f32,
    pub start_offset: f32,
}

impl DragSession {
    /// Offset the strip should show with the pointer at `x`
    pub fn offset_at(&self, x: f32, sensitivity: f32) -> f32 {
        self.start_offset - (x - self.start_x) * sensitivity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarouselTimer {
    ScrollDebounce,
    Settle,
}

/// Summary of the carousel for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub index: usize,
    pub item_index: Option<usize>,
    pub offset: f32,
    pub state: CarouselState,
    pub lifecycle: Lifecycle,
    pub pending_timers: usize,
}

impl fmt::Display for CarouselSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index={} item={} offset={:.1} state={:?} timers={}",
            self.index,
            self.item_index
                .map_or_else(|| "-".to_string(), |i| i.to_string()),
            self.offset,
            self.state,
            self.pending_timers
        )
    }
}

/// Horizontally scrolling carousel over a triplicated strip
pub struct InfiniteDragCarousel<T, H> {
    strip: Strip<T>,
    host: H,
    config: CarouselConfig,
    state: CarouselState,
    lifecycle: Lifecycle,
    current_index: usize,
    drag: Option<DragSession>,
    /// Last measurement that succeeded; cleared on resize
    geometry: Option<CardMetrics>,
    timers: TimerQueue<CarouselTimer>,
    settle_timer: Option<TimerId>,
    debounce_timer: Option<TimerId>,
}

impl<T, H: CarouselHost> InfiniteDragCarousel<T, H> {
    pub fn new(strip: Strip<T>, host: H, config: CarouselConfig) -> Self {
        Self {
            strip,
            host,
            config,
            state: CarouselState::Idle,
            lifecycle: Lifecycle::Created,
            current_index: 0,
            drag: None,
            geometry: None,
            timers: TimerQueue::new(),
            settle_timer: None,
            debounce_timer: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn strip(&self) -> &Strip<T> {
        &self.strip
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_ready(&self) -> bool {
        self.lifecycle == Lifecycle::Ready
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Physical slot currently shown, in `[0, 3N)`
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Item shown at the current slot
    pub fn current_item(&self) -> Option<&T> {
        self.strip.item_at(self.current_index)
    }

    /// Last known-good geometry
    pub fn geometry(&self) -> Option<CardMetrics> {
        self.geometry
    }

    /// Whether the offset rests on the current slot, within `offset_tolerance`
    pub fn is_aligned(&self) -> bool {
        let metrics = self.host.measure().and_then(CardMetrics::measured).or(self.geometry);
        match metrics {
            Some(metrics) => {
                let expected = metrics.offset_of(self.current_index);
                (self.host.scroll_offset() - expected).abs() <= self.config.offset_tolerance
            }
            None => self.strip.is_empty(),
        }
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest time at which [`advance`](Self::advance) has work to do
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            index: self.current_index,
            item_index: self.strip.item_index(self.current_index),
            offset: self.host.scroll_offset(),
            state: self.state,
            lifecycle: self.lifecycle,
            pending_timers: self.timers.len(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach to the host and centre on the middle copy once a card is measurable
    pub fn mount(&mut self) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Pending;
        self.try_initialize();
    }

    /// The host laid out the strip (again)
    pub fn on_layout(&mut self) {
        if self.lifecycle == Lifecycle::Pending {
            self.try_initialize();
        }
    }

    /// Cancel all timers, detach from the host and ignore further events
    pub fn unmount(&mut self) {
        if matches!(self.lifecycle, Lifecycle::Created | Lifecycle::Unmounted) {
            return;
        }
        self.timers.clear();
        self.settle_timer = None;
        self.debounce_timer = None;
        self.drag = None;
        self.state = CarouselState::Idle;
        self.host.detach();
        self.lifecycle = Lifecycle::Unmounted;
        debug!("carousel unmounted");
    }

    fn is_live(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Pending | Lifecycle::Ready)
    }

    fn try_initialize(&mut self) -> bool {
        let n = self.strip.len();
        if n == 0 {
            return false;
        }
        let Some(metrics) = self.measure() else {
            trace!("carousel waiting for a measurable card");
            return false;
        };
        self.host.set_scroll_offset(metrics.offset_of(n));
        self.current_index = n;
        self.lifecycle = Lifecycle::Ready;
        debug!(items = n, step = metrics.step(), "carousel centred on middle copy");
        true
    }

    /// Ready, initializing lazily if the first layout was missed
    fn ensure_ready(&mut self) -> bool {
        match self.lifecycle {
            Lifecycle::Ready => true,
            Lifecycle::Pending => self.try_initialize(),
            Lifecycle::Created | Lifecycle::Unmounted => false,
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Read geometry from the host, falling back to the last good snapshot
    fn measure(&mut self) -> Option<CardMetrics> {
        match self.host.measure().and_then(CardMetrics::measured) {
            Some(metrics) => {
                self.geometry = Some(metrics);
                Some(metrics)
            }
            None => {
                if let Some(metrics) = self.geometry {
                    warn!("strip has no measurable card, using last known geometry");
                    Some(metrics)
                } else {
                    None
                }
            }
        }
    }

    /// Layout changed size; re-measure and realign on the current slot
    pub fn on_resize(&mut self) {
        if !self.is_live() {
            return;
        }
        self.geometry = None;
        if self.lifecycle == Lifecycle::Pending {
            self.try_initialize();
            return;
        }
        if self.is_dragging() {
            return;
        }
        if let Some(metrics) = self.measure() {
            let index = self.current_index.min(self.strip.slot_count().saturating_sub(1));
            self.host.set_scroll_offset(metrics.offset_of(index));
            debug!(index, step = metrics.step(), "realigned after resize");
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Fire every timer due at `now_ms`
    pub fn advance(&mut self, now_ms: u64) {
        if !self.is_live() {
            return;
        }
        for (id, timer) in self.timers.advance(now_ms) {
            match timer {
                CarouselTimer::ScrollDebounce => {
                    if self.debounce_timer == Some(id) {
                        self.debounce_timer = None;
                    }
                    self.check_boundary();
                }
                CarouselTimer::Settle => {
                    if self.settle_timer == Some(id) {
                        self.settle_timer = None;
                    }
                    if self.host.is_scrolling() {
                        trace!("settle deferred until the scroll lands");
                        self.arm_settle(self.config.scroll_debounce_ms);
                        continue;
                    }
                    self.check_boundary();
                    self.apply(carousel_events::SETTLED);
                }
            }
        }
    }

    fn arm_settle(&mut self, delay_ms: u64) {
        if let Some(id) = self.settle_timer.take() {
            self.timers.cancel(id);
        }
        let now = self.host.now_ms();
        self.settle_timer = Some(self.timers.schedule_at(now, delay_ms, CarouselTimer::Settle));
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.settle_timer.take() {
            self.timers.cancel(id);
        }
        if let Some(id) = self.debounce_timer.take() {
            self.timers.cancel(id);
        }
    }

    // =========================================================================
    // Boundary wrap
    // =========================================================================

    /// Move a strip resting in an outer copy into the middle copy
    ///
    /// Returns true if the strip was repositioned. Never runs mid-drag or
    /// while a smooth scroll is in flight.
    pub fn check_boundary(&mut self) -> bool {
        if !self.is_live() || self.is_dragging() || self.host.is_scrolling() {
            return false;
        }
        let Some(metrics) = self.measure() else {
            return false;
        };
        let offset = self.host.scroll_offset();
        match wrap_target(offset, self.strip.len(), metrics) {
            Some(target) => {
                self.host.set_scroll_offset(target.offset);
                debug!(
                    from = self.current_index,
                    to = target.index,
                    offset = target.offset,
                    "wrapped into middle copy"
                );
                self.current_index = target.index;
                true
            }
            None => false,
        }
    }

    /// The host's scroll offset changed
    pub fn on_scroll(&mut self) {
        if !self.is_ready() || self.is_dragging() {
            return;
        }
        if let Some(id) = self.debounce_timer.take() {
            self.timers.cancel(id);
        }
        let now = self.host.now_ms();
        self.debounce_timer = Some(self.timers.schedule_at(
            now,
            self.config.scroll_debounce_ms,
            CarouselTimer::ScrollDebounce,
        ));
    }

    // =========================================================================
    // Programmatic navigation
    // =========================================================================

    /// Smooth-scroll to the next card
    pub fn next(&mut self) {
        let target = next_slot(self.current_index, self.strip.len());
        self.navigate(target);
    }

    /// Smooth-scroll to the previous card
    pub fn previous(&mut self) {
        let target = previous_slot(self.current_index, self.strip.len());
        self.navigate(target);
    }

    /// Smooth-scroll to a physical slot (clamped to the strip)
    pub fn go_to(&mut self, slot: usize) {
        let slot = slot.min(self.strip.slot_count().saturating_sub(1));
        self.navigate(slot);
    }

    fn navigate(&mut self, target: usize) {
        if !self.is_live() || self.strip.is_empty() {
            return;
        }
        if self.is_dragging() {
            trace!("navigation ignored while dragging");
            return;
        }
        if !self.ensure_ready() {
            return;
        }
        let Some(metrics) = self.measure() else {
            return;
        };

        self.host
            .scroll_to(metrics.offset_of(target), ScrollBehavior::Smooth);
        debug!(from = self.current_index, to = target, "navigate");
        self.current_index = target;
        self.arm_settle(self.config.navigation_settle_ms);
        self.apply(carousel_events::NAVIGATE);
    }

    // =========================================================================
    // Drag gesture
    // =========================================================================

    /// Pointer pressed at horizontal position `x`
    pub fn on_pointer_down(&mut self, x: f32) {
        if !self.is_live() || !self.ensure_ready() {
            return;
        }
        self.cancel_pending();
        let start_offset = self.host.scroll_offset();
        self.host.set_scroll_offset(start_offset);
        self.host.set_smooth_scrolling(false);
        self.drag = Some(DragSession {
            start_x: x,
            start_offset,
        });
        self.apply(event_types::POINTER_DOWN);
    }

    /// Pointer moved to `x`
    pub fn on_pointer_move(&mut self, x: f32) {
        if !self.is_live() {
            return;
        }
        let Some(session) = self.drag else {
            return;
        };
        let offset = session.offset_at(x, self.config.drag_sensitivity);
        trace!(x, offset, "drag");
        self.host.set_scroll_offset(offset);
    }

    /// Pointer released
    pub fn on_pointer_up(&mut self) {
        self.end_drag(event_types::POINTER_UP);
    }

    /// Pointer left the strip; ends a drag like a release
    pub fn on_pointer_leave(&mut self) {
        self.end_drag(event_types::POINTER_LEAVE);
    }

    fn end_drag(&mut self, event: EventType) {
        if !self.is_live() || self.drag.take().is_none() {
            return;
        }
        self.host.set_smooth_scrolling(true);

        let Some(metrics) = self.measure() else {
            self.apply(carousel_events::DRAG_CANCELLED);
            return;
        };
        let release = self.host.scroll_offset();
        let slot = snap_slot(release, self.strip.len(), metrics);
        self.host
            .scroll_to(metrics.offset_of(slot), ScrollBehavior::Smooth);
        debug!(release, slot, "snap to card");
        self.current_index = slot;
        self.apply(event);
        self.arm_settle(self.config.snap_settle_ms);
    }

    fn apply(&mut self, event: EventType) {
        let from = self.state;
        if transition(&mut self.state, event) {
            debug!(?from, to = ?self.state, "carousel state");
        }
    }
}

impl<T, H: CarouselHost> fmt::Debug for InfiniteDragCarousel<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfiniteDragCarousel")
            .field("items", &self.strip.len())
            .field("index", &self.current_index)
            .field("state", &self.state)
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Host whose smooth scrolls land instantly
    #[derive(Debug, Default)]
    struct Recorder {
        metrics: Option<CardMetrics>,
        offset: f32,
        smooth_enabled: bool,
        smooth_scrolls: Vec<f32>,
        instant_writes: Vec<f32>,
        detached: bool,
        now: u64,
        scrolling: bool,
    }

    impl Recorder {
        fn new(card_width: f32, gap: f32) -> Self {
            Self {
                metrics: Some(CardMetrics::new(card_width, gap)),
                smooth_enabled: true,
                ..Default::default()
            }
        }
    }

    impl CarouselHost for Recorder {
        fn measure(&self) -> Option<CardMetrics> {
            self.metrics
        }

        fn scroll_offset(&self) -> f32 {
            self.offset
        }

        fn set_scroll_offset(&mut self, offset: f32) {
            self.instant_writes.push(offset);
            self.offset = offset;
        }

        fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
            if behavior == ScrollBehavior::Smooth {
                self.smooth_scrolls.push(offset);
            }
            self.offset = offset;
        }

        fn now_ms(&self) -> u64 {
            self.now
        }

        fn is_scrolling(&self) -> bool {
            self.scrolling
        }

        fn set_smooth_scrolling(&mut self, enabled: bool) {
            self.smooth_enabled = enabled;
        }

        fn detach(&mut self) {
            self.detached = true;
        }
    }

    fn carousel(n: usize) -> InfiniteDragCarousel<usize, Recorder> {
        let mut c = InfiniteDragCarousel::new(
            Strip::new((0..n).collect()),
            Recorder::new(300.0, 24.0),
            CarouselConfig::default(),
        );
        c.mount();
        c
    }

    #[test]
    fn test_mount_centres_on_middle_copy() {
        let c = carousel(8);
        assert!(c.is_ready());
        assert_eq!(c.current_index(), 8);
        assert_eq!(c.host().offset, 2592.0);
        assert_eq!(c.current_item(), Some(&0));
        assert!(c.host().smooth_scrolls.is_empty());
    }

    #[test]
    fn test_mount_waits_for_layout() {
        let mut host = Recorder::new(300.0, 24.0);
        host.metrics = None;
        let mut c = InfiniteDragCarousel::new(Strip::new(vec![1, 2, 3]), host, CarouselConfig::default());
        c.mount();
        assert_eq!(c.lifecycle(), Lifecycle::Pending);

        c.next();
        assert!(c.host().smooth_scrolls.is_empty());

        c.host_mut().metrics = Some(CardMetrics::new(200.0, 10.0));
        c.on_layout();
        assert!(c.is_ready());
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.host().offset, 630.0);
    }

    #[test]
    fn test_next_scrolls_smoothly_and_sets_index() {
        let mut c = carousel(8);
        c.next();
        assert_eq!(c.current_index(), 9);
        assert_eq!(c.host().smooth_scrolls, vec![2916.0]);
        assert_eq!(c.state(), CarouselState::Settling);
        assert_eq!(c.pending_timers(), 1);
    }

    #[test]
    fn test_rapid_navigation_is_last_write_wins() {
        let mut c = carousel(8);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current_index(), 11);
        assert_eq!(c.host().smooth_scrolls.last(), Some(&3564.0));
        // Only one settle timer survives
        assert_eq!(c.pending_timers(), 1);
    }

    #[test]
    fn test_settle_runs_boundary_check() {
        let mut c = carousel(2);
        // 2 -> 3 -> 4 (slot 4 is in the third copy)
        c.next();
        c.next();
        assert_eq!(c.current_index(), 4);

        c.advance(599);
        assert_eq!(c.current_index(), 4);
        c.advance(600);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.host().offset, 648.0);
        assert_eq!(c.state(), CarouselState::Idle);
    }

    #[test]
    fn test_settle_delay_counts_from_click_after_idle() {
        let mut c = carousel(2);
        // No frames ran while the page sat idle
        c.host_mut().now = 10_000;
        c.next();
        c.next();
        assert_eq!(c.next_deadline(), Some(10_600));

        c.advance(10_016);
        assert_eq!(c.state(), CarouselState::Settling);
        assert_eq!(c.current_index(), 4);

        c.advance(10_600);
        assert_eq!(c.state(), CarouselState::Idle);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_debounce_counts_from_scroll_event() {
        let mut c = carousel(2);
        c.host_mut().offset = 0.0;
        c.host_mut().now = 5_000;
        c.on_scroll();
        assert_eq!(c.next_deadline(), Some(5_100));
        c.advance(5_016);
        assert_eq!(c.host().offset, 0.0);
        c.advance(5_100);
        assert_eq!(c.host().offset, 648.0);
    }

    #[test]
    fn test_settle_waits_for_smooth_scroll_to_land() {
        let mut c = carousel(2);
        c.go_to(4);
        c.host_mut().scrolling = true;
        c.host_mut().offset = 1_200.0; // still easing toward 1296

        c.advance(600);
        assert_eq!(c.state(), CarouselState::Settling);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.host().offset, 1_200.0);
        assert_eq!(c.next_deadline(), Some(700));
        assert!(!c.check_boundary());

        c.host_mut().scrolling = false;
        c.host_mut().offset = 1_296.0;
        c.advance(700);
        assert_eq!(c.state(), CarouselState::Idle);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.host().offset, 648.0);
        assert!(c.is_aligned());
    }

    #[test]
    fn test_next_redirects_at_end_of_strip() {
        let mut c = carousel(2);
        c.go_to(5);
        assert_eq!(c.current_index(), 5);
        c.next();
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_previous_redirects_at_start_of_strip() {
        let mut c = carousel(2);
        c.go_to(0);
        c.previous();
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_drag_follows_pointer_with_sensitivity() {
        let mut c = carousel(8);
        c.on_pointer_down(400.0);
        assert!(c.is_dragging());
        assert!(!c.host().smooth_enabled);

        c.on_pointer_move(300.0);
        assert_eq!(c.host().offset, 2592.0 + 150.0);
        c.on_pointer_move(500.0);
        assert_eq!(c.host().offset, 2592.0 - 150.0);
    }

    #[test]
    fn test_release_snaps_to_nearest_card() {
        let mut c = carousel(8);
        c.on_pointer_down(0.0);
        // 500px of scroll at 1.5x sensitivity
        c.on_pointer_move(-500.0 / 1.5);
        assert!((c.host().offset - 3092.0).abs() < 0.01);

        c.on_pointer_up();
        assert!(c.host().smooth_enabled);
        assert_eq!(c.current_index(), 10);
        assert_eq!(c.host().smooth_scrolls, vec![3240.0]);
        assert_eq!(c.current_item(), Some(&2));
        assert_eq!(c.state(), CarouselState::Settling);

        c.advance(400);
        assert_eq!(c.state(), CarouselState::Idle);
        assert_eq!(c.current_index(), 10);
        assert!(c.is_aligned());
    }

    #[test]
    fn test_pointer_leave_acts_as_release() {
        let mut c = carousel(8);
        c.on_pointer_down(0.0);
        c.on_pointer_move(-100.0);
        c.on_pointer_leave();
        assert_eq!(c.state(), CarouselState::Settling);
        assert_eq!(c.current_index(), 8);
        assert!(c.drag_session().is_none());
    }

    #[test]
    fn test_pointer_leave_without_drag_is_ignored() {
        let mut c = carousel(8);
        c.on_pointer_leave();
        c.on_pointer_move(100.0);
        assert_eq!(c.state(), CarouselState::Idle);
        assert_eq!(c.host().offset, 2592.0);
    }

    #[test]
    fn test_pointer_down_interrupts_settling() {
        let mut c = carousel(8);
        c.next();
        assert_eq!(c.pending_timers(), 1);

        c.host_mut().offset = 2700.0; // mid-animation
        c.on_pointer_down(0.0);
        assert!(c.is_dragging());
        assert_eq!(c.pending_timers(), 0);
        assert_eq!(c.drag_session().unwrap().start_offset, 2700.0);

        // The cancelled settle never fires
        c.advance(10_000);
        assert!(c.is_dragging());
    }

    #[test]
    fn test_boundary_check_never_runs_while_dragging() {
        let mut c = carousel(2);
        c.on_pointer_down(0.0);
        c.on_pointer_move(1_000.0); // far into the first copy
        let offset = c.host().offset;
        assert!(!c.check_boundary());
        c.on_scroll();
        assert_eq!(c.pending_timers(), 0);
        assert_eq!(c.host().offset, offset);
    }

    #[test]
    fn test_navigation_ignored_while_dragging() {
        let mut c = carousel(8);
        c.on_pointer_down(0.0);
        c.next();
        assert_eq!(c.current_index(), 8);
        assert!(c.host().smooth_scrolls.is_empty());
    }

    #[test]
    fn test_scroll_debounce_rearms() {
        let mut c = carousel(2);
        c.host_mut().offset = 0.0; // user scrolled into the first copy

        c.on_scroll();
        c.advance(50);
        c.on_scroll();
        c.advance(120);
        // 100ms since the last scroll event has not elapsed
        assert_eq!(c.host().offset, 0.0);

        c.advance(150);
        assert_eq!(c.host().offset, 648.0);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_wrap_shift_is_one_copy() {
        let mut c = carousel(8);
        c.host_mut().offset = 5184.0 + 10.0;
        assert!(c.check_boundary());
        assert_eq!(c.host().offset, 2602.0);
        assert_eq!(c.current_index(), 8);
    }

    #[test]
    fn test_geometry_falls_back_to_last_known_good() {
        let mut c = carousel(8);
        c.host_mut().metrics = None;
        c.next();
        assert_eq!(c.current_index(), 9);
        assert_eq!(c.host().smooth_scrolls, vec![2916.0]);
    }

    #[test]
    fn test_resize_invalidates_geometry() {
        let mut c = carousel(8);
        c.host_mut().metrics = None;
        c.on_resize();
        assert_eq!(c.geometry(), None);

        c.next();
        assert_eq!(c.current_index(), 8);
        assert!(c.host().smooth_scrolls.is_empty());
    }

    #[test]
    fn test_resize_realigns_offset() {
        let mut c = carousel(8);
        c.next();
        c.host_mut().metrics = Some(CardMetrics::new(200.0, 16.0));
        c.on_resize();
        assert_eq!(c.host().offset, 9.0 * 216.0);
        assert_eq!(c.geometry(), Some(CardMetrics::new(200.0, 16.0)));
    }

    #[test]
    fn test_zero_width_card_blocks_navigation() {
        let mut host = Recorder::new(0.0, 24.0);
        host.offset = 17.0;
        let mut c = InfiniteDragCarousel::new(Strip::new(vec![1, 2]), host, CarouselConfig::default());
        c.mount();
        c.next();
        c.previous();
        c.on_pointer_down(0.0);
        assert_eq!(c.lifecycle(), Lifecycle::Pending);
        assert_eq!(c.host().offset, 17.0);
        assert!(c.host().smooth_scrolls.is_empty());
    }

    #[test]
    fn test_empty_strip_is_inert() {
        let mut c: InfiniteDragCarousel<usize, Recorder> = carousel(0);
        c.next();
        c.previous();
        c.on_pointer_down(0.0);
        c.on_pointer_move(100.0);
        c.on_pointer_up();
        c.on_scroll();
        c.advance(1_000);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current_item(), None);
        assert_eq!(c.state(), CarouselState::Idle);
    }

    #[test]
    fn test_single_item_cycles() {
        let mut c = carousel(1);
        assert_eq!(c.current_index(), 1);
        c.next();
        assert_eq!(c.current_index(), 2);
        c.advance(600);
        assert_eq!(c.current_index(), 1);
        c.previous();
        assert_eq!(c.current_index(), 0);
        c.advance(1_200);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.current_item(), Some(&0));
    }

    #[test]
    fn test_unmount_silences_everything() {
        let mut c = carousel(2);
        c.next();
        c.on_scroll();
        assert_eq!(c.pending_timers(), 2);

        c.unmount();
        assert!(c.host().detached);
        assert_eq!(c.pending_timers(), 0);

        let offset = c.host().offset;
        c.advance(10_000);
        c.next();
        c.on_pointer_down(0.0);
        c.on_pointer_move(500.0);
        c.on_resize();
        assert_eq!(c.host().offset, offset);
        assert_eq!(c.lifecycle(), Lifecycle::Unmounted);
        assert_eq!(c.state(), CarouselState::Idle);
    }

    #[test]
    fn test_events_before_mount_are_ignored() {
        let mut c = InfiniteDragCarousel::new(
            Strip::new(vec![1, 2]),
            Recorder::new(300.0, 24.0),
            CarouselConfig::default(),
        );
        c.next();
        c.on_pointer_down(0.0);
        assert_eq!(c.lifecycle(), Lifecycle::Created);
        assert_eq!(c.host().offset, 0.0);
    }

    #[test]
    fn test_snapshot_display() {
        let c = carousel(8);
        let text = c.snapshot().to_string();
        assert!(text.contains("index=8"));
        assert!(text.contains("item=0"));
        assert!(text.contains("state=Idle"));
    }
}
