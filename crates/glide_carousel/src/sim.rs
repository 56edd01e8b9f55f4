//! Headless strip host and frame driver
//!
//! [`SimulatedStrip`] stands in for a rendered, horizontally scrollable
//! container: it clamps offsets to the scrollable range and animates smooth
//! scrolls through the animation scheduler. [`Simulation`] owns the scheduler
//! and a carousel, and advances both from a fixed-step clock, reporting offset
//! changes to the carousel the way a browser reports scroll events.

use glide_animation::{AnimatedOffset, AnimationScheduler, MotionConfig, SchedulerHandle};
use glide_core::CardMetrics;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::carousel::{CarouselSnapshot, InfiniteDragCarousel};
use crate::config::CarouselConfig;
use crate::host::{CarouselHost, ScrollBehavior};
use crate::strip::Strip;

/// Frame interval of the simulation clock
pub const FRAME_MS: u64 = 16;

/// Upper bound on frames spent in [`Simulation::settle`]
const MAX_SETTLE_FRAMES: usize = 2_000;

/// Pointer moves generated per [`Simulation::drag`]
const DRAG_MOVES: usize = 10;

/// Rendered geometry of the simulated strip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripLayout {
    pub card_width: f32,
    pub gap: f32,
    /// Visible width of the scroll container
    pub viewport_width: f32,
    /// How smooth scrolls move
    pub motion: MotionConfig,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            card_width: 300.0,
            gap: 24.0,
            viewport_width: 300.0,
            motion: MotionConfig::default(),
        }
    }
}

impl StripLayout {
    pub fn metrics(&self) -> CardMetrics {
        CardMetrics::new(self.card_width, self.gap)
    }

    /// Width of `slots` cards laid out with gaps between them
    pub fn content_width(&self, slots: usize) -> f32 {
        if slots == 0 {
            return 0.0;
        }
        slots as f32 * self.card_width + (slots - 1) as f32 * self.gap
    }

    /// Largest reachable scroll offset
    pub fn max_offset(&self, slots: usize) -> f32 {
        (self.content_width(slots) - self.viewport_width).max(0.0)
    }
}

/// A scroll container with `slots` rendered cards
pub struct SimulatedStrip {
    layout: StripLayout,
    slots: usize,
    offset: AnimatedOffset,
    smooth_enabled: bool,
    detached: bool,
}

impl std::fmt::Debug for SimulatedStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedStrip")
            .field("slots", &self.slots)
            .field("offset", &self.offset.get())
            .field("animating", &self.offset.is_animating())
            .field("detached", &self.detached)
            .finish()
    }
}

impl SimulatedStrip {
    pub fn new(handle: SchedulerHandle, layout: StripLayout, slots: usize) -> Self {
        Self {
            offset: AnimatedOffset::new(handle, 0.0, layout.motion),
            layout,
            slots,
            smooth_enabled: true,
            detached: false,
        }
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Change the number of rendered cards
    pub fn set_slots(&mut self, slots: usize) {
        self.slots = slots;
        let clamped = self.clamp(self.offset.get());
        self.offset.set_immediate(clamped);
    }

    /// Change card width; the offset is clamped to the new range
    pub fn resize(&mut self, card_width: f32) {
        self.layout.card_width = card_width;
        let clamped = self.clamp(self.offset.get());
        self.offset.set_immediate(clamped);
    }

    /// Target of the in-flight smooth scroll, or the current offset
    pub fn target_offset(&self) -> f32 {
        if self.offset.is_animating() {
            self.offset.target()
        } else {
            self.offset.get()
        }
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    pub fn is_smooth_enabled(&self) -> bool {
        self.smooth_enabled
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Fold a finished smooth scroll into the resting offset
    pub fn release_settled(&mut self) {
        self.offset.release_if_settled();
    }

    fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.layout.max_offset(self.slots))
    }
}

impl CarouselHost for SimulatedStrip {
    fn measure(&self) -> Option<CardMetrics> {
        if self.slots == 0 {
            return None;
        }
        Some(self.layout.metrics())
    }

    fn scroll_offset(&self) -> f32 {
        self.offset.get()
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        let offset = self.clamp(offset);
        self.offset.set_immediate(offset);
    }

    fn scroll_to(&mut self, offset: f32, behavior: ScrollBehavior) {
        let offset = self.clamp(offset);
        if behavior == ScrollBehavior::Smooth && self.smooth_enabled && !self.detached {
            self.offset.animate_to(offset);
        } else {
            self.offset.set_immediate(offset);
        }
    }

    fn now_ms(&self) -> u64 {
        self.offset.now_ms()
    }

    fn is_scrolling(&self) -> bool {
        self.offset.is_animating()
    }

    fn set_smooth_scrolling(&mut self, enabled: bool) {
        self.smooth_enabled = enabled;
    }

    fn detach(&mut self) {
        let offset = self.offset.get();
        self.offset.set_immediate(offset);
        self.detached = true;
    }
}

/// A carousel over a [`SimulatedStrip`], driven frame by frame
pub struct Simulation<T> {
    carousel: InfiniteDragCarousel<T, SimulatedStrip>,
    scheduler: AnimationScheduler,
    now_ms: u64,
    last_offset: f32,
}

impl<T> Simulation<T> {
    /// Build the strip, mount the carousel and lay out the first frame
    pub fn new(strip: Strip<T>, layout: StripLayout, config: CarouselConfig) -> Self {
        let scheduler = AnimationScheduler::new();
        let host = SimulatedStrip::new(scheduler.handle(), layout, strip.slot_count());
        let mut carousel = InfiniteDragCarousel::new(strip, host, config);
        carousel.mount();
        let last_offset = carousel.host().scroll_offset();
        debug!(snapshot = %carousel.snapshot(), "simulation started");

        Self {
            carousel,
            scheduler,
            now_ms: 0,
            last_offset,
        }
    }

    pub fn carousel(&self) -> &InfiniteDragCarousel<T, SimulatedStrip> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut InfiniteDragCarousel<T, SimulatedStrip> {
        &mut self.carousel
    }

    pub fn strip_host(&self) -> &SimulatedStrip {
        self.carousel.host()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn scheduler_handle(&self) -> SchedulerHandle {
        self.scheduler.handle()
    }

    pub fn offset(&self) -> f32 {
        self.carousel.host().scroll_offset()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.carousel.snapshot()
    }

    /// Advance the clock by one frame
    pub fn frame(&mut self) {
        self.now_ms += FRAME_MS;
        self.scheduler.tick(self.now_ms);
        self.carousel.host_mut().release_settled();

        let offset = self.carousel.host().scroll_offset();
        if (offset - self.last_offset).abs() > f32::EPSILON {
            trace!(offset, "scroll");
            self.carousel.on_scroll();
        }
        self.last_offset = offset;

        self.carousel.advance(self.now_ms);
    }

    /// Run frames until at least `ms` have elapsed
    pub fn run_for(&mut self, ms: u64) {
        let until = self.now_ms.saturating_add(ms);
        while self.now_ms < until {
            self.frame();
        }
    }

    /// Whether nothing is moving or pending
    pub fn is_settled(&self) -> bool {
        !self.carousel.is_dragging()
            && !self.carousel.state().is_settling()
            && self.carousel.pending_timers() == 0
            && !self.carousel.host().is_animating()
    }

    /// Run frames until motion, timers and state have all come to rest
    ///
    /// Returns false if the frame budget ran out first.
    pub fn settle(&mut self) -> bool {
        for _ in 0..MAX_SETTLE_FRAMES {
            if self.is_settled() {
                return true;
            }
            self.frame();
        }
        self.is_settled()
    }

    /// Drag the strip by `dx` pixels of pointer travel and release
    ///
    /// Positive `dx` moves the pointer right, which scrolls toward the start.
    pub fn drag(&mut self, dx: f32) {
        self.carousel.on_pointer_down(0.0);
        for step in 1..=DRAG_MOVES {
            let x = dx * step as f32 / DRAG_MOVES as f32;
            self.carousel.on_pointer_move(x);
            self.frame();
        }
        self.carousel.on_pointer_up();
        self.frame();
    }

    /// Change card width and notify the carousel
    pub fn resize(&mut self, card_width: f32) {
        self.carousel.host_mut().resize(card_width);
        self.carousel.on_resize();
        self.last_offset = self.carousel.host().scroll_offset();
    }

    /// Unmount the carousel; later frames only advance the clock
    pub fn unmount(&mut self) {
        self.carousel.unmount();
    }
}
