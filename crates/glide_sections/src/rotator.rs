//! Cross-fading testimonial rotator
//!
//! Shows one entry at a time. Switching fades the current entry out, swaps
//! the index once the fade has run, then fades the new entry in.

use glide_animation::{TimerId, TimerQueue};
use tracing::debug;

/// Default fade-out duration before the active entry changes
pub const DEFAULT_FADE_MS: u64 = 300;

/// Single-entry rotator over `len` entries
#[derive(Debug)]
pub struct FadeRotator {
    len: usize,
    active: usize,
    visible: bool,
    fade_ms: u64,
    timers: TimerQueue<usize>,
    pending: Option<(TimerId, usize)>,
}

impl FadeRotator {
    pub fn new(len: usize) -> Self {
        Self::with_fade(len, DEFAULT_FADE_MS)
    }

    pub fn with_fade(len: usize, fade_ms: u64) -> Self {
        Self {
            len,
            active: 0,
            visible: true,
            fade_ms,
            timers: TimerQueue::new(),
            pending: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the entry currently on screen
    pub fn active(&self) -> usize {
        self.active
    }

    /// False while fading out
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Entry that will be active once the pending fade finishes
    pub fn pending_target(&self) -> Option<usize> {
        self.pending.map(|(_, index)| index)
    }

    /// Fade to entry `index` from time `now_ms`; a newer call replaces a
    /// pending one
    pub fn go_to(&mut self, index: usize, now_ms: u64) {
        if self.len == 0 || index >= self.len {
            return;
        }
        if let Some((id, _)) = self.pending.take() {
            self.timers.cancel(id);
        }
        self.visible = false;
        let id = self.timers.schedule_at(now_ms, self.fade_ms, index);
        self.pending = Some((id, index));
    }

    pub fn next(&mut self, now_ms: u64) {
        if self.len == 0 {
            return;
        }
        self.go_to((self.active + 1) % self.len, now_ms);
    }

    pub fn previous(&mut self, now_ms: u64) {
        if self.len == 0 {
            return;
        }
        self.go_to((self.active + self.len - 1) % self.len, now_ms);
    }

    /// Fire the fade timer if it is due at `now_ms`
    pub fn advance(&mut self, now_ms: u64) {
        for (id, index) in self.timers.advance(now_ms) {
            if self.pending.is_some_and(|(pending, _)| pending == id) {
                self.pending = None;
            }
            debug!(from = self.active, to = index, "testimonial fade");
            self.active = index;
            self.visible = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_to_hides_then_swaps() {
        let mut rotator = FadeRotator::new(4);
        rotator.go_to(2, 0);
        assert!(!rotator.is_visible());
        assert_eq!(rotator.active(), 0);

        rotator.advance(299);
        assert!(!rotator.is_visible());

        rotator.advance(300);
        assert!(rotator.is_visible());
        assert_eq!(rotator.active(), 2);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut rotator = FadeRotator::new(3);
        rotator.previous(0);
        rotator.advance(300);
        assert_eq!(rotator.active(), 2);

        rotator.next(300);
        rotator.advance(600);
        assert_eq!(rotator.active(), 0);
    }

    #[test]
    fn test_newer_go_to_replaces_pending() {
        let mut rotator = FadeRotator::new(5);
        rotator.go_to(1, 0);
        rotator.advance(100);
        rotator.go_to(3, 100);
        rotator.advance(300);
        // The first fade was cancelled
        assert_eq!(rotator.active(), 0);
        rotator.advance(400);
        assert_eq!(rotator.active(), 3);
    }

    #[test]
    fn test_rapid_next_steps_from_active_entry() {
        let mut rotator = FadeRotator::new(5);
        rotator.next(0);
        rotator.next(0);
        assert_eq!(rotator.pending_target(), Some(1));
        rotator.advance(300);
        assert_eq!(rotator.active(), 1);
        assert_eq!(rotator.pending_target(), None);
    }

    #[test]
    fn test_fade_counts_from_switch_after_idle() {
        let mut rotator = FadeRotator::new(3);
        rotator.go_to(1, 8_000);
        rotator.advance(8_016);
        assert!(!rotator.is_visible());
        assert_eq!(rotator.active(), 0);
        rotator.advance(8_300);
        assert_eq!(rotator.active(), 1);
    }

    #[test]
    fn test_empty_rotator_is_inert() {
        let mut rotator = FadeRotator::new(0);
        rotator.next(0);
        rotator.previous(0);
        rotator.go_to(0, 0);
        rotator.advance(1_000);
        assert_eq!(rotator.active(), 0);
        assert!(rotator.is_visible());
    }

    #[test]
    fn test_out_of_range_go_to_is_ignored() {
        let mut rotator = FadeRotator::with_fade(2, 50);
        rotator.go_to(7, 0);
        assert!(rotator.is_visible());
        assert_eq!(rotator.pending_target(), None);
    }
}
