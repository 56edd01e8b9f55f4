//! Time-based eased interpolation between two offsets

use crate::easing::Easing;

/// An eased transition from `from` to `to` over a fixed duration
///
/// The tween remembers the clock time it was last advanced to, so its value
/// can be read between ticks.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
    now_ms: u64,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
            now_ms: start_ms,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Progress in `[0, 1]` at `now_ms`
    pub fn progress_at(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Value at `now_ms`
    pub fn sample(&self, now_ms: u64) -> f32 {
        let t = self.progress_at(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// Value at the last advanced time
    pub fn value(&self) -> f32 {
        self.sample(self.now_ms)
    }

    pub fn advance(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn is_done(&self) -> bool {
        self.now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Restart toward `to` from the current value
    pub fn retarget(&mut self, to: f32, now_ms: u64) {
        self.advance(now_ms);
        let current = self.value();
        *self = Self::new(current, to, self.now_ms, self.duration_ms, self.easing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_midpoint_and_end() {
        let mut tween = Tween::new(0.0, 324.0, 1000, 300, Easing::Linear);
        assert_eq!(tween.value(), 0.0);
        tween.advance(1150);
        assert!((tween.value() - 162.0).abs() < 0.01);
        assert!(!tween.is_done());
        tween.advance(1300);
        assert_eq!(tween.value(), 324.0);
        assert!(tween.is_done());
    }

    #[test]
    fn test_clock_never_runs_backwards() {
        let mut tween = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
        tween.advance(80);
        tween.advance(20);
        assert!((tween.value() - 80.0).abs() < 0.01);
    }

    #[test]
    fn test_retarget_continues_from_current_value() {
        let mut tween = Tween::new(0.0, 300.0, 0, 100, Easing::Linear);
        tween.retarget(600.0, 50);
        assert!((tween.value() - 150.0).abs() < 0.01);
        assert_eq!(tween.target(), 600.0);
        tween.advance(150);
        assert_eq!(tween.value(), 600.0);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let mut tween = Tween::new(10.0, 20.0, 0, 0, Easing::ExpoOut);
        tween.advance(1);
        assert_eq!(tween.value(), 20.0);
        assert!(tween.is_done());
    }
}
