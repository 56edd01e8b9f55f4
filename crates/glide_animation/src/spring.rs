//! Spring physics
//!
//! RK4-integrated damped spring used as an alternative to eased tweens for
//! smooth scrolling. A spring keeps its velocity when retargeted, so a scroll
//! that is redirected mid-flight bends toward the new target instead of
//! restarting from rest.

use serde::{Deserialize, Serialize};

/// Largest integration step; longer frames are split into sub-steps
const MAX_STEP_SECS: f32 = 1.0 / 120.0;

/// Distance from target under which a slow spring counts as settled (px)
const SETTLE_EPSILON: f32 = 0.5;

/// Velocity under which a close spring counts as settled (px/s)
const SETTLE_VELOCITY: f32 = 5.0;

/// Configuration for a spring
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// A gentle, slow spring
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// A stiff, snappy spring
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Critically damped at stiffness 170 (no overshoot past the card)
    pub fn snap() -> Self {
        let stiffness = 170.0;
        Self::new(stiffness, 2.0 * stiffness.sqrt(), 1.0)
    }

    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::snap()
    }
}

/// A spring-driven scalar
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest on `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Move the target; velocity is preserved
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < SETTLE_EPSILON && self.velocity.abs() < SETTLE_VELOCITY
    }

    /// Advance by `dt` seconds, sub-stepping long frames
    pub fn advance(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            self.step(h);
            remaining -= h;
        }
    }

    /// Single RK4 step of `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let (x, v) = (self.value, self.velocity);
        let k1 = (v, self.acceleration(x, v));
        let k2 = {
            let (x2, v2) = (x + k1.0 * dt * 0.5, v + k1.1 * dt * 0.5);
            (v2, self.acceleration(x2, v2))
        };
        let k3 = {
            let (x3, v3) = (x + k2.0 * dt * 0.5, v + k2.1 * dt * 0.5);
            (v3, self.acceleration(x3, v3))
        };
        let k4 = {
            let (x4, v4) = (x + k3.0 * dt, v + k3.1 * dt);
            (v4, self.acceleration(x4, v4))
        };

        self.value += (k1.0 + 2.0 * k2.0 + 2.0 * k3.0 + k4.0) * dt / 6.0;
        self.velocity += (k1.1 + 2.0 * k2.1 + 2.0 * k3.1 + k4.1) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_on_card_offset() {
        let mut spring = Spring::new(SpringConfig::snap(), 2592.0);
        spring.set_target(2916.0);

        for _ in 0..120 {
            spring.advance(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 2916.0).abs() < SETTLE_EPSILON);
    }

    #[test]
    fn test_snap_config_does_not_overshoot() {
        let mut spring = Spring::new(SpringConfig::snap(), 0.0);
        spring.set_target(324.0);

        for _ in 0..240 {
            spring.advance(1.0 / 60.0);
            assert!(spring.value() <= 324.0 + SETTLE_EPSILON);
        }
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::gentle(), 0.0);
        spring.set_target(324.0);
        for _ in 0..10 {
            spring.advance(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(648.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_long_frame_is_substepped() {
        // A single 500ms frame must stay stable
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1000.0);
        spring.advance(0.5);
        assert!(spring.value().is_finite());
        assert!(spring.value() > 0.0 && spring.value() < 1500.0);
    }

    #[test]
    fn test_snap_to_stops_motion() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(500.0);
        spring.advance(0.05);
        spring.snap_to(120.0);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 120.0);
        assert_eq!(spring.target(), 120.0);
    }

    #[test]
    fn test_presets() {
        assert!(SpringConfig::gentle().is_underdamped());
        assert!(SpringConfig::stiff().is_underdamped());
        assert!(!SpringConfig::snap().is_underdamped());
    }
}
