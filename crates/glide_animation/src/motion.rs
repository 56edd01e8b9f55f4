//! Smooth-scroll motions
//!
//! A [`ScrollMotion`] animates a scroll offset toward a target either with a
//! fixed-duration eased tween or with spring physics. Both kinds are driven by
//! the same millisecond clock and can be retargeted while in flight.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::spring::{Spring, SpringConfig};
use crate::tween::Tween;

/// How smooth scrolls move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MotionConfig {
    /// Fixed-duration eased tween
    Eased { duration_ms: u64, easing: Easing },
    /// Spring physics
    Spring(SpringConfig),
}

impl Default for MotionConfig {
    fn default() -> Self {
        MotionConfig::Eased {
            duration_ms: 300,
            easing: Easing::ExpoOut,
        }
    }
}

/// An in-flight smooth scroll
#[derive(Debug, Clone, Copy)]
pub enum ScrollMotion {
    Tween(Tween),
    Spring { spring: Spring, last_ms: u64 },
}

impl ScrollMotion {
    /// Start moving from `from` to `to` at `now_ms`
    pub fn start(config: MotionConfig, from: f32, to: f32, now_ms: u64) -> Self {
        match config {
            MotionConfig::Eased {
                duration_ms,
                easing,
            } => ScrollMotion::Tween(Tween::new(from, to, now_ms, duration_ms, easing)),
            MotionConfig::Spring(config) => {
                let mut spring = Spring::new(config, from);
                spring.set_target(to);
                ScrollMotion::Spring {
                    spring,
                    last_ms: now_ms,
                }
            }
        }
    }

    pub fn value(&self) -> f32 {
        match self {
            ScrollMotion::Tween(tween) => tween.value(),
            ScrollMotion::Spring { spring, .. } => spring.value(),
        }
    }

    pub fn target(&self) -> f32 {
        match self {
            ScrollMotion::Tween(tween) => tween.target(),
            ScrollMotion::Spring { spring, .. } => spring.target(),
        }
    }

    pub fn is_settled(&self) -> bool {
        match self {
            ScrollMotion::Tween(tween) => tween.is_done(),
            ScrollMotion::Spring { spring, .. } => spring.is_settled(),
        }
    }

    /// Advance the motion's clock to `now_ms`
    pub fn advance(&mut self, now_ms: u64) {
        match self {
            ScrollMotion::Tween(tween) => tween.advance(now_ms),
            ScrollMotion::Spring { spring, last_ms } => {
                if now_ms > *last_ms {
                    spring.advance((now_ms - *last_ms) as f32 / 1000.0);
                    *last_ms = now_ms;
                }
                if spring.is_settled() {
                    let target = spring.target();
                    spring.snap_to(target);
                }
            }
        }
    }

    /// Redirect toward `to`, continuing from the current value
    pub fn retarget(&mut self, to: f32, now_ms: u64) {
        match self {
            ScrollMotion::Tween(tween) => tween.retarget(to, now_ms),
            ScrollMotion::Spring { spring, last_ms } => {
                if now_ms > *last_ms {
                    spring.advance((now_ms - *last_ms) as f32 / 1000.0);
                    *last_ms = now_ms;
                }
                spring.set_target(to);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eased_motion_reaches_target() {
        let mut motion = ScrollMotion::start(MotionConfig::default(), 2592.0, 2916.0, 0);
        assert_eq!(motion.value(), 2592.0);
        motion.advance(150);
        assert!(motion.value() > 2592.0 && motion.value() < 2916.0);
        motion.advance(300);
        assert!(motion.is_settled());
        assert_eq!(motion.value(), 2916.0);
    }

    #[test]
    fn test_spring_motion_lands_exactly() {
        let config = MotionConfig::Spring(SpringConfig::snap());
        let mut motion = ScrollMotion::start(config, 0.0, 324.0, 0);
        let mut now = 0;
        while !motion.is_settled() && now < 5000 {
            now += 16;
            motion.advance(now);
        }
        assert!(motion.is_settled());
        assert_eq!(motion.value(), 324.0);
    }

    #[test]
    fn test_retarget_mid_flight() {
        let mut motion = ScrollMotion::start(MotionConfig::default(), 0.0, 324.0, 0);
        motion.advance(100);
        let mid = motion.value();
        motion.retarget(648.0, 100);
        assert_eq!(motion.target(), 648.0);
        assert!((motion.value() - mid).abs() < 0.01);
    }

    #[test]
    fn test_config_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            motion: MotionConfig,
        }

        let eased: Wrapper = toml::from_str(
            "motion = { kind = \"eased\", duration_ms = 250, easing = \"smooth-step\" }",
        )
        .unwrap();
        assert_eq!(
            eased.motion,
            MotionConfig::Eased {
                duration_ms: 250,
                easing: Easing::SmoothStep
            }
        );

        let spring: Wrapper = toml::from_str(
            "motion = { kind = \"spring\", stiffness = 400.0, damping = 30.0, mass = 1.0 }",
        )
        .unwrap();
        assert_eq!(spring.motion, MotionConfig::Spring(SpringConfig::stiff()));
    }
}
