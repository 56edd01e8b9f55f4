//! Glide Animation System
//!
//! Frame-driven motion and time-based callbacks for headless UI components.
//!
//! # Features
//!
//! - **Easing**: named easing curves, including the exponential ease-out used
//!   for page smooth scrolling
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Scroll Motions**: eased tweens or springs that can be retargeted mid-flight
//! - **Scheduler**: ticks every registered motion from an explicit clock, with
//!   weak handles and a lifecycle-gated process-wide slot
//! - **Timers**: a deterministic queue of delayed callbacks (debounce, settle)

pub mod easing;
pub mod error;
pub mod motion;
pub mod scheduler;
pub mod spring;
pub mod timer;
pub mod tween;

pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use motion::{MotionConfig, ScrollMotion};
pub use scheduler::{
    global_scheduler, install_global_scheduler, is_scheduler_installed,
    teardown_global_scheduler, AnimatedOffset, AnimationScheduler, GlobalSchedulerGuard, MotionId,
    SchedulerHandle,
};
pub use spring::{Spring, SpringConfig};
pub use timer::{FiredTimers, TimerId, TimerQueue};
pub use tween::Tween;
