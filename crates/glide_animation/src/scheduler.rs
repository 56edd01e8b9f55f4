//! Animation scheduler
//!
//! Owns every in-flight [`ScrollMotion`] and advances them from an explicit
//! millisecond clock supplied by the host's frame loop. Components hold a weak
//! [`SchedulerHandle`]; once the scheduler is dropped every handle operation
//! becomes a no-op.
//!
//! A single scheduler can be published process-wide. Publishing is tied to a
//! surface lifecycle: install it once a renderable surface exists and tear it
//! down when the surface goes away. [`GlobalSchedulerGuard`] does both.

use std::sync::{Arc, Mutex, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::error::{AnimationError, Result};
use crate::motion::{MotionConfig, ScrollMotion};

// ============================================================================
// Global Scheduler Slot
// ============================================================================

static GLOBAL_SCHEDULER: Mutex<Option<SchedulerHandle>> = Mutex::new(None);

/// Publish `handle` as the process-wide scheduler
///
/// Fails with [`AnimationError::AlreadyInstalled`] while another live
/// scheduler is installed. A slot whose scheduler has been dropped is
/// reclaimed.
pub fn install_global_scheduler(handle: SchedulerHandle) -> Result<()> {
    let mut slot = GLOBAL_SCHEDULER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if slot.as_ref().is_some_and(SchedulerHandle::is_alive) {
        return Err(AnimationError::AlreadyInstalled);
    }
    *slot = Some(handle);
    tracing::debug!("global animation scheduler installed");
    Ok(())
}

/// Remove the process-wide scheduler, returning the previous handle
pub fn teardown_global_scheduler() -> Option<SchedulerHandle> {
    let previous = GLOBAL_SCHEDULER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .take();
    if previous.is_some() {
        tracing::debug!("global animation scheduler torn down");
    }
    previous
}

/// The process-wide scheduler, if installed and still alive
pub fn global_scheduler() -> Option<SchedulerHandle> {
    GLOBAL_SCHEDULER
        .lock()
        .ok()?
        .as_ref()
        .filter(|handle| handle.is_alive())
        .cloned()
}

/// Check whether a live scheduler is installed
pub fn is_scheduler_installed() -> bool {
    global_scheduler().is_some()
}

/// Installs a scheduler on creation and tears it down on drop
#[must_use = "the global scheduler is torn down when the guard is dropped"]
pub struct GlobalSchedulerGuard {
    _private: (),
}

impl GlobalSchedulerGuard {
    pub fn install(handle: SchedulerHandle) -> Result<Self> {
        install_global_scheduler(handle)?;
        Ok(Self { _private: () })
    }
}

impl Drop for GlobalSchedulerGuard {
    fn drop(&mut self) {
        teardown_global_scheduler();
    }
}

// ============================================================================
// Scheduler
// ============================================================================

new_key_type! {
    /// Handle to a registered motion
    pub struct MotionId;
}

struct SchedulerInner {
    motions: SlotMap<MotionId, ScrollMotion>,
    now_ms: u64,
}

/// Ticks all registered motions
///
/// Typically owned by the host's frame loop and shared via [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                motions: SlotMap::with_key(),
                now_ms: 0,
            })),
        }
    }

    /// Get a weak handle for components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance every motion to `now_ms`
    ///
    /// Returns true while any motion is still moving.
    pub fn tick(&self, now_ms: u64) -> bool {
        let Ok(mut inner) = self.inner.lock() else {
            return false;
        };
        inner.now_ms = inner.now_ms.max(now_ms);
        let now = inner.now_ms;
        for (_, motion) in inner.motions.iter_mut() {
            motion.advance(now);
        }
        inner.motions.iter().any(|(_, m)| !m.is_settled())
    }

    pub fn now_ms(&self) -> u64 {
        self.inner.lock().map(|inner| inner.now_ms).unwrap_or(0)
    }

    pub fn has_active_motions(&self) -> bool {
        self.inner
            .lock()
            .map(|inner| inner.motions.iter().any(|(_, m)| !m.is_settled()))
            .unwrap_or(false)
    }

    pub fn motion_count(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.motions.len())
            .unwrap_or(0)
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl std::fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl SchedulerHandle {
    /// Check if the scheduler still exists
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Scheduler clock, or 0 once dropped
    pub fn now_ms(&self) -> u64 {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().ok().map(|guard| guard.now_ms))
            .unwrap_or(0)
    }

    /// Start a motion from `from` to `to` at the scheduler's current time
    pub fn start_motion(&self, config: MotionConfig, from: f32, to: f32) -> Option<MotionId> {
        let inner = self.inner.upgrade()?;
        let mut guard = inner.lock().ok()?;
        let motion = ScrollMotion::start(config, from, to, guard.now_ms);
        Some(guard.motions.insert(motion))
    }

    /// Redirect a motion toward `to`
    pub fn retarget_motion(&self, id: MotionId, to: f32) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut guard) = inner.lock() {
                let now = guard.now_ms;
                if let Some(motion) = guard.motions.get_mut(id) {
                    motion.retarget(to, now);
                }
            }
        }
    }

    pub fn motion_value(&self, id: MotionId) -> Option<f32> {
        let inner = self.inner.upgrade()?;
        let guard = inner.lock().ok()?;
        guard.motions.get(id).map(ScrollMotion::value)
    }

    /// Check if a motion has settled
    ///
    /// A motion that no longer exists counts as settled.
    pub fn is_motion_settled(&self, id: MotionId) -> bool {
        self.inner.upgrade().map_or(true, |inner| {
            inner.lock().ok().map_or(true, |guard| {
                guard.motions.get(id).map_or(true, ScrollMotion::is_settled)
            })
        })
    }

    pub fn remove_motion(&self, id: MotionId) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut guard) = inner.lock() {
                guard.motions.remove(id);
            }
        }
    }
}

// ============================================================================
// Animated Offset
// ============================================================================

/// A scroll offset that animates through the scheduler
///
/// Instant writes drop any in-flight motion; animated writes start or retarget
/// one. The motion is removed from the scheduler when the offset is dropped.
pub struct AnimatedOffset {
    handle: SchedulerHandle,
    config: MotionConfig,
    motion: Option<MotionId>,
    /// Value while no motion is registered
    resting: f32,
    target: f32,
}

impl AnimatedOffset {
    pub fn new(handle: SchedulerHandle, initial: f32, config: MotionConfig) -> Self {
        Self {
            handle,
            config,
            motion: None,
            resting: initial,
            target: initial,
        }
    }

    pub fn get(&self) -> f32 {
        match self.motion {
            Some(id) => self.handle.motion_value(id).unwrap_or(self.target),
            None => self.resting,
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> MotionConfig {
        self.config
    }

    /// Clock of the scheduler driving this offset
    pub fn now_ms(&self) -> u64 {
        self.handle.now_ms()
    }

    /// Animate toward `target`
    ///
    /// Falls back to an instant write when the scheduler is gone.
    pub fn animate_to(&mut self, target: f32) {
        self.target = target;
        if let Some(id) = self.motion {
            if self.handle.motion_value(id).is_some() {
                self.handle.retarget_motion(id, target);
                return;
            }
            self.motion = None;
        }

        let from = self.resting;
        if (target - from).abs() <= f32::EPSILON {
            return;
        }
        match self.handle.start_motion(self.config, from, target) {
            Some(id) => self.motion = Some(id),
            None => self.resting = target,
        }
    }

    /// Jump to `value`, cancelling any motion
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.motion.take() {
            self.handle.remove_motion(id);
        }
        self.resting = value;
        self.target = value;
    }

    pub fn is_animating(&self) -> bool {
        self.motion
            .is_some_and(|id| !self.handle.is_motion_settled(id))
    }

    /// Fold a settled motion back into the resting value
    pub fn release_if_settled(&mut self) {
        if let Some(id) = self.motion {
            if self.handle.is_motion_settled(id) {
                self.resting = self.handle.motion_value(id).unwrap_or(self.target);
                self.handle.remove_motion(id);
                self.motion = None;
            }
        }
    }
}

impl Drop for AnimatedOffset {
    fn drop(&mut self) {
        if let Some(id) = self.motion {
            self.handle.remove_motion(id);
        }
    }
}
