//! Delayed callbacks
//!
//! [`TimerQueue`] stands in for a host timer API: callers
//! schedule a payload after a delay and the host's event loop calls
//! [`TimerQueue::advance`] with the current time to collect what is due.
//! Timers fire in deadline order, ties broken by scheduling order.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

/// Timers that became due in one `advance` call
pub type FiredTimers<T> = SmallVec<[(TimerId, T); 4]>;

#[derive(Debug)]
struct PendingTimer<T> {
    deadline_ms: u64,
    seq: u64,
    payload: T,
}

/// Queue of pending delayed callbacks
#[derive(Debug)]
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, PendingTimer<T>>,
    now_ms: u64,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Time of the last `advance`
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Schedule `payload` to fire `delay_ms` after the current time
    pub fn schedule(&mut self, delay_ms: u64, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(PendingTimer {
            deadline_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            payload,
        })
    }

    /// Schedule `payload` to fire `delay_ms` after `now_ms`
    ///
    /// The clock first moves forward to `now_ms` without firing anything;
    /// it never moves backwards.
    pub fn schedule_at(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> TimerId {
        self.now_ms = self.now_ms.max(now_ms);
        self.schedule(delay_ms, payload)
    }

    /// Cancel a pending timer, returning its payload
    ///
    /// Cancelling a timer that already fired or was cancelled returns None.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|timer| timer.payload)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Cancel everything
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.values().map(|timer| timer.deadline_ms).min()
    }

    /// Move the clock to `now_ms` and remove every timer that is due
    ///
    /// The clock never moves backwards.
    pub fn advance(&mut self, now_ms: u64) -> FiredTimers<T> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let mut due: SmallVec<[(u64, u64, TimerId); 4]> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline_ms <= now)
            .map(|(id, timer)| (timer.deadline_ms, timer.seq, id))
            .collect();
        due.sort_unstable();

        due.into_iter()
            .filter_map(|(_, _, id)| self.timers.remove(id).map(|timer| (id, timer.payload)))
            .collect()
    }
}
