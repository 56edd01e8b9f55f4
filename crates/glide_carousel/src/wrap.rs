//! Slot arithmetic for the triplicated strip
//!
//! Pure functions of the strip length `n`, the current index and the
//! measured geometry. The component applies their results to the host.

use glide_core::CardMetrics;

/// Where the boundary check moves the strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapTarget {
    /// New scroll offset, exactly one copy width away from the old one
    pub offset: f32,
    /// Slot centred at the new offset, within `[n, 2n)` for settled strips
    pub index: usize,
}

/// Boundary check for a resting offset
///
/// Returns the equivalent position in the middle copy when the offset rests
/// on a slot `< n` or `>= 2n`, and None when it is already in the middle copy
/// (or there is nothing to wrap). An offset off either end of the strip, on a
/// slot outside `[0, 3n)`, is left alone.
pub fn wrap_target(offset: f32, n: usize, metrics: CardMetrics) -> Option<WrapTarget> {
    if n == 0 || !metrics.is_measurable() {
        return None;
    }
    let single = n as f32 * metrics.step();
    let slot = metrics.nearest_slot(offset);
    let n_i = n as i64;
    if !(0..3 * n_i).contains(&slot) {
        return None;
    }

    let (offset, slot) = if slot >= 2 * n_i {
        (offset - single, slot - n_i)
    } else if slot < n_i {
        (offset + single, slot + n_i)
    } else {
        return None;
    };

    Some(WrapTarget {
        offset,
        index: slot as usize,
    })
}

/// Nearest slot to a release offset, clamped to `[0, 3n)`
pub fn snap_slot(offset: f32, n: usize, metrics: CardMetrics) -> usize {
    if n == 0 {
        return 0;
    }
    let last = (3 * n - 1) as i64;
    metrics.nearest_slot(offset).clamp(0, last) as usize
}

/// Slot after `index`; running off the strip redirects to the start of the
/// middle copy
pub fn next_slot(index: usize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let target = index + 1;
    if target >= 3 * n {
        n
    } else {
        target
    }
}

/// Slot before `index`; running off the strip redirects to the end of the
/// middle copy
pub fn previous_slot(index: usize, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    match index.checked_sub(1) {
        Some(target) => target.min(3 * n - 1),
        None => 2 * n - 1,
    }
}
