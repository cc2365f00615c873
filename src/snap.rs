//! Grid snapping for logical coordinates.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_GRID_PITCH;

/// Quantizes coordinates to the nearest multiple of `pitch` while enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSnap {
    pub pitch: f64,
    pub enabled: bool,
}

impl Default for GridSnap {
    fn default() -> Self {
        Self { pitch: DEFAULT_GRID_PITCH, enabled: true }
    }
}

impl GridSnap {
    #[must_use]
    pub fn new(pitch: f64, enabled: bool) -> Self {
        Self { pitch, enabled }
    }

    /// A policy that never changes its input.
    #[must_use]
    pub fn disabled() -> Self {
        Self { pitch: DEFAULT_GRID_PITCH, enabled: false }
    }

    /// Whether snapping will actually quantize. A non-positive pitch behaves as disabled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && self.pitch.is_finite() && self.pitch > 0.0
    }

    /// `round(value / pitch) * pitch`, or `value` unchanged when inactive.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        if !self.is_active() {
            return value;
        }
        (value / self.pitch).round() * self.pitch
    }

    /// Snap `value`, then keep the result inside `[min, max]`.
    ///
    /// When the nearest grid line falls outside the range, the closest grid
    /// line inside it is used instead. If the range holds no grid line at all
    /// the raw value is clamped.
    #[must_use]
    pub fn snap_within(&self, value: f64, min: f64, max: f64) -> f64 {
        let max = max.max(min);
        if !self.is_active() {
            return value.clamp(min, max);
        }
        let snapped = self.snap(value);
        if snapped >= min && snapped <= max {
            return snapped;
        }
        let lowest = (min / self.pitch).ceil() * self.pitch;
        let highest = (max / self.pitch).floor() * self.pitch;
        if lowest > highest {
            return value.clamp(min, max);
        }
        if snapped < min { lowest } else { highest }
    }
}
