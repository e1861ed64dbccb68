//! Wall-clock driven animation phase.
//!
//! Nothing here stores animation state: the phase of a squiggle is a pure function of the current
//! time and its configured cycle duration, so two renders at the same instant are identical.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::foundation::error::{SquigglyError, SquigglyResult};
use crate::foundation::math::progress_to_radians;

/// Time for one full phase cycle, in milliseconds. Always > 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CycleDuration(u64);

impl CycleDuration {
    /// The default cycle of one second.
    pub const DEFAULT: Self = Self(1_000);

    /// Validate a cycle duration. Zero and negative durations are rejected.
    pub fn new(ms: i64) -> SquigglyResult<Self> {
        if ms <= 0 {
            return Err(SquigglyError::validation(format!(
                "cycle duration must be > 0 ms, got {ms}"
            )));
        }
        Ok(Self(ms as u64))
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }
}

impl Default for CycleDuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Normalized position within the current cycle, in [0, 1).
pub fn progress(now_ms: u64, cycle: CycleDuration) -> f64 {
    let d = cycle.as_millis();
    (now_ms % d) as f64 / d as f64
}

/// Radian phase at `now_ms`: `progress * 2π + offset_rad`.
pub fn phase(now_ms: u64, cycle: CycleDuration, offset_rad: f64) -> f64 {
    progress_to_radians(progress(now_ms, cycle)) + offset_rad
}

/// Source of the current time, injected into every render.
pub trait TimeSource {
    /// Milliseconds on a monotonic-enough clock. Only differences modulo a cycle matter.
    fn now_ms(&self) -> u64;
}

/// Wall clock (milliseconds since the Unix epoch).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Caller-driven clock for offline rendering and tests.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now: Cell<u64>,
}

impl ManualTimeSource {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    /// Advance by `delta_ms`, wrapping on overflow.
    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().wrapping_add(delta_ms));
    }
}

impl TimeSource for ManualTimeSource {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
