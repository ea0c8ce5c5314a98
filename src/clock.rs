//! Fixed-timestep accumulator.
//!
//! Converts wall-clock frame intervals into a whole number of fixed
//! simulation steps plus a carried remainder, all in integer milliseconds
//! so no elapsed time is ever lost or counted twice.

use crate::error::{ClothError, Result};

/// Default fixed step, in milliseconds.
pub const DEFAULT_FIXED_STEP_MS: u32 = 25;
/// Default cap on sub-steps per frame.
pub const DEFAULT_MAX_SUB_STEPS: u32 = 10;

/// Timing of one frame as seen by the accumulator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameTiming {
    /// Milliseconds since the previous frame.
    pub delta_ms: u64,
    /// Fixed steps to run this frame.
    pub sub_steps: u32,
    /// Fixed steps the elapsed time called for, before any cap.
    pub requested_sub_steps: u64,
    /// Milliseconds carried into the next frame.
    pub leftover_ms: u64,
    /// Milliseconds discarded by the sub-step cap.
    pub dropped_ms: u64,
}

impl FrameTiming {
    pub fn was_clamped(&self) -> bool {
        self.requested_sub_steps > self.sub_steps as u64
    }
}

/// Fixed-timestep accumulator.
///
/// For every frame, `sub_steps * fixed_step_ms + leftover_ms + dropped_ms`
/// equals `delta_ms` plus the previous leftover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedStepClock {
    fixed_step_ms: u32,
    max_sub_steps: Option<u32>,
    previous_ms: Option<u64>,
    leftover_ms: u64,
}

impl FixedStepClock {
    pub fn new(fixed_step_ms: u32, max_sub_steps: Option<u32>) -> Result<Self> {
        if fixed_step_ms == 0 {
            return Err(ClothError::InvalidFixedStep);
        }
        Ok(FixedStepClock {
            fixed_step_ms,
            max_sub_steps,
            previous_ms: None,
            leftover_ms: 0,
        })
    }

    /// Account for a frame at `now_ms`.
    ///
    /// The first call after construction or [`reset`](Self::reset) only
    /// records the baseline. A clock reading earlier than the previous one
    /// counts as no elapsed time.
    pub fn advance(&mut self, now_ms: u64) -> FrameTiming {
        let delta_ms = match self.previous_ms.replace(now_ms) {
            Some(previous) => now_ms.saturating_sub(previous),
            None => 0,
        };

        let fixed = self.fixed_step_ms as u64;
        let available = delta_ms.saturating_add(self.leftover_ms);
        let requested = available / fixed;

        let cap = self.max_sub_steps.unwrap_or(u32::MAX);
        let sub_steps = u32::try_from(requested).unwrap_or(u32::MAX).min(cap);
        let leftover = if (sub_steps as u64) < requested {
            // stalled, drop the excess rather than carry it
            0
        } else {
            available - requested * fixed
        };
        let dropped_ms = available - sub_steps as u64 * fixed - leftover;

        self.leftover_ms = leftover;
        FrameTiming {
            delta_ms,
            sub_steps,
            requested_sub_steps: requested,
            leftover_ms: leftover,
            dropped_ms,
        }
    }

    /// Forget the baseline and any carried time.
    pub fn reset(&mut self) {
        self.previous_ms = None;
        self.leftover_ms = 0;
    }

    pub fn fixed_step_ms(&self) -> u32 { self.fixed_step_ms }
    pub fn max_sub_steps(&self) -> Option<u32> { self.max_sub_steps }
    pub fn leftover_ms(&self) -> u64 { self.leftover_ms }
}
