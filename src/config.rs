//! Configuration for the simulation stepper.

use crate::clock::{DEFAULT_FIXED_STEP_MS, DEFAULT_MAX_SUB_STEPS};
use crate::error::{ClothError, Result};
use crate::float::Float;
use crate::vec::Vec;

/// Default gravity: 9.8 scaled by 40 to suit pixel units.
pub const DEFAULT_GRAVITY: f32 = 392.0;
/// Default relaxation passes per fixed step.
pub const DEFAULT_RELAXATION_PASSES: usize = 3;

/// Configuration for the simulation stepper.
///
/// # Builder Pattern
/// ```
/// use curtain::config::SimulationConfig;
/// use curtain::vec::Vec2;
///
/// let config: SimulationConfig<Vec2<f32>> = SimulationConfig::new()
///     .with_fixed_step_ms(16)
///     .with_relaxation_passes(5)
///     .with_gravity(9.81)
///     .with_max_sub_steps(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig<V: Vec> {
    /// Duration of one physics step in milliseconds. Default: 25.
    pub fixed_step_ms: u32,
    /// Constraint passes per step. More passes give a tighter cloth at a
    /// linear cost. Default: 3.
    pub relaxation_passes: usize,
    /// Gravity magnitude restored when gravity is toggled back on.
    /// Default: 392.
    pub gravity: V::Scalar,
    /// Direction gravity pulls in. Default: +Y (down in screen space).
    pub gravity_direction: V,
    /// Most steps run in a single frame; `None` for no cap. Default: 10.
    pub max_sub_steps: Option<u32>,
}

impl<V: Vec> SimulationConfig<V> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            fixed_step_ms: DEFAULT_FIXED_STEP_MS,
            relaxation_passes: DEFAULT_RELAXATION_PASSES,
            gravity: V::Scalar::from_f32(DEFAULT_GRAVITY),
            gravity_direction: V::unit_y(),
            max_sub_steps: Some(DEFAULT_MAX_SUB_STEPS),
        }
    }

    pub fn with_fixed_step_ms(mut self, ms: u32) -> Self {
        self.fixed_step_ms = ms;
        self
    }

    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes;
        self
    }

    pub fn with_gravity(mut self, magnitude: V::Scalar) -> Self {
        self.gravity = magnitude;
        self
    }

    pub fn with_gravity_direction(mut self, direction: V) -> Self {
        self.gravity_direction = direction;
        self
    }

    pub fn with_max_sub_steps(mut self, max: u32) -> Self {
        self.max_sub_steps = Some(max.max(1));
        self
    }

    /// Run every step the elapsed time calls for, however many.
    pub fn without_sub_step_cap(mut self) -> Self {
        self.max_sub_steps = None;
        self
    }

    /// Fixed step in seconds, as passed to integration.
    pub fn fixed_step_seconds(&self) -> V::Scalar {
        V::Scalar::from_millis(self.fixed_step_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fixed_step_ms == 0 {
            return Err(ClothError::InvalidFixedStep);
        }
        if !self.gravity.is_finite() || !self.gravity_direction.is_finite() {
            return Err(ClothError::InvalidGravity);
        }
        Ok(())
    }
}

impl<V: Vec> Default for SimulationConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    #[test]
    fn defaults() {
        let c: SimulationConfig<Vec2<f32>> = SimulationConfig::default();
        assert_eq!(c.fixed_step_ms, 25);
        assert_eq!(c.relaxation_passes, 3);
        assert_eq!(c.gravity, 392.0);
        assert_eq!(c.gravity_direction, Vec2::new(0.0, 1.0));
        assert_eq!(c.max_sub_steps, Some(10));
        assert!((c.fixed_step_seconds() - 0.025).abs() < 1e-7);
    }

    #[test]
    fn rejects_zero_step_and_nan_gravity() {
        let c: SimulationConfig<Vec2<f32>> = SimulationConfig::new().with_fixed_step_ms(0);
        assert_eq!(c.validate(), Err(ClothError::InvalidFixedStep));
        let c: SimulationConfig<Vec2<f32>> = SimulationConfig::new().with_gravity(f32::NAN);
        assert_eq!(c.validate(), Err(ClothError::InvalidGravity));
    }
}
