//! Axis-aligned containment box for particles.

use crate::error::{ClothError, Result};
use crate::float::Float;
use crate::vec::{Vec, Vec2, Vec3};

/// Inset from each viewport edge, in the same units as the viewport.
pub const VIEWPORT_MARGIN: f32 = 1.0;

/// Axis-aligned box particles are reflected back into.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds<V: Vec> {
    min: V,
    max: V,
}

impl<V: Vec> Bounds<V> {
    pub fn new(min: V, max: V) -> Result<Self> {
        // Corners of a valid box reflect onto themselves; an inverted or
        // NaN axis moves them.
        if min.reflect_within(min, max) != min || max.reflect_within(min, max) != max {
            return Err(ClothError::InvalidBounds);
        }
        Ok(Bounds { min, max })
    }

    pub fn min(&self) -> V { self.min }
    pub fn max(&self) -> V { self.max }

    pub fn contains(&self, point: V) -> bool {
        point.reflect_within(self.min, self.max) == point
    }
}

impl<F: Float> Bounds<Vec2<F>> {
    /// Bounds for a `width` x `height` viewport with the origin at its
    /// centre, inset by [`VIEWPORT_MARGIN`].
    pub fn viewport(width: F, height: F) -> Result<Self> {
        let margin = F::from_f32(VIEWPORT_MARGIN);
        let hw = width * F::half() - margin;
        let hh = height * F::half() - margin;
        Bounds::new(Vec2::new(-hw, -hh), Vec2::new(hw, hh))
    }
}

impl<F: Float> Bounds<Vec3<F>> {
    /// Like the planar `viewport`, with depth left unbounded.
    pub fn viewport_3d(width: F, height: F) -> Result<Self> {
        let margin = F::from_f32(VIEWPORT_MARGIN);
        let hw = width * F::half() - margin;
        let hh = height * F::half() - margin;
        Bounds::new(
            Vec3::new(-hw, -hh, -F::infinity()),
            Vec3::new(hw, hh, F::infinity()),
        )
    }
}
