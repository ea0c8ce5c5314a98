//! Vector types and traits for physics calculations.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// Trait for vector types used in physics calculations.
///
/// Abstracts over dimensionality (2D, 3D) so the cloth code is generic
/// over the vector type. The grid always lies in the XY plane; a 3D
/// vector keeps `z` at zero unless an interaction moves it.
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Vector in the XY plane (any further components are zero).
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    /// Unit vector along +Y, which points down in screen space.
    fn unit_y() -> Self {
        Self::from_xy(Self::Scalar::zero(), Self::Scalar::one())
    }

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// Squared distance between two points.
    fn distance_sq(self, other: Self) -> Self::Scalar {
        (self - other).length_sq()
    }

    /// All components finite.
    fn is_finite(self) -> bool;

    /// Mirror each component back inside `[min, max]`.
    ///
    /// A component past an edge is reflected with `2 * edge - c`. If the
    /// reflection lands past the opposite edge it is clamped.
    fn reflect_within(self, min: Self, max: Self) -> Self;
}

fn reflect<F: Float>(c: F, min: F, max: F) -> F {
    let c = if c < min {
        min * F::two() - c
    } else if c > max {
        max * F::two() - c
    } else {
        return c;
    };
    c.clamp(min, max)
}

// --------------------------------------------------------------------------
// Vec2<F> — 2D vector
// --------------------------------------------------------------------------

/// 2D vector for planar cloth in screen space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn from_xy(x: F, y: F) -> Self { Vec2 { x, y } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
    fn reflect_within(self, min: Self, max: Self) -> Self {
        Vec2 {
            x: reflect(self.x, min.x, max.x),
            y: reflect(self.y, min.y, max.y),
        }
    }
}

// --------------------------------------------------------------------------
// Vec3<F> — 3D vector
// --------------------------------------------------------------------------

/// 3D vector, for cloth driven by a tracker that reports depth.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn from_xy(x: F, y: F) -> Self { Vec3 { x, y, z: F::zero() } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
    fn reflect_within(self, min: Self, max: Self) -> Self {
        Vec3 {
            x: reflect(self.x, min.x, max.x),
            y: reflect(self.y, min.y, max.y),
            z: reflect(self.z, min.z, max.z),
        }
    }
}
