//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting floating-point operations needed by the cloth simulation.
///
/// Implemented for `f32` and `f64`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Positive infinity, used for unbounded axes.
    fn infinity() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Neither NaN nor infinite.
    fn is_finite(self) -> bool;
    /// Widen to f64 (for error reporting).
    fn to_f64(self) -> f64;

    /// Convert whole milliseconds to seconds.
    fn from_millis(ms: u32) -> Self {
        Self::from_f32(ms as f32) / Self::from_f32(1000.0)
    }

    /// Clamp self to [min, max].
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn infinity() -> Self { f32::INFINITY }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn to_f64(self) -> f64 { self as f64 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn infinity() -> Self { f64::INFINITY }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self < other { self } else { other } }
    fn max(self, other: Self) -> Self { if self > other { self } else { other } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn to_f64(self) -> f64 { self }
}
