//! Error types for cloth construction and configuration.

use thiserror::Error;

/// Errors raised while building a mesh or validating configuration.
///
/// All of these surface before the first simulation step; the per-frame
/// path never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite (got {0})")]
    InvalidMass(f64),
    /// Damping must be non-negative and finite.
    #[error("damping must be non-negative and finite (got {0})")]
    InvalidDamping(f64),
    /// Stiffness must be in [0, 1].
    #[error("stiffness must be in [0, 1] (got {0})")]
    InvalidStiffness(f64),
    /// Link rest length must be non-negative and finite.
    #[error("rest length must be non-negative and finite (got {0})")]
    InvalidRestLength(f64),
    /// Spacing must be positive and finite.
    #[error("spacing must be positive and finite (got {0})")]
    InvalidSpacing(f64),
    /// Grid origin must be finite.
    #[error("mesh origin must be finite (got {0})")]
    InvalidOrigin(f64),
    /// Structural stride must be at least 1.
    #[error("structural stride must be at least 1")]
    InvalidStride,
    /// The grid configuration would produce no structural links.
    #[error("a {rows}x{cols} grid with stride {stride} has no structural links")]
    NoStructuralLinks { rows: usize, cols: usize, stride: usize },
    /// Fixed step duration must be at least one millisecond.
    #[error("fixed step must be at least 1 ms")]
    InvalidFixedStep,
    /// Gravity magnitude and direction must be finite.
    #[error("gravity must be finite")]
    InvalidGravity,
    /// Bounds must be ordered (`min <= max`) on every axis.
    #[error("bounds minimum must not exceed maximum")]
    InvalidBounds,
    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
    /// A link needs two distinct particles.
    #[error("particle {0} cannot be linked to itself")]
    SelfLink(usize),
}

/// Result alias for cloth operations.
pub type Result<T> = core::result::Result<T, ClothError>;
