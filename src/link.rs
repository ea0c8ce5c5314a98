//! Distance constraints between two particles.

use crate::error::{ClothError, Result};
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;

/// A distance constraint between two particles of a mesh.
///
/// Endpoints are indices into the particle slice the link is solved
/// against; a link never owns particles.
#[derive(Clone, Debug, PartialEq)]
pub struct Link<V: Vec> {
    p1: usize,
    p2: usize,
    resting_distance: V::Scalar,
    stiffness: V::Scalar,
    scalar_p1: V::Scalar,
    scalar_p2: V::Scalar,
    drawable: bool,
}

impl<V: Vec> Link<V> {
    /// Create a link between `particles[p1]` and `particles[p2]`.
    ///
    /// The correction shares are fixed here from the current masses:
    /// `scalar_p1 = inv_m1 / (inv_m1 + inv_m2) * stiffness`, and
    /// symmetrically for `p2`, so the heavier endpoint moves less.
    pub fn new(
        p1: usize,
        p2: usize,
        particles: &[Particle<V>],
        resting_distance: V::Scalar,
        stiffness: V::Scalar,
        drawable: bool,
    ) -> Result<Self> {
        let count = particles.len();
        for index in [p1, p2] {
            if index >= count {
                return Err(ClothError::ParticleOutOfBounds { index, count });
            }
        }
        if p1 == p2 {
            return Err(ClothError::SelfLink(p1));
        }
        if !(resting_distance >= V::Scalar::zero()) || !resting_distance.is_finite() {
            return Err(ClothError::InvalidRestLength(resting_distance.to_f64()));
        }
        if !(stiffness >= V::Scalar::zero() && stiffness <= V::Scalar::one()) {
            return Err(ClothError::InvalidStiffness(stiffness.to_f64()));
        }

        let im1 = particles[p1].inv_mass();
        let im2 = particles[p2].inv_mass();
        let total = im1 + im2;

        Ok(Link {
            p1,
            p2,
            resting_distance,
            stiffness,
            scalar_p1: im1 / total * stiffness,
            scalar_p2: im2 / total * stiffness,
            drawable,
        })
    }

    /// One relaxation step towards the resting distance.
    ///
    /// Returns `false` without touching either particle when the endpoints
    /// coincide, since the correction direction is undefined.
    pub fn solve(&self, particles: &mut [Particle<V>]) -> bool {
        let delta = particles[self.p1].pos - particles[self.p2].pos;
        let d = delta.length();
        if d.is_near_zero(V::Scalar::from_f32(1e-10)) {
            return false; // degenerate
        }

        let difference = (self.resting_distance - d) / d;
        let p1 = &mut particles[self.p1];
        p1.pos = p1.pos + delta.scale(self.scalar_p1 * difference);
        let p2 = &mut particles[self.p2];
        p2.pos = p2.pos - delta.scale(self.scalar_p2 * difference);
        true
    }

    /// Current positions of both endpoints.
    pub fn endpoints(&self, particles: &[Particle<V>]) -> (V, V) {
        (particles[self.p1].pos, particles[self.p2].pos)
    }

    pub fn p1(&self) -> usize { self.p1 }
    pub fn p2(&self) -> usize { self.p2 }
    pub fn resting_distance(&self) -> V::Scalar { self.resting_distance }
    pub fn stiffness(&self) -> V::Scalar { self.stiffness }
    pub fn scalar_p1(&self) -> V::Scalar { self.scalar_p1 }
    pub fn scalar_p2(&self) -> V::Scalar { self.scalar_p2 }
    pub fn is_drawable(&self) -> bool { self.drawable }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;
    use alloc::vec;

    fn pair(m1: f32, m2: f32) -> alloc::vec::Vec<Particle<Vec2<f32>>> {
        vec![
            Particle::new(Vec2::new(0.0, 0.0), m1, 0.0).unwrap(),
            Particle::new(Vec2::new(10.0, 0.0), m2, 0.0).unwrap(),
        ]
    }

    #[test]
    fn rejects_bad_endpoints() {
        let particles = pair(1.0, 1.0);
        assert_eq!(
            Link::new(0, 2, &particles, 1.0, 1.0, true),
            Err(ClothError::ParticleOutOfBounds { index: 2, count: 2 })
        );
        assert_eq!(Link::new(1, 1, &particles, 1.0, 1.0, true), Err(ClothError::SelfLink(1)));
        assert_eq!(
            Link::new(0, 1, &particles, 1.0, 1.5, true),
            Err(ClothError::InvalidStiffness(1.5))
        );
    }

    #[test]
    fn rejects_bad_rest_length() {
        let particles = pair(1.0, 1.0);
        assert_eq!(
            Link::new(0, 1, &particles, -5.0, 1.0, true),
            Err(ClothError::InvalidRestLength(-5.0))
        );
        assert!(matches!(
            Link::new(0, 1, &particles, f32::NAN, 1.0, true),
            Err(ClothError::InvalidRestLength(_))
        ));
        assert!(matches!(
            Link::new(0, 1, &particles, f32::INFINITY, 1.0, true),
            Err(ClothError::InvalidRestLength(_))
        ));
        // Zero is allowed: it pulls the endpoints together.
        assert!(Link::new(0, 1, &particles, 0.0, 1.0, true).is_ok());
    }

    #[test]
    fn already_at_rest_does_not_move() {
        let mut particles = pair(1.0, 1.0);
        let link = Link::new(0, 1, &particles, 10.0, 1.0, true).unwrap();
        assert!(link.solve(&mut particles));
        assert_eq!(particles[0].pos, Vec2::new(0.0, 0.0));
        assert_eq!(particles[1].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn full_stiffness_equal_masses_corrects_in_one_pass() {
        let mut particles = pair(1.0, 1.0);
        let link = Link::new(0, 1, &particles, 5.0, 1.0, true).unwrap();
        link.solve(&mut particles);
        assert_eq!(particles[0].pos, Vec2::new(2.5, 0.0));
        assert_eq!(particles[1].pos, Vec2::new(7.5, 0.0));
    }
}
