//! Verlet particles: point masses with implicit velocity.

use crate::bounds::Bounds;
use crate::error::{ClothError, Result};
use crate::float::Float;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Default particle mass.
pub const DEFAULT_MASS: f32 = 1.0;
/// Default drag coefficient.
pub const DEFAULT_DAMPING: f32 = 20.0;

/// A Verlet particle.
///
/// Velocity is never stored: it is the difference between `pos` and
/// `prev_pos`, see [`Particle::velocity`].
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<V: Vec> {
    pub pos: V,
    pub prev_pos: V,
    pub acceleration: V,
    mass: V::Scalar,
    inv_mass: V::Scalar,
    damping: V::Scalar,
    pinned: bool,
    pin_location: V,
    links: AllocVec<usize>,
}

impl<V: Vec> Particle<V> {
    /// Create a particle at rest.
    ///
    /// `damping` is a drag coefficient applied against velocity, scaled
    /// by the inverse mass; it is not a [0, 1] retention factor.
    pub fn new(pos: V, mass: V::Scalar, damping: V::Scalar) -> Result<Self> {
        if !(mass > V::Scalar::zero()) || !mass.is_finite() {
            return Err(ClothError::InvalidMass(mass.to_f64()));
        }
        if !(damping >= V::Scalar::zero()) || !damping.is_finite() {
            return Err(ClothError::InvalidDamping(damping.to_f64()));
        }
        Ok(Particle {
            pos,
            prev_pos: pos,
            acceleration: V::zero(),
            mass,
            inv_mass: V::Scalar::one() / mass,
            damping,
            pinned: false,
            pin_location: pos,
            links: AllocVec::new(),
        })
    }

    /// `acceleration += force / mass`.
    pub fn apply_force(&mut self, force: V) {
        self.acceleration = self.acceleration + force.scale(self.inv_mass);
    }

    /// Advance one fixed step of `dt` seconds.
    ///
    /// Must be called with a constant `dt`; the position-only scheme loses
    /// accuracy under a varying step.
    pub fn integrate(&mut self, dt: V::Scalar) {
        let velocity = self.velocity();
        self.acceleration = self.acceleration - velocity.scale(self.damping * self.inv_mass);
        let next = self.pos + velocity + self.acceleration.scale(V::Scalar::half() * dt * dt);
        self.prev_pos = self.pos;
        self.pos = next;
        self.acceleration = V::zero();

        if self.pinned {
            self.pos = self.pin_location;
        }
    }

    /// Displace the particle directly, as a drag would.
    ///
    /// `prev_pos` is pulled two thirds of the way towards the new position
    /// so the particle keeps some of the motion after the drag ends.
    /// Pinned particles do not move.
    pub fn apply_interaction(&mut self, delta: V) {
        if self.pinned {
            return;
        }
        self.pos = self.pos + delta;
        let three = V::Scalar::two() + V::Scalar::one();
        self.prev_pos = (self.prev_pos + self.pos.scale(V::Scalar::two())).scale(V::Scalar::one() / three);
    }

    /// Mirror the position back inside `bounds`.
    ///
    /// Only `pos` changes, so whatever velocity carried the particle out
    /// is absorbed at the edge. Pinned particles are left at their pin.
    pub fn clamp_to_bounds(&mut self, bounds: &Bounds<V>) {
        if self.pinned {
            return;
        }
        self.pos = self.pos.reflect_within(bounds.min(), bounds.max());
    }

    pub fn pin_to(&mut self, location: V) {
        self.pinned = true;
        self.pin_location = location;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Implicit velocity, in distance per step.
    pub fn velocity(&self) -> V {
        self.pos - self.prev_pos
    }

    pub fn mass(&self) -> V::Scalar { self.mass }
    pub fn inv_mass(&self) -> V::Scalar { self.inv_mass }
    pub fn damping(&self) -> V::Scalar { self.damping }
    pub fn is_pinned(&self) -> bool { self.pinned }
    pub fn pin_location(&self) -> Option<V> {
        if self.pinned { Some(self.pin_location) } else { None }
    }

    /// Indices of the links this particle owns, in solve order.
    pub fn links(&self) -> &[usize] {
        &self.links
    }

    pub(crate) fn push_link(&mut self, link: usize) {
        self.links.push(link);
    }

    /// Stop solving `link` from this particle. Returns whether it was owned.
    ///
    /// The link itself stays in the mesh arena so other indices remain
    /// stable.
    pub fn remove_link(&mut self, link: usize) -> bool {
        match self.links.iter().position(|&l| l == link) {
            Some(i) => {
                self.links.remove(i);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec2;

    fn particle(x: f32, y: f32) -> Particle<Vec2<f32>> {
        Particle::new(Vec2::new(x, y), 1.0, 0.0).unwrap()
    }

    #[test]
    fn rejects_bad_mass_and_damping() {
        let origin = Vec2::new(0.0f32, 0.0);
        assert_eq!(Particle::new(origin, 0.0, 1.0), Err(ClothError::InvalidMass(0.0)));
        assert!(matches!(Particle::new(origin, f32::NAN, 1.0), Err(ClothError::InvalidMass(_))));
        assert_eq!(Particle::new(origin, 1.0, -2.0), Err(ClothError::InvalidDamping(-2.0)));
    }

    #[test]
    fn force_scaled_by_mass() {
        let mut p = Particle::new(Vec2::new(0.0f32, 0.0), 4.0, 0.0).unwrap();
        p.apply_force(Vec2::new(8.0, 0.0));
        p.apply_force(Vec2::new(0.0, 4.0));
        assert_eq!(p.acceleration, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn integrate_clears_acceleration() {
        let mut p = particle(0.0, 0.0);
        p.apply_force(Vec2::new(0.0, 100.0));
        p.integrate(0.1);
        assert_eq!(p.acceleration, Vec2::zero());
        // 0.5 * 100 * 0.01
        assert!((p.pos.y - 0.5).abs() < 1e-6);
        assert_eq!(p.prev_pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn remove_link_only_removes_owned() {
        let mut p = particle(0.0, 0.0);
        p.push_link(3);
        p.push_link(7);
        assert!(p.remove_link(3));
        assert!(!p.remove_link(3));
        assert_eq!(p.links(), &[7]);
    }
}
