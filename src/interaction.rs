//! Direct manipulation input: per-frame displacements applied to the cloth.

use crate::float::Float;
use crate::vec::Vec;

/// Default reach of a pointer drag.
pub const DEFAULT_INFLUENCE_RADIUS: f32 = 30.0;

/// Limits an interaction to particles near a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Influence<V: Vec> {
    pub center: V,
    pub radius: V::Scalar,
}

/// One frame's worth of direct manipulation.
///
/// The delta is a displacement, not a force: it is added to the positions
/// of every particle the interaction reaches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interaction<V: Vec> {
    delta: V,
    influence: Option<Influence<V>>,
}

impl<V: Vec> Interaction<V> {
    /// Move every particle by `delta`.
    pub fn everywhere(delta: V) -> Self {
        Interaction { delta, influence: None }
    }

    /// Move particles within `radius` of `center` by `delta`.
    pub fn near(center: V, radius: V::Scalar, delta: V) -> Self {
        Interaction {
            delta,
            influence: Some(Influence { center, radius }),
        }
    }

    pub fn delta(&self) -> V {
        self.delta
    }

    pub fn influence(&self) -> Option<&Influence<V>> {
        self.influence.as_ref()
    }

    /// Whether a particle at `point` is moved by this interaction.
    pub fn reaches(&self, point: V) -> bool {
        match &self.influence {
            None => true,
            Some(i) => point.distance_sq(i.center) < i.radius * i.radius,
        }
    }
}

/// Turns absolute pointer or hand samples into per-frame interactions.
///
/// Feed it the latest sample once per frame; it returns the displacement
/// since the previous sample. A missing sample ends the drag, and the
/// next one starts a new drag without a jump.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker<V: Vec> {
    last: Option<V>,
    radius: Option<V::Scalar>,
}

impl<V: Vec> PointerTracker<V> {
    /// Track a source that moves the whole cloth, like a tracked hand.
    pub fn new() -> Self {
        PointerTracker { last: None, radius: None }
    }

    /// Track a pointer that only drags particles within `radius` of it.
    pub fn with_radius(radius: V::Scalar) -> Self {
        PointerTracker { last: None, radius: Some(radius) }
    }

    /// A pointer with [`DEFAULT_INFLUENCE_RADIUS`].
    pub fn pointer() -> Self {
        Self::with_radius(V::Scalar::from_f32(DEFAULT_INFLUENCE_RADIUS))
    }

    /// Consume this frame's sample.
    pub fn track(&mut self, sample: Option<V>) -> Option<Interaction<V>> {
        let current = match sample {
            Some(p) => p,
            None => {
                self.last = None;
                return None;
            }
        };
        let previous = self.last.replace(current)?;
        let delta = current - previous;
        Some(match self.radius {
            Some(radius) => Interaction::near(current, radius, delta),
            None => Interaction::everywhere(delta),
        })
    }

    pub fn release(&mut self) {
        self.last = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.last.is_some()
    }
}
