//! Cloth mesh: a grid of Verlet particles wired with distance links.

use crate::bounds::Bounds;
use crate::error::{ClothError, Result};
use crate::float::Float;
use crate::interaction::Interaction;
use crate::link::Link;
use crate::particle::{Particle, DEFAULT_DAMPING, DEFAULT_MASS};
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Configuration for a cloth mesh.
///
/// `rows` and `cols` count grid cells, so the mesh holds
/// `(rows + 1) * (cols + 1)` particles.
///
/// # Builder Pattern
/// ```
/// use curtain::mesh::MeshConfig;
///
/// let config: MeshConfig<f32> = MeshConfig::new()
///     .with_size(14, 24)
///     .with_spacing(5.0)
///     .with_stride(2)
///     .with_origin_y(-295.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MeshConfig<F: Float> {
    pub rows: usize,
    pub cols: usize,
    /// Rest length of structural links and distance between neighbours.
    pub spacing: F,
    /// Only every `stride`-th row and column carries structural links.
    pub stride: usize,
    /// Y coordinate of the top row. Columns are centred on x = 0.
    pub origin_y: F,
    pub stiffness: F,
    pub particle_mass: F,
    pub damping: F,
    /// Stiffness of invisible diagonal links, if any.
    pub shear_stiffness: Option<F>,
    pub pin_top_row: bool,
}

impl<F: Float> MeshConfig<F> {
    /// A 56 x 96 curtain with 5-unit spacing and structural links on
    /// every fourth row and column.
    pub fn new() -> Self {
        MeshConfig {
            rows: 56,
            cols: 96,
            spacing: F::from_f32(5.0),
            stride: 4,
            origin_y: F::zero(),
            stiffness: F::one(),
            particle_mass: F::from_f32(DEFAULT_MASS),
            damping: F::from_f32(DEFAULT_DAMPING),
            shear_stiffness: None,
            pin_top_row: true,
        }
    }

    pub fn with_size(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    pub fn with_origin_y(mut self, origin_y: F) -> Self {
        self.origin_y = origin_y;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_mass(mut self, mass: F) -> Self {
        self.particle_mass = mass;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Add diagonal links with the given stiffness.
    pub fn with_shear(mut self, stiffness: F) -> Self {
        self.shear_stiffness = Some(stiffness);
        self
    }

    pub fn with_pin_top_row(mut self, pin: bool) -> Self {
        self.pin_top_row = pin;
        self
    }

    /// Check everything that can be checked without building the grid.
    pub fn validate(&self) -> Result<()> {
        if !(self.spacing > F::zero()) || !self.spacing.is_finite() {
            return Err(ClothError::InvalidSpacing(self.spacing.to_f64()));
        }
        if self.stride == 0 {
            return Err(ClothError::InvalidStride);
        }
        if !self.origin_y.is_finite() {
            return Err(ClothError::InvalidOrigin(self.origin_y.to_f64()));
        }
        for stiffness in core::iter::once(self.stiffness).chain(self.shear_stiffness) {
            if !(stiffness >= F::zero() && stiffness <= F::one()) {
                return Err(ClothError::InvalidStiffness(stiffness.to_f64()));
            }
        }
        if !(self.particle_mass > F::zero()) || !self.particle_mass.is_finite() {
            return Err(ClothError::InvalidMass(self.particle_mass.to_f64()));
        }
        if !(self.damping >= F::zero()) || !self.damping.is_finite() {
            return Err(ClothError::InvalidDamping(self.damping.to_f64()));
        }
        Ok(())
    }
}

impl<F: Float> Default for MeshConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloth mesh built from a grid of Verlet particles.
///
/// Particles and links live in two arenas with stable indices. Each link
/// is owned by its first endpoint, which lists it in [`Particle::links`].
#[derive(Clone, Debug, PartialEq)]
pub struct ClothMesh<V: Vec> {
    particles: AllocVec<Particle<V>>,
    links: AllocVec<Link<V>>,
    cols: usize,
    rows: usize,
}

impl<V: Vec> ClothMesh<V> {
    /// Build the grid described by `config`.
    ///
    /// Particle `(x, y)` has index `y * (cols + 1) + x` and starts at
    /// `((x - cols / 2) * spacing, origin_y + y * spacing)`.
    ///
    /// Particle `(x, y)` links to its left neighbour when `y` is a
    /// multiple of the stride, and to the particle above when `x` is.
    /// A stride that does not divide `rows` or `cols` leaves the last
    /// rows or columns hanging free.
    pub fn build(config: &MeshConfig<V::Scalar>) -> Result<Self> {
        config.validate()?;

        let cols = config.cols;
        let rows = config.rows;
        let width = cols + 1;
        let spacing = config.spacing;
        let k = config.stride;
        let mid = (cols / 2) as f32;
        let diagonal = spacing * V::Scalar::two().sqrt();

        let mut mesh = ClothMesh {
            particles: AllocVec::with_capacity(width * (rows + 1)),
            links: AllocVec::new(),
            cols,
            rows,
        };

        for y in 0..=rows {
            for x in 0..=cols {
                let pos = V::from_xy(
                    V::Scalar::from_f32(x as f32 - mid) * spacing,
                    config.origin_y + V::Scalar::from_f32(y as f32) * spacing,
                );
                let mut particle = Particle::new(pos, config.particle_mass, config.damping)?;
                if y == 0 && config.pin_top_row {
                    particle.pin_to(pos);
                }
                mesh.particles.push(particle);
                let idx = mesh.particles.len() - 1;

                if x != 0 && y % k == 0 {
                    mesh.attach(idx, idx - 1, spacing, config.stiffness, true)?;
                }
                if y != 0 && x % k == 0 {
                    mesh.attach(idx, idx - width, spacing, config.stiffness, true)?;
                }

                if let Some(shear) = config.shear_stiffness {
                    if y != 0 && x != 0 {
                        mesh.attach(idx, idx - width - 1, diagonal, shear, false)?;
                    }
                    if y != 0 && x != cols {
                        mesh.attach(idx, idx - width + 1, diagonal, shear, false)?;
                    }
                }
            }
        }

        if mesh.links.is_empty() {
            return Err(ClothError::NoStructuralLinks { rows, cols, stride: k });
        }

        Ok(mesh)
    }

    /// Replace every particle and link with a fresh build of `config`.
    ///
    /// On error the current mesh is left untouched.
    pub fn rebuild(&mut self, config: &MeshConfig<V::Scalar>) -> Result<()> {
        *self = Self::build(config)?;
        Ok(())
    }

    /// Link `from` to `to`, registering the link with `from` only.
    /// Returns the new link's index.
    pub fn attach(
        &mut self,
        from: usize,
        to: usize,
        resting_distance: V::Scalar,
        stiffness: V::Scalar,
        drawable: bool,
    ) -> Result<usize> {
        let link = Link::new(from, to, &self.particles, resting_distance, stiffness, drawable)?;
        let idx = self.links.len();
        self.links.push(link);
        self.particles[from].push_link(idx);
        Ok(idx)
    }

    /// Run `passes` relaxation sweeps.
    ///
    /// Each sweep visits particles in index order and solves their links
    /// in the order they were attached. Returns how many corrections were
    /// skipped because the endpoints coincided.
    pub fn relax(&mut self, passes: usize) -> usize {
        let mut skipped = 0;
        for _ in 0..passes {
            for p in 0..self.particles.len() {
                for k in 0..self.particles[p].links().len() {
                    let link = self.particles[p].links()[k];
                    if !self.links[link].solve(&mut self.particles) {
                        skipped += 1;
                    }
                }
            }
        }
        skipped
    }

    /// Apply `acceleration * mass` to every particle.
    pub fn apply_gravity(&mut self, acceleration: V) {
        for p in self.particles.iter_mut() {
            let weight = acceleration.scale(p.mass());
            p.apply_force(weight);
        }
    }

    pub fn integrate(&mut self, dt: V::Scalar) {
        for p in self.particles.iter_mut() {
            p.integrate(dt);
        }
    }

    pub fn clamp_to_bounds(&mut self, bounds: &Bounds<V>) {
        for p in self.particles.iter_mut() {
            p.clamp_to_bounds(bounds);
        }
    }

    /// Apply `interaction` to every particle it reaches. Returns the count.
    pub fn apply_interaction(&mut self, interaction: &Interaction<V>) -> usize {
        let mut moved = 0;
        for p in self.particles.iter_mut() {
            if !p.is_pinned() && interaction.reaches(p.pos) {
                p.apply_interaction(interaction.delta());
                moved += 1;
            }
        }
        moved
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * (self.cols + 1) + x
    }

    pub fn particle_at(&self, x: usize, y: usize) -> &Particle<V> {
        &self.particles[self.index(x, y)]
    }

    pub fn particle_mut(&mut self, index: usize) -> &mut Particle<V> {
        &mut self.particles[index]
    }

    pub fn position_at(&self, x: usize, y: usize) -> V {
        self.particle_at(x, y).pos
    }

    pub fn particles(&self) -> &[Particle<V>] { &self.particles }
    pub fn links(&self) -> &[Link<V>] { &self.links }

    pub fn positions(&self) -> AllocVec<V> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Endpoint pairs of every drawable link still owned by a particle.
    pub fn drawable_segments(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.particles
            .iter()
            .flat_map(|p| p.links().iter())
            .map(move |&l| &self.links[l])
            .filter(|l| l.is_drawable())
            .map(move |l| l.endpoints(&self.particles))
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn link_count(&self) -> usize { self.links.len() }
}
