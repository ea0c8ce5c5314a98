//! The simulation stepper: fixed-timestep physics driven once per frame.

use crate::bounds::Bounds;
use crate::clock::{FixedStepClock, FrameTiming};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::float::Float;
use crate::interaction::Interaction;
use crate::mesh::{ClothMesh, MeshConfig};
use crate::observer::StepObserver;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Discrete commands accepted between frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Rebuild the mesh and restart the clock.
    Reset,
    /// Switch gravity off, or back on to its configured magnitude.
    ToggleGravity,
}

impl Command {
    /// `r` resets, `g` toggles gravity.
    pub fn from_key(key: char) -> Option<Command> {
        match key {
            'r' | 'R' => Some(Command::Reset),
            'g' | 'G' => Some(Command::ToggleGravity),
            _ => None,
        }
    }
}

/// Running totals kept across frames, cleared only on construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationStats {
    pub frames: u64,
    pub sub_steps: u64,
    pub clamped_frames: u64,
    pub dropped_ms: u64,
    pub degenerate_links: u64,
    pub interactions: u64,
    pub resets: u64,
}

/// What happened during one call to [`Simulation::frame`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub timing: FrameTiming,
    /// Particles moved by the interaction, if one was supplied.
    pub interaction_moved: Option<usize>,
    /// Link corrections skipped for coincident endpoints.
    pub degenerate_links: usize,
}

/// A cloth simulation: the mesh plus everything needed to step it.
///
/// All state is owned here; callers drive it with [`frame`](Self::frame)
/// once per rendered frame and read positions back for drawing.
#[derive(Clone, Debug)]
pub struct Simulation<V: Vec> {
    mesh: ClothMesh<V>,
    mesh_config: MeshConfig<V::Scalar>,
    config: SimulationConfig<V>,
    bounds: Bounds<V>,
    clock: FixedStepClock,
    gravity: V::Scalar,
    stats: SimulationStats,
}

impl<V: Vec> Simulation<V> {
    /// Build the mesh and validate all configuration up front.
    pub fn new(
        mesh_config: MeshConfig<V::Scalar>,
        config: SimulationConfig<V>,
        bounds: Bounds<V>,
    ) -> Result<Self> {
        config.validate()?;
        let clock = FixedStepClock::new(config.fixed_step_ms, config.max_sub_steps)?;
        let mesh = ClothMesh::build(&mesh_config)?;
        Ok(Simulation {
            mesh,
            mesh_config,
            gravity: config.gravity,
            config,
            bounds,
            clock,
            stats: SimulationStats::default(),
        })
    }

    /// Advance the simulation to `now_ms`.
    ///
    /// Runs as many fixed steps as the accumulated time allows (possibly
    /// none), then applies `interaction` exactly once.
    pub fn frame<O: StepObserver>(
        &mut self,
        now_ms: u64,
        interaction: Option<Interaction<V>>,
        observer: &mut O,
    ) -> FrameReport {
        let timing = self.clock.advance(now_ms);
        if timing.was_clamped() {
            self.stats.clamped_frames += 1;
            self.stats.dropped_ms += timing.dropped_ms;
            observer.on_sub_steps_clamped(timing.requested_sub_steps, timing.sub_steps);
        }

        let mut degenerate_links = 0;
        for sub_step in 0..timing.sub_steps {
            degenerate_links += self.step_observed(observer);
            observer.on_sub_step_complete(sub_step);
        }
        self.stats.sub_steps += timing.sub_steps as u64;
        self.stats.degenerate_links += degenerate_links as u64;
        if degenerate_links > 0 {
            observer.on_degenerate_links(degenerate_links);
        }

        let interaction_moved = interaction.map(|i| {
            let moved = self.mesh.apply_interaction(&i);
            self.stats.interactions += 1;
            observer.on_interaction(moved);
            moved
        });

        self.stats.frames += 1;
        observer.on_frame_complete(&timing);

        FrameReport { timing, interaction_moved, degenerate_links }
    }

    /// Run a single fixed step outside the clock.
    ///
    /// Returns the number of skipped degenerate link corrections.
    pub fn step(&mut self) -> usize {
        self.step_observed(&mut crate::observer::NoOpStepObserver)
    }

    fn step_observed<O: StepObserver>(&mut self, observer: &mut O) -> usize {
        let mut skipped = 0;
        for pass in 0..self.config.relaxation_passes {
            skipped += self.mesh.relax(1);
            observer.on_relaxation_pass(pass);
        }

        self.mesh.apply_gravity(self.config.gravity_direction.scale(self.gravity));
        self.mesh.integrate(self.config.fixed_step_seconds());
        observer.on_integrate();

        self.mesh.clamp_to_bounds(&self.bounds);
        skipped
    }

    pub fn apply<O: StepObserver>(&mut self, command: Command, observer: &mut O) -> Result<()> {
        match command {
            Command::Reset => self.reset(observer),
            Command::ToggleGravity => {
                self.toggle_gravity();
                Ok(())
            }
        }
    }

    /// Rebuild the mesh from its configuration and restart the clock.
    ///
    /// Gravity keeps its current on/off state.
    pub fn reset<O: StepObserver>(&mut self, observer: &mut O) -> Result<()> {
        self.mesh.rebuild(&self.mesh_config)?;
        self.clock.reset();
        self.stats.resets += 1;
        observer.on_reset();
        Ok(())
    }

    /// Reset against new viewport bounds.
    pub fn reset_with_bounds<O: StepObserver>(
        &mut self,
        bounds: Bounds<V>,
        observer: &mut O,
    ) -> Result<()> {
        self.bounds = bounds;
        self.reset(observer)
    }

    pub fn toggle_gravity(&mut self) {
        self.gravity = if self.gravity != V::Scalar::zero() {
            V::Scalar::zero()
        } else {
            self.config.gravity
        };
    }

    pub fn gravity(&self) -> V::Scalar { self.gravity }
    pub fn gravity_enabled(&self) -> bool { self.gravity != V::Scalar::zero() }

    pub fn positions(&self) -> AllocVec<V> {
        self.mesh.positions()
    }

    pub fn drawable_segments(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.mesh.drawable_segments()
    }

    pub fn mesh(&self) -> &ClothMesh<V> { &self.mesh }
    pub fn mesh_mut(&mut self) -> &mut ClothMesh<V> { &mut self.mesh }
    pub fn mesh_config(&self) -> &MeshConfig<V::Scalar> { &self.mesh_config }
    pub fn config(&self) -> &SimulationConfig<V> { &self.config }
    pub fn bounds(&self) -> &Bounds<V> { &self.bounds }
    pub fn clock(&self) -> &FixedStepClock { &self.clock }
    pub fn stats(&self) -> &SimulationStats { &self.stats }
}
