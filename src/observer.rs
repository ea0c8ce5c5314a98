//! Step observer trait for monitoring the simulation.

use crate::clock::FrameTiming;

/// Trait for observing simulation progress.
///
/// Implement this trait to monitor the stepper (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after each relaxation pass over all links.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a fixed step is fully complete.
    fn on_sub_step_complete(&mut self, _sub_step: u32) {}

    /// Called when link corrections were skipped because both endpoints
    /// sat on the same point.
    fn on_degenerate_links(&mut self, _skipped: usize) {}

    /// Called when the sub-step cap cut a frame short.
    fn on_sub_steps_clamped(&mut self, _requested: u64, _allowed: u32) {}

    /// Called after the frame's interaction was applied.
    fn on_interaction(&mut self, _particles_moved: usize) {}

    /// Called once per frame, after all steps and the interaction.
    fn on_frame_complete(&mut self, _timing: &FrameTiming) {}

    /// Called after the mesh was rebuilt.
    fn on_reset(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Counts every event it sees.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepCounter {
    pub relaxation_passes: usize,
    pub integrations: usize,
    pub sub_steps: usize,
    pub degenerate_links: usize,
    pub clamped_frames: usize,
    pub interactions: usize,
    pub frames: usize,
    pub resets: usize,
}

impl StepObserver for StepCounter {
    fn on_relaxation_pass(&mut self, _pass: usize) {
        self.relaxation_passes += 1;
    }

    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_sub_step_complete(&mut self, _sub_step: u32) {
        self.sub_steps += 1;
    }

    fn on_degenerate_links(&mut self, skipped: usize) {
        self.degenerate_links += skipped;
    }

    fn on_sub_steps_clamped(&mut self, _requested: u64, _allowed: u32) {
        self.clamped_frames += 1;
    }

    fn on_interaction(&mut self, _particles_moved: usize) {
        self.interactions += 1;
    }

    fn on_frame_complete(&mut self, _timing: &FrameTiming) {
        self.frames += 1;
    }

    fn on_reset(&mut self) {
        self.resets += 1;
    }
}
