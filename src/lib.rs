//! Verlet cloth simulation.
//!
//! `curtain` simulates a hanging sheet of cloth: a grid of point masses
//! joined by distance links, integrated with a position-only Verlet
//! scheme and relaxed by repeated constraint passes. A fixed-timestep
//! stepper advances it once per rendered frame and applies an optional
//! drag from a pointer or tracked hand.
//!
//! # Features
//!
//! - **Verlet particles**: implicit velocity, drag, pinning
//! - **Mass-weighted links**: correction shares fixed at construction
//! - **Cloth mesh**: grid builder with structural stride, optional shear
//! - **Fixed-timestep stepper**: integer-millisecond accumulator with a sub-step cap
//! - **Observable**: monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use curtain::{Bounds, Interaction, MeshConfig, NoOpStepObserver, Simulation, SimulationConfig, Vec2};
//!
//! let mut sim: Simulation<Vec2<f32>> = Simulation::new(
//!     MeshConfig::new().with_size(8, 12).with_origin_y(-200.0),
//!     SimulationConfig::new(),
//!     Bounds::viewport(640.0, 480.0).unwrap(),
//! ).unwrap();
//!
//! sim.frame(0, None, &mut NoOpStepObserver);
//! let report = sim.frame(50, Some(Interaction::everywhere(Vec2::new(2.0, 0.0))), &mut NoOpStepObserver);
//! assert_eq!(report.timing.sub_steps, 2);
//! assert_eq!(sim.positions().len(), 9 * 13);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod error;
pub mod bounds;
pub mod particle;
pub mod link;
pub mod interaction;
pub mod mesh;
pub mod clock;
pub mod config;
pub mod observer;
pub mod simulation;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use error::{ClothError, Result};
pub use bounds::Bounds;
pub use particle::Particle;
pub use link::Link;
pub use interaction::{Influence, Interaction, PointerTracker};
pub use mesh::{ClothMesh, MeshConfig};
pub use clock::{FixedStepClock, FrameTiming};
pub use config::SimulationConfig;
pub use observer::{StepObserver, NoOpStepObserver, StepCounter};
pub use simulation::{Command, FrameReport, Simulation, SimulationStats};
