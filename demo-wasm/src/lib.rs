use curtain::{
    Bounds, ClothError, Command, MeshConfig, NoOpStepObserver, PointerTracker, Simulation,
    SimulationConfig, Vec2,
};
use wasm_bindgen::prelude::*;

/// Distance between the top of the canvas and the pinned row.
const TOP_MARGIN: f32 = 5.0;

fn to_js(err: ClothError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn mesh_for(height: f32) -> MeshConfig<f32> {
    MeshConfig::new().with_origin_y(TOP_MARGIN - height / 2.0)
}

// ---- Curtain Demo ----

/// A hanging curtain driven by `requestAnimationFrame` timestamps.
///
/// The simulation is centred on the canvas; every coordinate crossing
/// this boundary is in canvas pixels with the origin at the top-left.
#[wasm_bindgen]
pub struct CurtainDemo {
    sim: Simulation<Vec2<f32>>,
    tracker: PointerTracker<Vec2<f32>>,
    held: Option<Vec2<f32>>,
    half_width: f32,
    half_height: f32,
}

#[wasm_bindgen]
impl CurtainDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<CurtainDemo, JsValue> {
        let sim = Simulation::new(
            mesh_for(height),
            SimulationConfig::new(),
            Bounds::viewport(width, height).map_err(to_js)?,
        )
        .map_err(to_js)?;
        Ok(CurtainDemo {
            sim,
            tracker: PointerTracker::pointer(),
            held: None,
            half_width: width / 2.0,
            half_height: height / 2.0,
        })
    }

    /// Advance to the given timestamp and apply the current drag.
    ///
    /// Returns the number of fixed steps that ran.
    pub fn frame(&mut self, now_ms: f64) -> u32 {
        let now = if now_ms.is_finite() && now_ms > 0.0 { now_ms as u64 } else { 0 };
        let drag = self.tracker.track(self.held);
        self.sim.frame(now, drag, &mut NoOpStepObserver).timing.sub_steps
    }

    pub fn pointer(&mut self, x: f32, y: f32) {
        self.held = Some(Vec2::new(x - self.half_width, y - self.half_height));
    }

    pub fn release(&mut self) {
        self.held = None;
        self.tracker.release();
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.release();
        self.sim.apply(Command::Reset, &mut NoOpStepObserver).map_err(to_js)
    }

    /// Rebuild the curtain for a resized canvas.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        let bounds = Bounds::viewport(width, height).map_err(to_js)?;
        let mut sim = Simulation::new(mesh_for(height), self.sim.config().clone(), bounds).map_err(to_js)?;
        if self.sim.gravity_enabled() != sim.gravity_enabled() {
            sim.toggle_gravity();
        }
        self.sim = sim;
        self.half_width = width / 2.0;
        self.half_height = height / 2.0;
        self.release();
        Ok(())
    }

    pub fn toggle_gravity(&mut self) -> bool {
        self.sim.toggle_gravity();
        self.sim.gravity_enabled()
    }

    /// Forward a key press; `r` resets and `g` toggles gravity.
    pub fn key(&mut self, key: char) -> Result<bool, JsValue> {
        match Command::from_key(key) {
            Some(command) => {
                self.sim.apply(command, &mut NoOpStepObserver).map_err(to_js)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.sim.positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x + self.half_width);
            out.push(p.y + self.half_height);
        }
        out
    }

    /// Returns flat [ax, ay, bx, by, ...] for every visible link
    pub fn segments(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sim.mesh().link_count() * 4);
        for (a, b) in self.sim.drawable_segments() {
            out.extend_from_slice(&[
                a.x + self.half_width,
                a.y + self.half_height,
                b.x + self.half_width,
                b.y + self.half_height,
            ]);
        }
        out
    }

    pub fn cols(&self) -> usize {
        self.sim.mesh().cols()
    }
    pub fn rows(&self) -> usize {
        self.sim.mesh().rows()
    }
}
