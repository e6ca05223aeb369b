use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world of `cols` x `rows` cells
    #[wasm_bindgen(constructor)]
    pub fn new(cols: u32, rows: u32, cell_width: f64, cell_height: f64) -> Self {
        Self {
            core: WorldCore::new(cols, rows, cell_width, cell_height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.core.body_count() as u32 }

    /// Replace the grid with a `{ cellWidth, cellHeight, tiles }` bundle (drops all bodies)
    pub fn load_level(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_level_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Replace the physics config (camelCase JSON, missing fields take defaults)
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn set_block(&mut self, col: i32, row: i32, code: u8) -> bool {
        self.core.set_block(col, row, code)
    }

    pub fn fill_rect(&mut self, col0: i32, row0: i32, col1: i32, row1: i32, code: u8) -> bool {
        self.core.fill_rect(col0, row0, col1, row1, code)
    }

    pub fn block_at(&self, col: i32, row: i32) -> u8 {
        self.core.block_at(col, row)
    }

    /// Spawn a passive body. Returns the body ID, or 0 if it overlaps solid cells.
    pub fn spawn_body(&mut self, x: f64, y: f64, w: f64, h: f64) -> u32 {
        self.core.spawn_body(x, y, w, h)
    }

    /// Spawn a steered body, e.g. `{ "kind": "chase", "target": 1, "speed": 2 }`
    pub fn spawn_agent(&mut self, x: f64, y: f64, w: f64, h: f64, steering_json: String) -> Result<u32, JsValue> {
        self.core
            .spawn_agent_json(x, y, w, h, &steering_json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn remove_body(&mut self, id: u32) -> bool {
        self.core.remove_body(id)
    }

    pub fn set_body_velocity(&mut self, id: u32, vx: f64, vy: f64) -> bool {
        self.core.set_body_velocity(id, vx, vy)
    }

    pub fn is_body_submerged(&self, id: u32) -> bool {
        self.core.is_body_submerged(id)
    }

    pub fn bodies_json(&self) -> String {
        self.core.bodies_json()
    }

    /// Per-body events from the last step
    pub fn events_json(&self) -> String {
        self.core.events_json()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn step(&mut self) {
        self.core.step();
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
