use wasm_bindgen::prelude::*;

/// Counters and timings for the last `step`. All zero while perf metrics are off.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) bodies: u32,
    pub(super) resolve_calls: u32,
    pub(super) cells_probed: u32,
    pub(super) invalid_bodies: u32,
    pub(super) collisions: u32,
    pub(super) step_ups: u32,
    pub(super) respawns: u32,
    pub(super) grid_cells: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn resolve_calls(&self) -> u32 { self.resolve_calls }
    #[wasm_bindgen(getter)]
    pub fn cells_probed(&self) -> u32 { self.cells_probed }
    #[wasm_bindgen(getter)]
    pub fn invalid_bodies(&self) -> u32 { self.invalid_bodies }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn step_ups(&self) -> u32 { self.step_ups }
    #[wasm_bindgen(getter)]
    pub fn respawns(&self) -> u32 { self.respawns }
    #[wasm_bindgen(getter)]
    pub fn grid_cells(&self) -> u32 { self.grid_cells }
}
