use wasm_bindgen::prelude::*;

/// Timing and size snapshot of the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) propagation_ms: f64,
    pub(super) particle_count: u64,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
    pub(super) generation: u64,
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
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn propagation_ms(&self) -> f64 { self.propagation_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u64 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
}
