use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::spatial::Rect;

use super::perf_stats::PerfStats;
use super::{Driver, LatticeCore, SimulationConfig};

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JS handle: engine plus play/pause state.
#[wasm_bindgen]
pub struct Lattice {
    driver: Driver,
}

#[wasm_bindgen]
impl Lattice {
    /// Random lattice without an obstacle
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32, seed: u64) -> Result<Lattice, JsValue> {
        let core = LatticeCore::initialize(size, None, seed).map_err(to_js)?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(js_name = withObstacle)]
    pub fn with_obstacle(
        size: u32,
        row_start: u32,
        row_end: u32,
        col_start: u32,
        col_end: u32,
        seed: u64,
    ) -> Result<Lattice, JsValue> {
        let rect = Rect::new(row_start, row_end, col_start, col_end);
        let core = LatticeCore::initialize(size, Some(rect), seed).map_err(to_js)?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String) -> Result<Lattice, JsValue> {
        let config = SimulationConfig::from_json(&json).map_err(|e| {
            console_warn!("lattice config rejected: {}", e);
            to_js(e)
        })?;
        let core = LatticeCore::from_config(&config).map_err(to_js)?;
        console_log!(
            "lattice {}x{} ready (seed {}, obstacle {:?})",
            config.size,
            config.size,
            config.seed,
            config.obstacle
        );
        Ok(Self::wrap(core))
    }

    /// 384x384 with the 50..150 block
    pub fn reference() -> Result<Lattice, JsValue> {
        let core = LatticeCore::from_config(&SimulationConfig::default()).map_err(to_js)?;
        Ok(Self::wrap(core))
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.driver.core().size() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.driver.core().generation() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 {
        self.driver.core().particle_count().min(u32::MAX as u64) as u32
    }

    #[wasm_bindgen(getter)]
    pub fn playing(&self) -> bool { self.driver.is_playing() }

    /// Step the simulation forward one generation (ignores play/pause)
    pub fn step(&mut self) {
        self.driver.core_mut().step();
    }

    /// Timer callback: steps only while playing
    pub fn tick(&mut self) -> bool {
        self.driver.tick()
    }

    pub fn toggle_playing(&mut self) -> bool {
        self.driver.toggle()
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.driver.set_playing(playing);
    }

    pub fn get(&self, i: u32, j: u32) -> Result<u8, JsValue> {
        self.driver.core().get(i, j).map_err(to_js)
    }

    pub fn occupancy(&self, i: u32, j: u32) -> Result<u8, JsValue> {
        self.driver.core().occupancy(i, j).map_err(to_js)
    }

    pub fn set(&mut self, i: u32, j: u32, value: u32) -> Result<(), JsValue> {
        self.driver.core_mut().set(i, j, value).map_err(to_js)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.driver.core_mut().enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.driver.core().get_perf_stats()
    }

    /// Decode occupancy for every cell; returns pointer to the u8 buffer
    pub fn extract_occupancy(&mut self) -> *const u8 {
        self.driver.core_mut().extract_occupancy();
        self.driver.core().occupancy_ptr()
    }

    pub fn occupancy_len(&self) -> usize {
        self.driver.core().occupancy_len()
    }

    /// Raw states of the current generation. Re-read after every step.
    pub fn cells_ptr(&self) -> *const u8 {
        self.driver.core().cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.driver.core().cells_len()
    }
}

impl Lattice {
    fn wrap(core: LatticeCore) -> Self {
        Self { driver: Driver::new(core) }
    }

    pub fn core(&self) -> &LatticeCore {
        self.driver.core()
    }
}
