//! LatticeCore - HPP lattice-gas simulation engine
//!
//! One step = collision pass, then propagation pass:
//! - Collision rewrites every interior cell through the lookup table in place
//! - Propagation streams bits to neighbors through the scratch buffer and
//!   swaps generations once all rows are computed
//!
//! The core owns no clock and does no rendering. Hosts call `step()` (or go
//! through `Driver` for play/pause) and read `get`/`occupancy` back.

use crate::core::EngineError;
use crate::domain::lattice::CellState;
use crate::spatial::{BoundaryPolicy, LatticeGrid, Rect};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "driver/driver.rs"]
mod driver;
mod facade;

pub use config::SimulationConfig;
pub use driver::Driver;
pub use facade::Lattice;
pub use perf_stats::PerfStats;

use perf_timer::StepClock;

/// The simulation engine
pub struct LatticeCore {
    grid: LatticeGrid,
    boundary: BoundaryPolicy,

    // State
    generation: u64,

    // Render adapter buffer (occupancy per cell, row-major)
    occupancy_buffer: Vec<u8>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl LatticeCore {
    /// Random fill of `[0, 12]` inside, empty wall ring, then the optional
    /// obstacle block forced to 15.
    pub fn initialize(size: u32, obstacle: Option<Rect>, seed: u64) -> Result<Self, EngineError> {
        init::initialize(size, obstacle, seed)
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self, EngineError> {
        init::initialize(config.size, config.obstacle, config.seed)
    }

    /// Exact starting state, row-major. Nothing is zeroed or randomised.
    pub fn from_cells(size: u32, cells: &[u8]) -> Result<Self, EngineError> {
        init::from_cells(size, cells)
    }

    pub fn size(&self) -> u32 { self.grid.size() }

    /// Number of completed steps
    pub fn generation(&self) -> u64 { self.generation }

    pub fn particle_count(&self) -> u64 { self.grid.particle_count() }

    /// Current generation, row-major
    pub fn cells(&self) -> &[CellState] { &self.grid.cells }

    /// Raw 4-bit state of cell (i, j)
    pub fn get(&self, i: u32, j: u32) -> Result<CellState, EngineError> {
        self.grid.get(i, j)
    }

    /// Particle count of cell (i, j)
    pub fn occupancy(&self, i: u32, j: u32) -> Result<u8, EngineError> {
        self.grid.occupancy(i, j)
    }

    pub fn set(&mut self, i: u32, j: u32, value: u32) -> Result<(), EngineError> {
        self.grid.set(i, j, value)
    }

    pub fn is_boundary(&self, i: u32, j: u32) -> Result<bool, EngineError> {
        self.grid.checked_index(i, j)?;
        Ok(self.boundary.is_boundary(i, j))
    }

    pub fn boundary(&self) -> BoundaryPolicy { self.boundary }

    /// Advance exactly one generation.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Collision pass only (no generation bump)
    pub fn collide_step(&mut self) {
        step::collide(self);
    }

    /// Propagation pass only (no generation bump)
    pub fn propagate_step(&mut self) {
        step::propagate(self);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn perf_enabled(&self) -> bool {
        settings::perf_enabled(self)
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Refresh the occupancy buffer from the current generation.
    pub fn extract_occupancy(&mut self) -> &[u8] {
        render_extract::extract_occupancy(self)
    }

    /// Pointer to the occupancy buffer (valid until the next extract)
    pub fn occupancy_ptr(&self) -> *const u8 {
        render_extract::occupancy_ptr(self)
    }

    pub fn occupancy_len(&self) -> usize {
        self.occupancy_buffer.len()
    }

    /// Pointer to the current generation. Steps swap buffers, so re-read
    /// it after every step.
    pub fn cells_ptr(&self) -> *const CellState {
        self.grid.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
