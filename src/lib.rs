//! HPP Engine - lattice-gas automaton in WASM
//!
//! Each cell is a 4-bit mask of particles moving up/left/right/down. A step
//! is a per-cell collision lookup followed by streaming to the four
//! neighbors; both passes run row-parallel under Rayon.
//!
//! Layout:
//! - core/       - Errors and console logging
//! - domain/     - Cell encoding, occupancy and collision tables
//! - spatial/    - Double-buffered grid, wall ring, obstacle rects
//! - systems/    - Collision and propagation passes
//! - simulation/ - Engine core, host driver, wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("HPP lattice engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::EngineError;
pub use domain::lattice::{CellState, DOWN, FULL, LEFT, RIGHT, UP};
pub use domain::{collide, decode};
pub use simulation::{Driver, Lattice, LatticeCore, PerfStats, SimulationConfig};
pub use spatial::{BoundaryPolicy, Rect};

// Export direction masks for JS
#[wasm_bindgen]
pub fn dir_up() -> u8 { UP }
#[wasm_bindgen]
pub fn dir_left() -> u8 { LEFT }
#[wasm_bindgen]
pub fn dir_right() -> u8 { RIGHT }
#[wasm_bindgen]
pub fn dir_down() -> u8 { DOWN }
