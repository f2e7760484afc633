use crate::core::EngineError;
use crate::domain::lattice::{EMPTY, FULL, MAX_RANDOM_STATE};
use crate::spatial::grid::alloc_cells;
use crate::spatial::{BoundaryPolicy, LatticeGrid, Rect};

use super::perf_stats::PerfStats;
use super::random::{next_in, seed_state};
use super::LatticeCore;

fn create_lattice_core(grid: LatticeGrid) -> Result<LatticeCore, EngineError> {
    let boundary = BoundaryPolicy::new(grid.size());
    let occupancy_buffer = alloc_cells(grid.size(), grid.len())?;
    Ok(LatticeCore {
        grid,
        boundary,
        generation: 0,
        occupancy_buffer,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

pub(super) fn initialize(size: u32, obstacle: Option<Rect>, seed: u64) -> Result<LatticeCore, EngineError> {
    let mut grid = LatticeGrid::new(size)?;
    if let Some(rect) = obstacle {
        rect.check_interior(size)?;
    }

    let boundary = BoundaryPolicy::new(size);
    let mut rng = seed_state(seed);

    // Every cell draws so the stream position only depends on the index.
    for idx in 0..grid.len() {
        let value = next_in(&mut rng, MAX_RANDOM_STATE as u32) as u8;
        let (i, j) = grid.coords(idx);
        let state = if boundary.is_boundary(i, j) { EMPTY } else { value };
        grid.set_idx(idx, state);
    }

    if let Some(rect) = obstacle {
        for i in rect.row_start..rect.row_end {
            for j in rect.col_start..rect.col_end {
                let idx = grid.index(i, j);
                grid.set_idx(idx, FULL);
            }
        }
    }

    create_lattice_core(grid)
}

pub(super) fn from_cells(size: u32, cells: &[u8]) -> Result<LatticeCore, EngineError> {
    let grid = LatticeGrid::from_cells(size, cells)?;
    create_lattice_core(grid)
}
