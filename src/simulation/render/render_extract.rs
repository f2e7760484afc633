use crate::domain::lattice::occupancy;

use super::LatticeCore;

/// Decode every cell into the reusable occupancy buffer (row-major, 0..=4).
/// Renderers map these counts to colours on their side.
pub(super) fn extract_occupancy(core: &mut LatticeCore) -> &[u8] {
    let LatticeCore { grid, occupancy_buffer, .. } = core;
    if occupancy_buffer.len() != grid.len() {
        occupancy_buffer.resize(grid.len(), 0);
    }
    for (dst, &cell) in occupancy_buffer.iter_mut().zip(grid.cells.iter()) {
        *dst = occupancy(cell);
    }
    &occupancy_buffer[..]
}

pub(super) fn occupancy_ptr(core: &LatticeCore) -> *const u8 {
    core.occupancy_buffer.as_ptr()
}
