//! LatticeGrid - double-buffered cell storage for the HPP automaton
//!
//! One flat row-major `Vec<u8>` of 4-bit states plus a scratch buffer of the
//! same shape. Propagation writes the next generation into `scratch` and
//! then swaps, so no cell ever reads a half-updated generation.

use crate::core::EngineError;
use crate::domain::lattice::{check_state, occupancy, CellState, EMPTY};

/// Smallest grid with at least one interior cell
pub const MIN_SIZE: u32 = 3;

/// Largest side length: one buffer of `MAX_SIZE^2` cells is 1 GiB, and
/// three of them (cells, scratch, occupancy) still fit a wasm32 heap.
pub const MAX_SIZE: u32 = 1 << 15;

mod indexing;
mod accessors;

pub struct LatticeGrid {
    size: u32,
    len: usize,

    pub cells: Vec<CellState>,   // current generation
    pub scratch: Vec<CellState>, // next generation, only valid during propagation
}

impl LatticeGrid {
    /// Allocate an all-empty `size x size` grid.
    pub fn new(size: u32) -> Result<Self, EngineError> {
        let len = cell_len(size)?;
        Ok(Self {
            size,
            len,
            cells: alloc_cells(size, len)?,
            scratch: alloc_cells(size, len)?,
        })
    }

    /// Build a grid from row-major raw values.
    pub fn from_cells(size: u32, values: &[u8]) -> Result<Self, EngineError> {
        let mut grid = Self::new(size)?;
        if values.len() != grid.len {
            return Err(EngineError::InvalidDimension { size });
        }
        for (dst, &v) in grid.cells.iter_mut().zip(values) {
            *dst = check_state(v as u32)?;
        }
        Ok(grid)
    }

    /// Publish the scratch buffer as the current generation.
    #[inline]
    pub fn commit_scratch(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Total particles on the grid
    pub fn particle_count(&self) -> u64 {
        self.cells.iter().map(|&c| occupancy(c) as u64).sum()
    }

}

/// Cell count of a `size x size` grid, or `InvalidDimension` when the side
/// is outside `MIN_SIZE..=MAX_SIZE` or the product does not fit `usize`.
pub fn cell_len(size: u32) -> Result<usize, EngineError> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(EngineError::InvalidDimension { size });
    }
    (size as usize)
        .checked_mul(size as usize)
        .ok_or(EngineError::InvalidDimension { size })
}

/// Zeroed buffer of `len` cells; allocation failure is reported, not aborted on.
pub fn alloc_cells(size: u32, len: usize) -> Result<Vec<CellState>, EngineError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| EngineError::InvalidDimension { size })?;
    buf.resize(len, EMPTY);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_grids_without_interior() {
        assert_eq!(
            LatticeGrid::new(2).err(),
            Some(EngineError::InvalidDimension { size: 2 })
        );
        assert!(LatticeGrid::new(3).is_ok());
    }

    #[test]
    fn oversized_grids_are_rejected_before_allocating() {
        assert_eq!(
            LatticeGrid::new(u32::MAX).err(),
            Some(EngineError::InvalidDimension { size: u32::MAX })
        );
        assert_eq!(
            LatticeGrid::new(MAX_SIZE + 1).err(),
            Some(EngineError::InvalidDimension { size: MAX_SIZE + 1 })
        );
        // 65536^2 overflows a 32-bit usize
        assert!(LatticeGrid::new(1 << 16).is_err());
        assert_eq!(cell_len(MAX_SIZE), Ok((MAX_SIZE as usize) * (MAX_SIZE as usize)));
    }

    #[test]
    fn from_cells_validates_length_and_states() {
        assert!(matches!(
            LatticeGrid::from_cells(3, &[0; 8]),
            Err(EngineError::InvalidDimension { size: 3 })
        ));

        let mut values = [0u8; 9];
        values[4] = 16;
        assert_eq!(
            LatticeGrid::from_cells(3, &values).err(),
            Some(EngineError::InvalidState { value: 16 })
        );

        values[4] = 15;
        let grid = LatticeGrid::from_cells(3, &values).unwrap();
        assert_eq!(grid.particle_count(), 4);
    }

    #[test]
    fn commit_swaps_generations() {
        let mut grid = LatticeGrid::new(3).unwrap();
        grid.scratch[4] = 9;
        grid.commit_scratch();
        assert_eq!(grid.cells[4], 9);
        assert_eq!(grid.scratch[4], 0);
    }
}
