//! Propagation (streaming) pass
//!
//! Every cell imports one bit from each von Neumann neighbor of the current
//! generation:
//!
//! ```text
//!   down  <- (i+1, j) & UP    << 3
//!   up    <- (i-1, j) & DOWN  >> 3
//!   right <- (i, j-1) & LEFT  << 1
//!   left  <- (i, j+1) & RIGHT >> 1
//! ```
//!
//! A missing neighbor (grid edge) contributes zero. All four contributions
//! are computed fresh per cell. The result goes to `scratch`, then the
//! buffers swap once every row is done.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::lattice::{CellState, DOWN, LEFT, RIGHT, UP};
use crate::spatial::LatticeGrid;

pub fn apply_propagation(grid: &mut LatticeGrid) {
    let n = grid.size() as usize;
    {
        let LatticeGrid { cells, scratch, .. } = grid;
        let cells: &[CellState] = cells;

        #[cfg(feature = "parallel")]
        {
            scratch
                .par_chunks_mut(n)
                .enumerate()
                .for_each(|(i, out)| propagate_row(cells, n, i, out));
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (i, out) in scratch.chunks_mut(n).enumerate() {
                propagate_row(cells, n, i, out);
            }
        }
    }
    grid.commit_scratch();
}

/// Compute row `i` of the next generation into `out`.
#[inline]
fn propagate_row(cells: &[CellState], n: usize, i: usize, out: &mut [CellState]) {
    let row = &cells[i * n..(i + 1) * n];
    let above = if i > 0 { Some(&cells[(i - 1) * n..i * n]) } else { None };
    let below = if i + 1 < n { Some(&cells[(i + 1) * n..(i + 2) * n]) } else { None };

    for (j, dst) in out.iter_mut().enumerate() {
        let from_below = below.map_or(0, |r| (r[j] & UP) << 3);
        let from_above = above.map_or(0, |r| (r[j] & DOWN) >> 3);
        let from_left = if j > 0 { (row[j - 1] & LEFT) << 1 } else { 0 };
        let from_right = if j + 1 < n { (row[j + 1] & RIGHT) >> 1 } else { 0 };
        *dst = from_below | from_above | from_left | from_right;
    }
}
