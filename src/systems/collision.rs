//! Collision pass - applies the lookup rule to every interior cell in place.
//!
//! No cell depends on any other, so rows are split across Rayon workers when
//! the `parallel` feature is on. Wall rows and the first/last column are left
//! untouched.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::collision_table::collide_state;
use crate::domain::lattice::CellState;
use crate::spatial::{BoundaryPolicy, LatticeGrid};

pub fn apply_collision(grid: &mut LatticeGrid) {
    let n = grid.size() as usize;
    let policy = BoundaryPolicy::new(grid.size());

    #[cfg(feature = "parallel")]
    {
        grid.cells
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row)| collide_row(row, i as u32, policy));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, row) in grid.cells.chunks_mut(n).enumerate() {
            collide_row(row, i as u32, policy);
        }
    }
}

#[inline]
fn collide_row(row: &mut [CellState], i: u32, policy: BoundaryPolicy) {
    if policy.is_boundary_row(i) {
        return;
    }
    let cols = policy.interior();
    for cell in &mut row[cols.start as usize..cols.end as usize] {
        *cell = collide_state(*cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp_grid(size: u32) -> LatticeGrid {
        let values: Vec<u8> = (0..size * size).map(|k| (k % 16) as u8).collect();
        LatticeGrid::from_cells(size, &values).unwrap()
    }

    #[test]
    fn wall_ring_is_untouched() {
        let mut grid = ramp_grid(7);
        let before = grid.cells.clone();
        apply_collision(&mut grid);

        let policy = BoundaryPolicy::new(7);
        for idx in 0..grid.len() {
            let (i, j) = grid.coords(idx);
            if policy.is_boundary(i, j) {
                assert_eq!(grid.cells[idx], before[idx], "wall cell ({i}, {j})");
            } else {
                assert_eq!(grid.cells[idx], collide_state(before[idx]), "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn second_pass_restores_interior() {
        let mut grid = ramp_grid(9);
        let before = grid.cells.clone();
        apply_collision(&mut grid);
        apply_collision(&mut grid);
        assert_eq!(grid.cells, before);
    }
}
