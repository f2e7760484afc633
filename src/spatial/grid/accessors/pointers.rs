use super::super::*;

impl LatticeGrid {
    // === Raw pointers for JS interop ===
    pub fn cells_ptr(&self) -> *const CellState {
        self.cells.as_ptr()
    }
}
