use super::super::*;

impl LatticeGrid {
    // === Checked access (public API) ===
    pub fn get(&self, i: u32, j: u32) -> Result<CellState, EngineError> {
        let idx = self.checked_index(i, j)?;
        Ok(self.cells[idx])
    }

    pub fn occupancy(&self, i: u32, j: u32) -> Result<u8, EngineError> {
        self.get(i, j).map(occupancy)
    }

    /// Write a raw value; out-of-range coordinates are checked before the value.
    pub fn set(&mut self, i: u32, j: u32, value: u32) -> Result<(), EngineError> {
        let idx = self.checked_index(i, j)?;
        self.cells[idx] = check_state(value)?;
        Ok(())
    }

    // === Index access (internal, caller guarantees bounds) ===
    #[inline]
    pub fn set_idx(&mut self, idx: usize, state: CellState) {
        self.cells[idx] = state;
    }
}
