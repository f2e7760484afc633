use super::*;

impl LatticeGrid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    #[inline]
    pub fn len(&self) -> usize { self.len }

    #[inline]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    // === Index conversion (i = row, j = column) ===
    #[inline]
    pub fn index(&self, i: u32, j: u32) -> usize {
        (i as usize) * (self.size as usize) + j as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let n = self.size as usize;
        ((idx / n) as u32, (idx % n) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, i: u32, j: u32) -> bool {
        i < self.size && j < self.size
    }

    /// Flat index, or `IndexOutOfRange` if `(i, j)` is off the grid.
    #[inline]
    pub fn checked_index(&self, i: u32, j: u32) -> Result<usize, EngineError> {
        if self.in_bounds(i, j) {
            Ok(self.index(i, j))
        } else {
            Err(EngineError::IndexOutOfRange { i, j, size: self.size })
        }
    }
}
