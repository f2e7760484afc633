use serde::{Deserialize, Serialize};

use crate::core::EngineError;

use super::boundary::BoundaryPolicy;

/// Axis-aligned block of cells, half-open on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub row_start: u32,
    pub row_end: u32,
    pub col_start: u32,
    pub col_end: u32,
}

impl Rect {
    pub fn new(row_start: u32, row_end: u32, col_start: u32, col_end: u32) -> Self {
        Self { row_start, row_end, col_start, col_end }
    }

    /// Same span on both axes
    pub fn square(start: u32, end: u32) -> Self {
        Self::new(start, end, start, end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.row_start >= self.row_end || self.col_start >= self.col_end
    }

    #[inline]
    pub fn contains(&self, i: u32, j: u32) -> bool {
        (self.row_start..self.row_end).contains(&i) && (self.col_start..self.col_end).contains(&j)
    }

    /// Strictly inside the wall ring of a `size` grid. An empty rect covers
    /// no cells and always passes.
    pub fn check_interior(&self, size: u32) -> Result<(), EngineError> {
        if self.is_degenerate() {
            return Ok(());
        }
        let interior = BoundaryPolicy::new(size).interior();
        let inside = self.row_start >= interior.start
            && self.row_end <= interior.end
            && self.col_start >= interior.start
            && self.col_end <= interior.end;
        if inside {
            Ok(())
        } else {
            Err(EngineError::InvalidRegion {
                row_start: self.row_start,
                row_end: self.row_end,
                col_start: self.col_start,
                col_end: self.col_end,
                size,
            })
        }
    }
}
