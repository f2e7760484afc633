use thiserror::Error;

/// Every failure the engine can report. All of them are local and
/// synchronous: the call that violates a precondition returns the error and
/// leaves the engine untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Grid too small to have an interior, or a cell slice of the wrong length.
    #[error("invalid grid dimension {size} (need at least 3)")]
    InvalidDimension { size: u32 },

    /// Obstacle rectangle empty or not inside the interior ring.
    #[error("obstacle rows {row_start}..{row_end}, cols {col_start}..{col_end} not inside interior of {size}x{size} grid")]
    InvalidRegion {
        row_start: u32,
        row_end: u32,
        col_start: u32,
        col_end: u32,
        size: u32,
    },

    #[error("cell ({i}, {j}) out of range for {size}x{size} grid")]
    IndexOutOfRange { i: u32, j: u32, size: u32 },

    /// Raw cell value outside the 4-bit range.
    #[error("cell state {value} is not a 4-bit value")]
    InvalidState { value: u32 },

    #[error("invalid simulation config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Config(err.to_string())
    }
}
