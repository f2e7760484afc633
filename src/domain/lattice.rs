//! Cell encoding for the HPP lattice
//!
//! Each cell is a 4-bit nibble, one bit per travel direction:
//!
//! ```text
//!   bit:   3     2      1     0
//!        down  right  left   up
//! ```
//!
//! A set bit is one particle moving that way, so a cell holds 0..=4 particles.

use crate::core::EngineError;

pub type CellState = u8;

pub const UP: CellState = 0x1;
pub const LEFT: CellState = 0x2;
pub const RIGHT: CellState = 0x4;
pub const DOWN: CellState = 0x8;

pub const EMPTY: CellState = 0;
/// All four directions occupied (used for obstacle blocks)
pub const FULL: CellState = UP | LEFT | RIGHT | DOWN;

/// Number of distinct cell states
pub const STATE_COUNT: usize = 16;

/// Largest value `init` draws for a random interior cell
pub const MAX_RANDOM_STATE: CellState = 12;

/// Popcount of every 4-bit state
pub const OCCUPANCY: [u8; STATE_COUNT] = [0, 1, 1, 2, 1, 2, 2, 3, 1, 2, 2, 3, 2, 3, 3, 4];

#[inline]
pub fn is_valid_state(value: u32) -> bool {
    (value as usize) < STATE_COUNT
}

/// Validate a raw value coming from outside the engine.
#[inline]
pub fn check_state(value: u32) -> Result<CellState, EngineError> {
    if is_valid_state(value) {
        Ok(value as CellState)
    } else {
        Err(EngineError::InvalidState { value })
    }
}

/// Particle count of a state, rejecting anything wider than a nibble.
#[inline]
pub fn decode(value: u32) -> Result<u8, EngineError> {
    check_state(value).map(occupancy)
}

/// Particle count for a state already known to be in range.
/// Hot path: the mask keeps the lookup branch-free.
#[inline(always)]
pub fn occupancy(state: CellState) -> u8 {
    OCCUPANCY[(state & FULL) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_is_popcount() {
        for v in 0..STATE_COUNT as u8 {
            assert_eq!(occupancy(v) as u32, v.count_ones(), "state {v}");
        }
    }

    #[test]
    fn decode_rejects_wide_values() {
        assert_eq!(decode(15), Ok(4));
        assert_eq!(decode(0), Ok(0));
        assert_eq!(decode(16), Err(EngineError::InvalidState { value: 16 }));
        assert_eq!(decode(255), Err(EngineError::InvalidState { value: 255 }));
    }

    #[test]
    fn direction_bits_are_disjoint() {
        assert_eq!(UP | LEFT | RIGHT | DOWN, FULL);
        assert_eq!(UP & LEFT & RIGHT & DOWN, 0);
        assert_eq!(FULL, 15);
    }
}
