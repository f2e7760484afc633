//! HPP collision rule as a fixed 16-entry lookup.
//!
//! The table pairs with the propagation remap (which turns an outgoing bit
//! into the opposite incoming bit on the neighbor), so single movers are
//! flipped here and restored by streaming. It is an involution and keeps the
//! particle count of every state.

use crate::core::EngineError;

use super::lattice::{check_state, CellState, FULL, STATE_COUNT};

/// `COLLISION[input] = output`
pub const COLLISION: [CellState; STATE_COUNT] = [
    0,  // 0000 -> 0000
    8,  // 0001 -> 1000
    4,  // 0010 -> 0100
    12, // 0011 -> 1100
    2,  // 0100 -> 0010
    10, // 0101 -> 1010
    9,  // 0110 -> 1001
    14, // 0111 -> 1110
    1,  // 1000 -> 0001
    6,  // 1001 -> 0110
    5,  // 1010 -> 0101
    13, // 1011 -> 1101
    3,  // 1100 -> 0011
    11, // 1101 -> 1011
    7,  // 1110 -> 0111
    15, // 1111 -> 1111
];

/// Checked collision for values coming from outside the engine.
pub fn collide(value: u32) -> Result<CellState, EngineError> {
    check_state(value).map(collide_state)
}

#[inline(always)]
pub fn collide_state(state: CellState) -> CellState {
    COLLISION[(state & FULL) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lattice::occupancy;

    #[test]
    fn matches_reference_mapping() {
        let expected = [0, 8, 4, 12, 2, 10, 9, 14, 1, 6, 5, 13, 3, 11, 7, 15];
        for (v, want) in expected.iter().enumerate() {
            assert_eq!(collide(v as u32), Ok(*want), "state {v}");
        }
    }

    #[test]
    fn is_an_involution() {
        for v in 0..STATE_COUNT as u8 {
            assert_eq!(collide_state(collide_state(v)), v);
        }
    }

    #[test]
    fn conserves_particle_count() {
        for v in 0..STATE_COUNT as u8 {
            assert_eq!(occupancy(collide_state(v)), occupancy(v), "state {v}");
        }
    }

    #[test]
    fn is_a_permutation() {
        let mut seen = [false; STATE_COUNT];
        for &out in COLLISION.iter() {
            assert!(!seen[out as usize]);
            seen[out as usize] = true;
        }
    }

    #[test]
    fn empty_and_full_are_fixed() {
        assert_eq!(collide_state(0), 0);
        assert_eq!(collide_state(FULL), FULL);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(collide(16), Err(EngineError::InvalidState { value: 16 }));
    }
}
