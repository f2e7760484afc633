/// State used when a seed folds to zero (zero is a fixed point of xorshift)
pub(crate) const DEFAULT_RNG_STATE: u32 = 12345;

/// Random number generator (xorshift32)
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Fold a 64-bit seed into a non-zero xorshift state.
pub(crate) fn seed_state(seed: u64) -> u32 {
    let folded = (seed ^ (seed >> 32)) as u32;
    if folded == 0 {
        DEFAULT_RNG_STATE
    } else {
        folded
    }
}

/// Uniform-ish draw from `0..=max`
#[inline]
pub(crate) fn next_in(state: &mut u32, max: u32) -> u32 {
    xorshift32(state) % (max + 1)
}
