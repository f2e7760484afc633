//! Wall ring policy
//!
//! The outermost ring (row 0, row N-1, column 0, column N-1) is wall.
//! Collision skips it. Propagation still rewrites it, but any contribution
//! whose source neighbor would lie outside the grid is zero: nothing enters
//! from beyond the edge.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryPolicy {
    size: u32,
}

impl BoundaryPolicy {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    #[inline]
    fn last(&self) -> u32 {
        self.size.saturating_sub(1)
    }

    #[inline]
    pub fn is_boundary_row(&self, i: u32) -> bool {
        i == 0 || i == self.last()
    }

    #[inline]
    pub fn is_boundary(&self, i: u32, j: u32) -> bool {
        self.is_boundary_row(i) || j == 0 || j == self.last()
    }

    /// Interior span along one axis, half-open
    #[inline]
    pub fn interior(&self) -> std::ops::Range<u32> {
        1..self.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_of_four_by_four() {
        let policy = BoundaryPolicy::new(4);
        let ring: Vec<(u32, u32)> = (0..4)
            .flat_map(|i| (0..4).map(move |j| (i, j)))
            .filter(|&(i, j)| policy.is_boundary(i, j))
            .collect();
        assert_eq!(ring.len(), 12);
        assert!(!policy.is_boundary(1, 1));
        assert!(!policy.is_boundary(2, 2));
        assert!(policy.is_boundary(3, 2));
        assert_eq!(policy.interior(), 1..3);
    }

    #[test]
    fn far_coordinates_do_not_overflow() {
        let policy = BoundaryPolicy::new(4);
        assert!(!policy.is_boundary_row(u32::MAX));
        assert!(policy.is_boundary(2, 0));
        assert!(!policy.is_boundary(2, u32::MAX));
    }

    #[test]
    fn three_by_three_has_single_interior_cell() {
        let policy = BoundaryPolicy::new(3);
        assert!((0..3).all(|j| policy.is_boundary(0, j) && policy.is_boundary(2, j)));
        assert_eq!(policy.interior(), 1..2);
        assert!(!policy.is_boundary(1, 1));
    }
}
