pub mod boundary;
pub mod grid;
pub mod rect;

pub use boundary::BoundaryPolicy;
pub use grid::LatticeGrid;
pub use rect::Rect;
