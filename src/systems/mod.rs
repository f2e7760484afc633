pub mod collision;
pub mod propagation;

pub use collision::apply_collision;
pub use propagation::apply_propagation;
