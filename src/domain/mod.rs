pub mod collision_table;
pub mod lattice;

pub use collision_table::{collide, collide_state, COLLISION};
pub use lattice::{decode, occupancy, CellState, OCCUPANCY};
