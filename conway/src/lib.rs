//! Conway's Game of Life on a square toroidal board.
//!
//! [`grid::Board`] holds the cells, [`life`] computes generations, and
//! [`simulation::Simulation`] double-buffers them so a renderer can read one
//! finalized generation while the next is being computed.

pub mod grid;
pub mod history;
pub mod life;
pub mod patterns;
pub mod simulation;

pub use grid::{Board, randomize};
pub use history::History;
pub use life::{neighbor_count, next_state, step, step_into};
pub use patterns::Pattern;
pub use simulation::Simulation;
