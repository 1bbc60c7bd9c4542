// simulation.rs - Double-buffered generations

use rand::Rng;

use crate::grid::{self, Board};
use crate::life;

/// Two equally sized boards: the finalized `current` generation and a
/// scratch `next` buffer the following generation is computed into.
///
/// Readers only ever see `current`, so a half-computed generation is never
/// observable. [`Simulation::publish`] swaps the buffers once `next` is done.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Board,
    next: Board,
    generation: u64,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        let next = board.clone();
        Self {
            current: board,
            next,
            generation: 0,
        }
    }

    /// A randomized `size`×`size` simulation, or `None` if `size` is zero.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Option<Self> {
        let mut board = Board::new(size)?;
        grid::randomize(&mut board, rng);
        Some(Self::new(board))
    }

    /// The latest finalized generation.
    pub fn current(&self) -> &Board {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Splits into the finalized board (for rendering) and the scratch
    /// board (for computing). Both borrows can be used at the same time.
    pub fn buffers(&mut self) -> (&Board, &mut Board) {
        (&self.current, &mut self.next)
    }

    /// Makes the scratch buffer the current generation.
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Computes and publishes one generation.
    pub fn advance(&mut self) {
        let (current, next) = self.buffers();
        life::step_into(current, next);
        self.publish();
    }
}
