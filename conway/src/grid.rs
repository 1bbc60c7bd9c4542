// grid.rs - Square toroidal board for Conway's Game of Life

use rand::Rng;

/// Probability of a cell starting alive when the board is randomized.
pub const LIVE_PROBABILITY: f64 = 0.5;

/// An N×N board of cells, stored row-major (`y * size + x`).
///
/// The board is always square and every cell holds a value. Neighbor access
/// wraps in both axes; see [`crate::life::neighbor_count`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an all-dead `size`×`size` board, or `None` if `size` is zero.
    pub fn new(size: usize) -> Option<Self> {
        if size == 0 {
            return None;
        }
        Some(Self {
            size,
            cells: vec![false; size * size],
        })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// State of the cell at `(x, y)`. Both coordinates must be `< size`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size, "({x}, {y}) outside {0}x{0} board", self.size);
        y * self.size + x
    }
}

/// Sets every cell independently alive with probability [`LIVE_PROBABILITY`].
pub fn randomize<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    for cell in board.cells.iter_mut() {
        *cell = rng.gen_bool(LIVE_PROBABILITY);
    }
}
