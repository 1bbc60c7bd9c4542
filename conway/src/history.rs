// history.rs - Detects boards that repeat a recent generation

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Board;

/// How many past generations are remembered.
pub const HISTORY_LEN: usize = 10;

/// Ring buffer of recent board hashes.
#[derive(Clone, Debug, Default)]
pub struct History {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `board` and returns true if it matches one of the last
    /// [`HISTORY_LEN`] recorded boards (a still life or a short oscillator).
    pub fn observe(&mut self, board: &Board) -> bool {
        let hash = hash_board(board);
        let filled = self.count.min(HISTORY_LEN);
        let seen = self.hashes[..filled].contains(&hash);

        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        seen
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn hash_board(board: &Board) -> u64 {
    let mut hasher = DefaultHasher::new();
    board.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::life;
    use crate::patterns::{BLINKER, BLOCK, GLIDER};

    #[test]
    fn still_life_repeats_immediately() {
        let mut board = Board::new(6).unwrap();
        BLOCK.place(&mut board, 2, 2);
        let mut history = History::new();
        assert!(!history.observe(&board));
        assert!(history.observe(&life::step(&board)));
    }

    #[test]
    fn blinker_repeats_after_two() {
        let mut board = Board::new(6).unwrap();
        BLINKER.place(&mut board, 1, 2);
        let mut history = History::new();
        assert!(!history.observe(&board));
        let board = life::step(&board);
        assert!(!history.observe(&board));
        assert!(history.observe(&life::step(&board)));
    }

    #[test]
    fn empty_board_is_not_confused_with_unfilled_slots() {
        let board = Board::new(4).unwrap();
        let mut history = History::new();
        assert!(!history.observe(&board));
    }

    #[test]
    fn glider_on_large_board_is_not_a_cycle_within_the_window() {
        let mut board = Board::new(20).unwrap();
        GLIDER.place(&mut board, 0, 0);
        let mut history = History::new();
        for _ in 0..HISTORY_LEN * 2 {
            assert!(!history.observe(&board));
            board = life::step(&board);
        }
    }

    #[test]
    fn reset_forgets() {
        let board = Board::new(3).unwrap();
        let mut history = History::new();
        history.observe(&board);
        history.reset();
        assert!(!history.observe(&board));
    }
}
