// life.rs - Neighbor counting and the Conway update rule

use crate::grid::Board;

/// Offsets of the 8 surrounding cells, `(dx, dy)`.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Counts live cells among the 8 neighbors of `(x, y)`, wrapping at the edges.
///
/// Uses `rem_euclid` so that `0 - 1` wraps to `size - 1` instead of going
/// negative. On boards smaller than 3×3 several offsets land on the same
/// cell (or on `(x, y)` itself); each offset is still counted once, so the
/// result never exceeds 8.
pub fn neighbor_count(board: &Board, x: usize, y: usize) -> u8 {
    let size = board.size() as isize;
    let (x, y) = (x as isize, y as isize);

    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let nx = (x + dx).rem_euclid(size) as usize;
            let ny = (y + dy).rem_euclid(size) as usize;
            board.get(nx, ny)
        })
        .count() as u8
}

/// Conway's B3/S23 rule.
#[inline]
pub fn next_state(alive: bool, count: u8) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// Computes the next generation into a freshly allocated board.
pub fn step(board: &Board) -> Board {
    let mut next = board.clone();
    step_into(board, &mut next);
    next
}

/// Writes the generation after `current` into `next`.
///
/// Every count is taken from `current`, which is never written, so the
/// update is synchronous over the whole board. Panics if the sizes differ.
pub fn step_into(current: &Board, next: &mut Board) {
    assert_eq!(current.size(), next.size(), "step_into needs equally sized boards");

    let size = current.size();
    for y in 0..size {
        for x in 0..size {
            let count = neighbor_count(current, x, y);
            next.set(x, y, next_state(current.get(x, y), count));
        }
    }
}
