use crate::board::Board;
use crate::Cell;

use rand::Rng;

/// Picks a uniformly random cell of `board` that `occupied` does not contain.
///
/// Rejection sampling: this never returns if every cell is occupied, which the
/// board size makes unreachable in practice.
pub fn place_food<R: Rng + ?Sized>(board: &Board, occupied: &[Cell], rng: &mut R) -> Cell {
    loop {
        let candidate = (rng.gen_range(0..board.width()), rng.gen_range(0..board.height()));
        if !occupied.contains(&candidate) {
            return candidate;
        }
    }
}
