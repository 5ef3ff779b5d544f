//! Uniform-random move selection
//!
//! The degenerate policy observed in some front ends: pick any empty cell
//! with equal probability instead of searching. Kept separate from the
//! minimax searcher so a build chooses one policy explicitly.

use rand::Rng;

use crate::board::{Board, Pos};

/// Pick an empty cell uniformly at random.
///
/// Returns `None` iff the board is full.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Pos> {
    let cells = board.empty_cells();
    if cells.is_empty() {
        None
    } else {
        Some(cells[rng.random_range(0..cells.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_move_addresses_empty_cell() {
        let mut board = Board::new(3).unwrap();
        board.apply_move(Pos::new(0, 0), Mark::X).unwrap();
        board.apply_move(Pos::new(1, 1), Mark::O).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pos = random_move(&board, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_random_move_on_full_board_is_none() {
        let mut board = Board::new(3).unwrap();
        let mut mark = Mark::X;
        for idx in 0..9 {
            board.apply_move(Pos::from_index(idx, 3), mark).unwrap();
            mark = mark.opponent();
        }
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_move(&board, &mut rng), None);
    }
}
