use crate::board::side::Side;
use crate::board::Board;

/// Square numbers `side` may add a spot to, in row-major order. Whose turn it
/// is does not matter here, only cell ownership.
pub fn generate_moves(board: &Board, side: Side) -> Vec<usize> {
    (0..board.size() * board.size())
        .filter(|&n| board.is_playable_square(side, n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board_everything_playable() {
        let board = Board::new(3);
        assert_eq!((0..9).collect::<Vec<_>>(), generate_moves(&board, Side::Red));
        assert_eq!((0..9).collect::<Vec<_>>(), generate_moves(&board, Side::Blue));
    }

    #[test]
    fn test_opponent_squares_excluded() {
        let mut board = Board::new(2);
        board.add_spot(Side::Red, 1, 1);
        board.add_spot(Side::Blue, 2, 2);
        assert_eq!(vec![0, 1, 2], generate_moves(&board, Side::Red));
        assert_eq!(vec![1, 2, 3], generate_moves(&board, Side::Blue));
        assert!(generate_moves(&board, Side::Neutral).is_empty());
    }
}
