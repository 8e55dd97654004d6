use crate::board::side::Side;
use crate::board::Board;

/// Score of a position Red has won. Blue wins score the negation.
pub const WINNING_VALUE: i32 = i32::MAX;

/// Scores `board` from Red's point of view using `WINNING_VALUE` for decided games.
pub fn score(board: &Board) -> i32 {
    static_eval(board, WINNING_VALUE)
}

/// Material count: Red's cells minus Blue's cells, or `winning_value` (negated
/// for Blue) once one side owns the whole board.
pub fn static_eval(board: &Board, winning_value: i32) -> i32 {
    let total = board.size() * board.size();
    let red = board.num_cells_of(Side::Red);
    let blue = board.num_cells_of(Side::Blue);

    if red == total {
        winning_value
    } else if blue == total {
        -winning_value
    } else {
        red as i32 - blue as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_board_is_even() {
        assert_eq!(0, score(&Board::new(4)));
    }

    #[test]
    fn test_material_difference() {
        let mut board = Board::new(3);
        board.set(1, 1, 1, Side::Red);
        board.set(1, 2, 3, Side::Red);
        board.set(3, 3, 2, Side::Blue);
        assert_eq!(1, score(&board));
    }

    #[test]
    fn test_decided_games() {
        let mut board = Board::new(2);
        for row in 1..=2 {
            for col in 1..=2 {
                board.set(row, col, 1, Side::Red);
            }
        }
        assert_eq!(WINNING_VALUE, score(&board));
        assert_eq!(100, static_eval(&board, 100));

        for row in 1..=2 {
            for col in 1..=2 {
                board.set(row, col, 2, Side::Blue);
            }
        }
        assert_eq!(-WINNING_VALUE, score(&board));
    }
}
