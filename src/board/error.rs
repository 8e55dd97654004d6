use thiserror::Error;

use super::side::Side;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("There is no square at row {row}, column {col}")]
    NoSuchSquare { row: usize, col: usize },
    #[error("It is not {side}'s move")]
    NotYourTurn { side: Side },
    #[error("Cannot add a spot to row {row}, column {col}, it belongs to {owner}")]
    OpponentSquare { row: usize, col: usize, owner: Side },
    #[error("Expected {expected} cells for the board, {actual} given")]
    WrongCellCount { expected: usize, actual: usize },
}
