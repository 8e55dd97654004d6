use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::cell::Cell;
use crate::board::error::BoardError;
use crate::board::side::Side;
use crate::board::Board;

static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)([-rb])$").expect("CELL_RE regex should be valid"));

const MARKER_LINE: &str = "===";

#[derive(Error, Debug, PartialEq)]
pub enum DumpParseError {
    #[error("Missing `===` line at the {position} of the board")]
    MissingMarkerLine { position: &'static str },
    #[error("Board has no rows")]
    Empty,
    #[error("Invalid cell: {invalid_cell:?}")]
    InvalidCell { invalid_cell: String },
    #[error("Row {row} has {actual} cells, {expected} expected")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Error building board: {board_error:?}")]
    ErrorBuildingBoard { board_error: BoardError },
}

type DumpResult<T> = Result<T, DumpParseError>;

/// Parses the dumped representation produced by `Board`'s `Display` impl. Text
/// outside the `===` lines is ignored, as is surrounding whitespace.
pub fn parse_dump(dump: &str) -> DumpResult<Board> {
    let rows = board_rows(dump)?;
    let size = rows.len();
    if size == 0 {
        return Err(DumpParseError::Empty);
    }

    let mut cells = Vec::with_capacity(size * size);
    for (i, row) in rows.iter().enumerate() {
        let tokens: Vec<&str> = row.split_whitespace().collect();
        if tokens.len() != size {
            return Err(DumpParseError::InvalidRowLength {
                row: i + 1,
                expected: size,
                actual: tokens.len(),
            });
        }
        for token in tokens {
            cells.push(parse_cell(token)?);
        }
    }

    Board::from_cells(size, cells)
        .map_err(|board_error| DumpParseError::ErrorBuildingBoard { board_error })
}

/// The lines between the first two `===` lines.
fn board_rows(dump: &str) -> DumpResult<Vec<&str>> {
    let mut lines = dump.lines().map(str::trim);
    if !lines.any(|line| line == MARKER_LINE) {
        return Err(DumpParseError::MissingMarkerLine { position: "start" });
    }

    let mut rows = Vec::new();
    for line in lines {
        if line == MARKER_LINE {
            return Ok(rows);
        }
        if !line.is_empty() {
            rows.push(line);
        }
    }
    Err(DumpParseError::MissingMarkerLine { position: "end" })
}

fn parse_cell(token: &str) -> DumpResult<Cell> {
    let invalid = || DumpParseError::InvalidCell {
        invalid_cell: token.to_string(),
    };
    let caps = CELL_RE.captures(token).ok_or_else(invalid)?;
    let spots: u32 = caps[1].parse().map_err(|_| invalid())?;
    if spots == 0 {
        return Err(invalid());
    }
    let side = caps[2]
        .chars()
        .next()
        .and_then(Side::from_marker)
        .ok_or_else(invalid)?;
    Ok(Cell::new(side, spots))
}

impl FromStr for Board {
    type Err = DumpParseError;

    fn from_str(dump: &str) -> Result<Self, Self::Err> {
        parse_dump(dump)
    }
}
