pub mod cell;
pub mod error;
pub mod side;
pub mod square;

mod chain_reaction;
mod display;
mod undo_history;


use std::fmt;
use std::hash::{Hash, Hasher};

use cell::Cell;
use error::BoardError;
use log::debug;
use side::Side;
use undo_history::UndoHistory;

/// Called with the board after every change to its contents.
pub type Notifier = Box<dyn FnMut(&Board)>;

/// The state of a Jump61 game. Squares are addressed either by row and column
/// (both between 1 and `size()`), or by square number in row-major order, with
/// row 1 numbered `0..size()`, row 2 numbered `size()..2 * size()`, and so on.
///
/// Whose move it is is never stored. Every accepted move adds exactly one spot
/// to the board, so the turn follows from the parity of the spot total.
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    history: UndoHistory<Vec<Cell>>,
    notifier: Option<Notifier>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Board {
    /// An N x N board with every cell neutral. Playable boards have N >= 1; a
    /// size 0 board has no cells and never has a winner.
    pub fn new(size: usize) -> Self {
        let cells = vec![Cell::NEUTRAL; size * size];
        Self {
            size,
            history: UndoHistory::new(cells.clone()),
            cells,
            notifier: None,
        }
    }

    /// A board with the contents of `other`, a fresh undo history and no notifier.
    pub fn from_board(other: &Board) -> Self {
        Self {
            size: other.size,
            cells: other.cells.clone(),
            history: UndoHistory::new(other.cells.clone()),
            notifier: None,
        }
    }

    /// A board with the given contents in row-major order.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if cells.len() != size * size {
            return Err(BoardError::WrongCellCount {
                expected: size * size,
                actual: cells.len(),
            });
        }
        Ok(Self {
            size,
            history: UndoHistory::new(cells.clone()),
            cells,
            notifier: None,
        })
    }

    /// Reinitializes to an empty N x N board and discards the undo history.
    pub fn clear(&mut self, size: usize) {
        self.size = size;
        self.cells = vec![Cell::NEUTRAL; size * size];
        self.history.reset(self.cells.clone());
        self.announce();
    }

    /// Replaces my contents with those of `other`. My undo history is cleared.
    pub fn copy_from(&mut self, other: &Board) {
        self.size = other.size;
        self.cells = other.cells.clone();
        self.history.reset(self.cells.clone());
        self.announce();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if !self.exists(row, col) {
            return None;
        }
        self.get_square(self.square_number(row, col))
    }

    pub fn get_square(&self, n: usize) -> Option<Cell> {
        self.cells.get(n).copied()
    }

    pub fn exists(&self, row: usize, col: usize) -> bool {
        1 <= row && row <= self.size && 1 <= col && col <= self.size
    }

    pub fn exists_square(&self, n: usize) -> bool {
        n < self.size * self.size
    }

    pub fn row(&self, n: usize) -> usize {
        n / self.size + 1
    }

    pub fn col(&self, n: usize) -> usize {
        n % self.size + 1
    }

    /// Assumes `exists(row, col)`.
    pub fn square_number(&self, row: usize, col: usize) -> usize {
        (col - 1) + (row - 1) * self.size
    }

    /// Total number of spots on the board.
    pub fn total_pieces(&self) -> usize {
        self.cells.iter().map(|cell| cell.spots() as usize).sum()
    }

    /// The side that moves next. Once the game is won this is the loser.
    pub fn whose_move(&self) -> Side {
        if (self.total_pieces() + self.size) % 2 == 0 {
            Side::Red
        } else {
            Side::Blue
        }
    }

    pub fn num_cells_of(&self, side: Side) -> usize {
        self.cells.iter().filter(|cell| cell.side() == side).count()
    }

    pub fn winner(&self) -> Option<Side> {
        let total = self.size * self.size;
        if total == 0 {
            return None;
        }
        [Side::Red, Side::Blue]
            .iter()
            .copied()
            .find(|&side| self.num_cells_of(side) == total)
    }

    /// True if `side` could add a spot at row `row`, column `col`, ignoring
    /// whose turn it is.
    pub fn is_playable(&self, side: Side, row: usize, col: usize) -> bool {
        self.get(row, col)
            .map_or(false, |cell| side.can_play(cell.side()))
    }

    pub fn is_playable_square(&self, side: Side, n: usize) -> bool {
        self.get_square(n)
            .map_or(false, |cell| side.can_play(cell.side()))
    }

    pub fn is_turn_of(&self, side: Side) -> bool {
        self.whose_move() == side
    }

    /// True if it is `side`'s turn and `side` may play at row `row`, column `col`.
    pub fn is_legal(&self, side: Side, row: usize, col: usize) -> bool {
        self.is_turn_of(side) && self.is_playable(side, row, col)
    }

    /// Adds a spot for `side` at row `row`, column `col`, resolving any chain
    /// reaction and recording an undo point. Illegal moves are ignored.
    pub fn add_spot(&mut self, side: Side, row: usize, col: usize) {
        if let Err(error) = self.try_add_spot(side, row, col) {
            debug!("Rejected move {} {} for {}: {}", row, col, side, error);
        }
    }

    pub fn add_spot_square(&mut self, side: Side, n: usize) {
        if !self.exists_square(n) {
            debug!("Rejected move #{} for {}: no such square", n, side);
            return;
        }
        self.add_spot(side, self.row(n), self.col(n));
    }

    /// Like `add_spot`, but reports why a move was rejected.
    pub fn try_add_spot(&mut self, side: Side, row: usize, col: usize) -> Result<(), BoardError> {
        let cell = self
            .get(row, col)
            .ok_or(BoardError::NoSuchSquare { row, col })?;
        if !self.is_turn_of(side) {
            return Err(BoardError::NotYourTurn { side });
        }
        if !side.can_play(cell.side()) {
            return Err(BoardError::OpponentSquare {
                row,
                col,
                owner: cell.side(),
            });
        }

        self.place(side, self.square_number(row, col));
        self.history.record(self.cells.clone());
        self.announce();
        Ok(())
    }

    /// Adds a spot for `side` at square `n` without regard to whose turn it is,
    /// recording no undo point and notifying nobody. Used to play out
    /// hypothetical positions. Returns false if `side` may not play there.
    pub fn simulate_spot(&mut self, side: Side, n: usize) -> bool {
        if !self.is_playable_square(side, n) {
            return false;
        }
        self.place(side, n);
        true
    }

    /// Sets row `row`, column `col` to `spots` spots of `side` (neutral when
    /// `spots` is 0). Edits are not undoable: the edited position becomes the
    /// start of the undo history.
    pub fn set(&mut self, row: usize, col: usize, spots: u32, side: Side) {
        if !self.exists(row, col) {
            return;
        }
        let n = self.square_number(row, col);
        self.cells[n] = Cell::new(side, spots);
        self.history.reset(self.cells.clone());
        self.announce();
    }

    /// Undoes the last move, back to construction or the last clear.
    pub fn undo(&mut self) {
        if let Some(previous) = self.history.undo() {
            self.cells = previous.clone();
            self.announce();
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn neighbor_count(&self, row: usize, col: usize) -> usize {
        let mut count = 0;
        if row > 1 {
            count += 1;
        }
        if col > 1 {
            count += 1;
        }
        if row < self.size {
            count += 1;
        }
        if col < self.size {
            count += 1;
        }
        count
    }

    pub fn neighbor_count_square(&self, n: usize) -> usize {
        self.neighbor_count(self.row(n), self.col(n))
    }

    /// True if square `n` holds more spots than it has neighbors.
    pub fn is_overfull_square(&self, n: usize) -> bool {
        self.get_square(n)
            .map_or(false, |cell| cell.spots() as usize > self.neighbor_count_square(n))
    }

    /// Registers `notifier` and calls it once with the current contents.
    pub fn set_notifier<F>(&mut self, notifier: F)
    where
        F: FnMut(&Board) + 'static,
    {
        self.notifier = Some(Box::new(notifier));
        self.announce();
    }

    pub fn clear_notifier(&mut self) {
        self.notifier = None;
    }

    /// Adds the spot and lets the board settle. The caller has checked legality.
    fn place(&mut self, side: Side, n: usize) {
        self.cells[n] = self.cells[n].with_spot_added(side);
        if self.winner().is_some() {
            return;
        }
        if self.is_overfull_square(n) {
            self.resolve_chain_reactions(n);
        }
    }

    fn announce(&mut self) {
        if let Some(mut notify) = self.notifier.take() {
            notify(self);
            self.notifier = Some(notify);
        }
    }
}

impl Clone for Board {
    /// Copies are disposable snapshots: they get a fresh undo history and no
    /// notifier.
    fn clone(&self) -> Self {
        Self::from_board(self)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_pieces().hash(state);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("cells", &self.cells)
            .field("history_len", &self.history.len())
            .finish()
    }
}
