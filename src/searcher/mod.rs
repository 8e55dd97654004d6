use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::{self, WINNING_VALUE};
use crate::move_generator::generate_moves;
use log::debug;
use thiserror::Error;


#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("search depth must be at least 1")]
    ZeroDepth,
    #[error("the game is over, {winner} has won")]
    GameOver { winner: Side },
    #[error("no available moves for {side}")]
    NoAvailableMoves { side: Side },
}

/// Chooses moves by fixed-depth minimax with alpha-beta pruning. Red maximizes
/// and Blue minimizes the material score from `evaluate`.
pub struct AlphaBetaSearcher {
    search_depth: u8,
    searched_position_count: usize,
    termination_count: usize,
    last_score: Option<i32>,
}

impl AlphaBetaSearcher {
    pub fn new(depth: u8) -> Self {
        Self {
            search_depth: depth,
            searched_position_count: 0,
            termination_count: 0,
            last_score: None,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_depth = depth;
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    /// Score of the move returned by the last successful search.
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Returns the best move for `side` on `board`. `board` itself is never
    /// touched; the search runs on private copies. Among equally good moves the
    /// first in row-major order wins.
    pub fn search(&mut self, board: &Board, side: Side) -> Result<Square, SearchError> {
        self.reset_stats();
        self.last_score = None;

        if self.search_depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if let Some(winner) = board.winner() {
            return Err(SearchError::GameOver { winner });
        }

        let work = Board::from_board(board);
        let candidates = generate_moves(&work, side);
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves { side });
        }

        let maximizing = side.maximize_score();
        let mut alpha = -WINNING_VALUE;
        let mut beta = WINNING_VALUE;
        let mut best: Option<(usize, i32)> = None;

        for &n in candidates.iter() {
            let mut child = Board::from_board(&work);
            child.simulate_spot(side, n);
            let score = self.alpha_beta(
                &child,
                self.search_depth - 1,
                side.opposite(),
                alpha,
                beta,
            );
            debug!("Root move {} {} scores {}", work.row(n), work.col(n), score);

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((n, score));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if alpha >= beta {
                self.termination_count += 1;
                break;
            }
        }

        // candidates is non-empty, so the first iteration always records a move
        let (n, score) = best.ok_or(SearchError::NoAvailableMoves { side })?;
        let chosen = Square::new(work.row(n), work.col(n));
        debug!(
            "{} chooses {} (score {}, {} positions, {} cutoffs)",
            side, chosen, score, self.searched_position_count, self.termination_count
        );
        self.last_score = Some(score);
        Ok(chosen)
    }

    /// Minimax value of `board` with `side` to move and `depth` plies left.
    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        side: Side,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.searched_position_count += 1;

        if depth == 0 {
            return evaluate::score(board);
        }

        // a finished game is not searched past
        match (side, board.winner()) {
            (Side::Red, Some(Side::Blue)) => return -WINNING_VALUE,
            (Side::Blue, Some(Side::Red)) => return WINNING_VALUE,
            _ => (),
        }

        let candidates = generate_moves(board, side);
        if candidates.is_empty() {
            return evaluate::score(board);
        }

        let maximizing = side.maximize_score();
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for n in candidates {
            let mut child = Board::from_board(board);
            child.simulate_spot(side, n);
            let score = self.alpha_beta(&child, depth - 1, side.opposite(), alpha, beta);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                self.termination_count += 1;
                break;
            }
        }

        best
    }
}

/// Searches `depth` plies ahead and returns `side`'s best move on `board`.
pub fn choose_move(board: &Board, side: Side, depth: u8) -> Result<Square, SearchError> {
    AlphaBetaSearcher::new(depth).search(board, side)
}
