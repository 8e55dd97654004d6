//! Drives a game: applies typed commands to the board and asks the searcher
//! for moves on behalf of automated players.

pub mod config;


use std::io::{self, BufRead, Write};

use log::info;
use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::side::Side;
use crate::board::square::Square;
use crate::board::Board;
use crate::input_handler::{Command, InputError};
use crate::searcher::{AlphaBetaSearcher, SearchError};

pub use config::{GameConfig, PlayerKind, MAX_SIZE, MIN_SIZE};

const HELP: &str = "\
Commands:
  size N       start a new game on an N x N board
  new          start a new game on a board of the current size
  R C          add a spot at row R, column C (also R:C)
  undo         take back the last move
  auto P       the computer plays P (red or blue)
  manual P     moves for P are typed in
  dump         print the board
  help         print this message
  quit         leave the game";

#[derive(Error, Debug)]
pub enum GameError {
    #[error("{0}")]
    Input(#[from] InputError),
    #[error("illegal move: {0}")]
    IllegalMove(#[from] BoardError),
    #[error("board size must be between {} and {}, got {size}", MIN_SIZE, MAX_SIZE)]
    InvalidSize { size: usize },
    #[error("the game is over, {winner} has won")]
    GameOver { winner: Side },
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Whether the command loop should keep going after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Game {
    board: Board,
    config: GameConfig,
    searcher: AlphaBetaSearcher,
    winner_announced: bool,
    prompt: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let board = Board::new(config.size);
        Self::with_board(config, board)
    }

    /// A game starting from `board`. The configured size follows the board.
    pub fn with_board(mut config: GameConfig, board: Board) -> Self {
        config.size = board.size();
        Self {
            searcher: AlphaBetaSearcher::new(config.search_depth),
            board,
            config,
            winner_announced: false,
            prompt: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Prints `<side>> ` before reading each command from a manual player.
    pub fn set_prompt(&mut self, prompt: bool) {
        self.prompt = prompt;
    }

    /// Calls `notifier` whenever the board changes, e.g. to redraw it.
    pub fn set_board_notifier<F>(&mut self, notifier: F)
    where
        F: FnMut(&Board) + 'static,
    {
        self.board.set_notifier(notifier);
    }

    /// The side to move adds a spot at row `row`, column `col`.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if let Some(winner) = self.board.winner() {
            return Err(GameError::GameOver { winner });
        }
        let side = self.board.whose_move();
        self.board.try_add_spot(side, row, col)?;
        info!("{} moves {} {}", side, row, col);
        Ok(())
    }

    /// Lets the searcher pick and play a move for the side to move.
    pub fn make_best_move(&mut self) -> Result<Square, GameError> {
        let side = self.board.whose_move();
        let square = self.searcher.search(&self.board, side)?;
        self.board.try_add_spot(side, square.row, square.col)?;
        info!(
            "{} moves {} after searching {} positions",
            side,
            square,
            self.searcher.searched_position_count()
        );
        Ok(square)
    }

    /// Takes back moves until a manual side is to move again, so automated
    /// replies do not immediately replay the move being undone.
    pub fn undo(&mut self) {
        self.board.undo();
        while self.board.can_undo()
            && self.config.player(self.board.whose_move()) == Some(PlayerKind::Auto)
        {
            self.board.undo();
        }
        self.winner_announced = false;
    }

    pub fn new_game(&mut self) {
        self.board.clear(self.config.size);
        self.winner_announced = false;
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, GameError> {
        match command {
            Command::Nothing => (),
            Command::Size(size) => {
                if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
                    return Err(GameError::InvalidSize { size });
                }
                self.config.size = size;
                self.new_game();
            }
            Command::New => self.new_game(),
            Command::Move { row, col } => self.make_move(row, col)?,
            Command::Undo => self.undo(),
            Command::Auto(side) => self.config.set_player(side, PlayerKind::Auto),
            Command::Manual(side) => self.config.set_player(side, PlayerKind::Manual),
            Command::Dump => write!(out, "{}", self.board)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands from `input` until `quit` or end of input, playing for
    /// automated sides in between. Bad commands and illegal moves are reported
    /// on `out` and do not stop the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), GameError> {
        let mut lines = input.lines();
        loop {
            match self.board.winner() {
                Some(winner) => {
                    if !self.winner_announced {
                        writeln!(out, "{} wins.", winner)?;
                        self.winner_announced = true;
                    }
                }
                None => {
                    let side = self.board.whose_move();
                    if self.config.player(side) == Some(PlayerKind::Auto) {
                        let square = self.make_best_move()?;
                        writeln!(out, "{} moves {}.", side, square)?;
                        continue;
                    }
                    if self.prompt {
                        write!(out, "{}> ", side)?;
                        out.flush()?;
                    }
                }
            }

            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            let result = match line.parse::<Command>() {
                Ok(command) => self.execute(command, out),
                Err(error) => Err(error.into()),
            };
            match result {
                Ok(Flow::Continue) => (),
                Ok(Flow::Quit) => return Ok(()),
                Err(GameError::Io(error)) => return Err(GameError::Io(error)),
                Err(error) => writeln!(out, "error: {}", error)?,
            }
        }
    }

    /// The searcher plays both sides until someone wins.
    pub fn play_out<W: Write>(&mut self, out: &mut W) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.board.winner() {
                writeln!(out, "{} wins.", winner)?;
                self.winner_announced = true;
                return Ok(winner);
            }
            let side = self.board.whose_move();
            let square = self.make_best_move()?;
            writeln!(out, "{} moves {}.", side, square)?;
        }
    }
}
