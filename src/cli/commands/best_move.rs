//! Best move command - ask the engine for a move in a given position.

use std::fs;
use std::path::PathBuf;

use jump61::board::side::Side;
use jump61::board::Board;
use jump61::searcher::choose_move;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    /// File holding a dumped board
    #[structopt(short, long, parse(from_os_str))]
    pub board: PathBuf,
    #[structopt(long)]
    pub side: Option<Side>,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let contents = match fs::read_to_string(&self.board) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("Failed to read {}: {}", self.board.display(), err);
                return;
            }
        };
        let board: Board = match contents.parse() {
            Ok(board) => board,
            Err(err) => {
                eprintln!("Failed to parse board: {}", err);
                return;
            }
        };

        let side = self.side.unwrap_or_else(|| board.whose_move());
        match choose_move(&board, side, self.depth) {
            Ok(square) => println!("{}", square),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
