//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "jump61",
    about = "The Jump61 chain-reaction game, with a computer opponent"
)]
pub enum Jump61 {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches for the best move using alpha-beta pruning at the given `--depth` (default: 4). You play Red unless you pick a side with `--color` (red, blue or random). The board is `--size` squares on a side (default: 6). Type `help` during the game for the list of commands."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine, on a board `--size` squares on a side (default: 6)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4) until one side owns the whole board."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Read a dumped board from `--board` (a file) and print the move the engine would make for `--side` (default: the side to move) at the given `--depth` (default: 4)."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Jump61 {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
