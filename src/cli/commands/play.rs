//! Play command - play a game against the computer.

use jump61::board::side::Side;
use jump61::game::GameConfig;
use structopt::StructOpt;

use super::util::run_interactive;
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "6")]
    pub size: usize,
    #[structopt(short = "c", long = "color", default_value = "red")]
    pub color: Side,
}

impl Command for PlayArgs {
    fn execute(self) {
        println!("You are playing {}.", self.color);
        run_interactive(GameConfig::against_computer(
            self.size, self.depth, self.color,
        ));
    }
}
