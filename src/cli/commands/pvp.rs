//! Pvp command - two humans at one terminal.

use jump61::game::{GameConfig, PlayerKind};
use structopt::StructOpt;

use super::util::run_interactive;
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short, long, default_value = "6")]
    pub size: usize,
}

impl Command for PvpArgs {
    fn execute(self) {
        run_interactive(GameConfig {
            size: self.size,
            red: PlayerKind::Manual,
            blue: PlayerKind::Manual,
            ..GameConfig::default()
        });
    }
}
