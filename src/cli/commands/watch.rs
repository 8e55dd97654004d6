//! Watch command - the computer plays itself.

use std::io;

use jump61::game::{Game, GameConfig, PlayerKind, MAX_SIZE, MIN_SIZE};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "6")]
    pub size: usize,
}

impl Command for WatchArgs {
    fn execute(self) {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            eprintln!(
                "Board size must be between {} and {}, got {}.",
                MIN_SIZE, MAX_SIZE, self.size
            );
            return;
        }

        let mut game = Game::new(GameConfig {
            size: self.size,
            search_depth: self.depth,
            red: PlayerKind::Auto,
            blue: PlayerKind::Auto,
        });
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match game.play_out(&mut out) {
            Ok(_) => println!("{}", game.board().to_display_string()),
            Err(error) => eprintln!("Game ended with an error: {}", error),
        }
    }
}
