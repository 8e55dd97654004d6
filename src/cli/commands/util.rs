//! Shared utilities for commands.

use std::io;

use jump61::board::Board;
use jump61::game::{Game, GameConfig, MAX_SIZE, MIN_SIZE};

/// Runs the interactive command loop on stdin/stdout, redrawing the board
/// after every change.
pub(crate) fn run_interactive(config: GameConfig) {
    if !(MIN_SIZE..=MAX_SIZE).contains(&config.size) {
        eprintln!(
            "Board size must be between {} and {}, got {}.",
            MIN_SIZE, MAX_SIZE, config.size
        );
        return;
    }

    let mut game = Game::new(config);
    game.set_prompt(true);
    game.set_board_notifier(|board: &Board| println!("{}\n", board.to_display_string()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(error) = game.run(stdin.lock(), &mut stdout.lock()) {
        eprintln!("Game ended with an error: {}", error);
    }
}
