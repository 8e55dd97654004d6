//! The text command language. One command per line; case and surrounding
//! whitespace do not matter, and trailing extra arguments are ignored.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::side::Side;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\s*[:\s]\s*(\d+)(?:\s.*)?$").expect("MOVE_RE regex should be valid")
});
static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^size\s+(\S+)(?:\s.*)?$").expect("SIZE_RE regex should be valid"));
static PLAYER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(auto|manual)\s+(\S+)(?:\s.*)?$").expect("PLAYER_RE regex should be valid")
});
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+)(?:\s.*)?$").expect("WORD_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("invalid command: {input:?}")]
    InvalidCommand { input: String },
    #[error("invalid board size: {size:?}")]
    InvalidSize { size: String },
    #[error("invalid player: {player:?}")]
    InvalidPlayer { player: String },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    /// Blank line or comment.
    Nothing,
    Size(usize),
    New,
    Move { row: usize, col: usize },
    Undo,
    Auto(Side),
    Manual(Side),
    Dump,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Command::Nothing);
        }

        if let Some(caps) = MOVE_RE.captures(&trimmed) {
            return match (caps[1].parse(), caps[2].parse()) {
                (Ok(row), Ok(col)) => Ok(Command::Move { row, col }),
                _ => Err(InputError::InvalidCommand {
                    input: input.trim().to_string(),
                }),
            };
        }

        if let Some(caps) = SIZE_RE.captures(&trimmed) {
            return caps[1]
                .parse()
                .map(Command::Size)
                .map_err(|_| InputError::InvalidSize {
                    size: caps[1].to_string(),
                });
        }

        if let Some(caps) = PLAYER_RE.captures(&trimmed) {
            let side = match Side::from_str(&caps[2]) {
                Ok(side) if &caps[2] != "random" => side,
                _ => {
                    return Err(InputError::InvalidPlayer {
                        player: caps[2].to_string(),
                    })
                }
            };
            return Ok(match &caps[1] {
                "auto" => Command::Auto(side),
                _ => Command::Manual(side),
            });
        }

        let word = WORD_RE
            .captures(&trimmed)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();
        match word.as_str() {
            "new" => Ok(Command::New),
            "undo" => Ok(Command::Undo),
            "dump" => Ok(Command::Dump),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            _ => Err(InputError::InvalidCommand {
                input: input.trim().to_string(),
            }),
        }
    }
}
