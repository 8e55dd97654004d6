//! Parsing of player commands and of dumped boards.

pub mod command;
pub mod dump;

pub use command::{Command, InputError};
pub use dump::{parse_dump, DumpParseError};
