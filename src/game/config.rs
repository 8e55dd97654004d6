use crate::board::side::Side;

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 10;

/// Who supplies the moves for a side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves are typed in as commands.
    Manual,
    /// Moves are chosen by the searcher.
    Auto,
}

/// Game configuration
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub size: usize,
    pub search_depth: u8,
    pub red: PlayerKind,
    pub blue: PlayerKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 6,
            search_depth: 4, // Default search depth
            red: PlayerKind::Manual,
            blue: PlayerKind::Auto,
        }
    }
}

impl GameConfig {
    /// `human` plays manually against the searcher.
    pub fn against_computer(size: usize, search_depth: u8, human: Side) -> Self {
        let (red, blue) = match human {
            Side::Blue => (PlayerKind::Auto, PlayerKind::Manual),
            _ => (PlayerKind::Manual, PlayerKind::Auto),
        };
        Self {
            size,
            search_depth,
            red,
            blue,
        }
    }

    pub fn player(&self, side: Side) -> Option<PlayerKind> {
        match side {
            Side::Red => Some(self.red),
            Side::Blue => Some(self.blue),
            Side::Neutral => None,
        }
    }

    pub fn set_player(&mut self, side: Side, kind: PlayerKind) {
        match side {
            Side::Red => self.red = kind,
            Side::Blue => self.blue = kind,
            Side::Neutral => (),
        }
    }
}
