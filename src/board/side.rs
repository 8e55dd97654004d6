use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Ownership of a cell, and the identity of a player. Neutral cells belong to
/// nobody and Neutral never moves.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Neutral = 0,
    Red = 1,
    Blue = 2,
}

impl Side {
    const PLAYERS: [Side; 2] = [Side::Red, Side::Blue];

    pub fn opposite(&self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
            Side::Neutral => Side::Neutral,
        }
    }

    /// Red is the maximizing player in search.
    pub fn maximize_score(&self) -> bool {
        match self {
            Side::Red => true,
            Side::Blue | Side::Neutral => false,
        }
    }

    /// Returns true if this side may add a spot to a cell owned by `owner`.
    pub fn can_play(&self, owner: Side) -> bool {
        match self {
            Side::Neutral => false,
            _ => owner == Side::Neutral || owner == *self,
        }
    }

    /// One-character marker used by the dumped board representation.
    pub fn marker(&self) -> char {
        match self {
            Side::Neutral => '-',
            Side::Red => 'r',
            Side::Blue => 'b',
        }
    }

    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '-' => Some(Side::Neutral),
            'r' => Some(Side::Red),
            'b' => Some(Side::Blue),
            _ => None,
        }
    }

    pub fn random() -> Self {
        *Self::PLAYERS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Side::Red)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side_str = match self {
            Side::Neutral => "Neutral",
            Side::Red => "Red",
            Side::Blue => "Blue",
        };
        write!(f, "{}", side_str)
    }
}

// used for parsing cli args and player commands
type ParseError = &'static str;
impl FromStr for Side {
    type Err = ParseError;
    fn from_str(side: &str) -> Result<Self, Self::Err> {
        match side.to_lowercase().as_str() {
            "red" | "r" => Ok(Side::Red),
            "blue" | "b" => Ok(Side::Blue),
            "random" => Ok(Side::random()),
            _ => Err("invalid side; options are: red, blue, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Side::PLAYERS.contains(&Side::random()));
    }

    #[test]
    fn test_parse_red() {
        assert_eq!(Side::Red, Side::from_str("red").unwrap());
        assert_eq!(Side::Red, Side::from_str("R").unwrap());
        assert_eq!(Side::Red, Side::from_str("RED").unwrap());
    }

    #[test]
    fn test_parse_blue() {
        assert_eq!(Side::Blue, Side::from_str("blue").unwrap());
        assert_eq!(Side::Blue, Side::from_str("b").unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Side::from_str("green").is_err());
        assert!(Side::from_str("neutral").is_err());
    }

    #[test]
    fn test_can_play() {
        assert!(Side::Red.can_play(Side::Neutral));
        assert!(Side::Red.can_play(Side::Red));
        assert!(!Side::Red.can_play(Side::Blue));
        assert!(!Side::Blue.can_play(Side::Red));
        assert!(!Side::Neutral.can_play(Side::Neutral));
    }

    #[test]
    fn test_markers_round_trip() {
        for side in [Side::Neutral, Side::Red, Side::Blue] {
            assert_eq!(Some(side), Side::from_marker(side.marker()));
        }
        assert_eq!(None, Side::from_marker('x'));
    }
}
