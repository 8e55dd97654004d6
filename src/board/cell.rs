use std::fmt;

use super::side::Side;

/// The contents of one square: an owner and a number of spots. A cell always
/// holds at least one spot; a cell with nothing on it is Neutral with one spot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    side: Side,
    spots: u32,
}

impl Default for Cell {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl Cell {
    pub const NEUTRAL: Cell = Cell {
        side: Side::Neutral,
        spots: 1,
    };

    /// Zero spots yields the neutral cell regardless of `side`.
    pub fn new(side: Side, spots: u32) -> Self {
        if spots == 0 {
            return Self::NEUTRAL;
        }
        Self { side, spots }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn spots(&self) -> u32 {
        self.spots
    }

    pub fn with_spots(&self, spots: u32) -> Self {
        Self::new(self.side, spots)
    }

    /// The cell after `side` adds one spot to it; the cell changes color.
    pub fn with_spot_added(&self, side: Side) -> Self {
        Self::new(side, self.spots + 1)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spots, self.side.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_spots_is_neutral() {
        assert_eq!(Cell::NEUTRAL, Cell::new(Side::Red, 0));
        assert_eq!(Side::Neutral, Cell::new(Side::Blue, 0).side());
        assert_eq!(1, Cell::new(Side::Blue, 0).spots());
    }

    #[test]
    fn test_add_recolors() {
        let cell = Cell::new(Side::Blue, 2).with_spot_added(Side::Red);
        assert_eq!(Side::Red, cell.side());
        assert_eq!(3, cell.spots());
    }

    #[test]
    fn test_display() {
        assert_eq!("1-", Cell::NEUTRAL.to_string());
        assert_eq!("3r", Cell::new(Side::Red, 3).to_string());
        assert_eq!("2b", Cell::new(Side::Blue, 2).to_string());
    }
}
