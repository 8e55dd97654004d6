use super::Board;
use std::fmt;

/// The dumped representation: a `===` line, one line per row, a `===` line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "===")?;
        for row in self.cells.chunks(self.size.max(1)) {
            write!(f, "   ")?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "===")
    }
}

impl Board {
    /// The board with row numbers down the left and column numbers along the
    /// bottom, for showing to people.
    pub fn to_display_string(&self) -> String {
        let mut buffer = String::with_capacity(16 * self.size * self.size + 32);
        for (i, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            buffer.push_str(&format!("{:2} {}\n", i + 1, cells.join(" ")));
        }
        buffer.push_str("  ");
        for col in 1..=self.size {
            buffer.push_str(&format!("{:3}", col));
        }
        buffer
    }
}
