use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashSet;

use super::Board;

impl Board {
    /// Fires overfull squares until the board is stable or someone owns every
    /// cell. `start` is the only square that may be overfull on entry.
    pub(super) fn resolve_chain_reactions(&mut self, start: usize) {
        let mut work_queue = VecDeque::new();
        let mut queued = FxHashSet::default();
        work_queue.push_back(start);
        queued.insert(start);

        while let Some(n) = work_queue.pop_front() {
            queued.remove(&n);
            if self.is_overfull_square(n) {
                self.fire(n);
            }

            if self.winner().is_some() {
                trace!("Board decided, abandoning {} queued squares", work_queue.len());
                return;
            }

            for i in 0..self.cells.len() {
                if self.is_overfull_square(i) && queued.insert(i) {
                    work_queue.push_back(i);
                }
            }
        }
    }

    /// Moves one spot from square `n` onto each of its neighbors, which take
    /// on `n`'s color.
    fn fire(&mut self, n: usize) {
        let cell = self.cells[n];
        let side = cell.side();
        let neighbors = self.neighbors(n);
        trace!(
            "Square {} {} fires {} spots for {}",
            self.row(n),
            self.col(n),
            neighbors.len(),
            side
        );

        self.cells[n] = cell.with_spots(cell.spots() - neighbors.len() as u32);
        for neighbor in neighbors {
            self.cells[neighbor] = self.cells[neighbor].with_spot_added(side);
        }
    }

    /// Square numbers orthogonally adjacent to square `n`. The board does not wrap.
    fn neighbors(&self, n: usize) -> Vec<usize> {
        let (row, col) = (self.row(n), self.col(n));
        let mut neighbors = Vec::with_capacity(4);
        if row > 1 {
            neighbors.push(n - self.size);
        }
        if row < self.size {
            neighbors.push(n + self.size);
        }
        if col > 1 {
            neighbors.push(n - 1);
        }
        if col < self.size {
            neighbors.push(n + 1);
        }
        neighbors
    }
}
