use mazer_core::{Grid, Point};

use crate::frontier::Key;

/// Ordered collection of discovered-but-unexpanded positions.
pub trait Frontier {
    /// Add a position. Disciplines that are not priority-ordered ignore `key`.
    fn push(&mut self, p: Point, key: Key);

    /// Remove the next position to expand.
    fn pop(&mut self) -> Option<Point>;

    /// Number of pending entries, duplicates included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Edge-cost and ordering policy plugged into the shared search loop.
pub trait Strategy {
    /// Whether a cheaper route may overwrite a recorded cost and parent.
    /// Without relaxation the first discovery of a cell is final.
    const RELAX: bool;

    /// Cost of stepping onto `to`, `None` if it cannot be entered.
    fn cost(&self, grid: &Grid, to: Point) -> Option<i32>;

    /// Estimate of the remaining cost from `p` to the goal.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, _p: Point) -> i32 {
        0
    }

    /// Frontier key for a cell reached at cumulative cost `g`.
    fn key(&self, g: i32, p: Point) -> Key {
        Key::new(g + self.estimate(p), g)
    }
}
