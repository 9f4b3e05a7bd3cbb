use mazer_core::{Cell, Grid};

use crate::frontier::MinQueue;
use crate::solution::{Algorithm, SearchError, Solution};
use crate::solver::Solver;
use crate::strategy::Weighted;

impl Solver {
    /// Dijkstra's search from the grid's Start to its End.
    ///
    /// Entering a cell costs its digit (markers cost 1, the End is free).
    /// Cells are expanded in order of cumulative cost, so the End is popped
    /// with its minimal cost.
    pub fn dijkstra(&mut self, grid: &Grid) -> Result<Solution, SearchError> {
        self.search(
            Algorithm::Dijkstra,
            grid,
            grid.find(Cell::Start),
            grid.find(Cell::End),
            &mut MinQueue::new(),
            &Weighted,
        )
    }
}
