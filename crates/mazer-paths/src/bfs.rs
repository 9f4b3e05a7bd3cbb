use mazer_core::{Cell, Grid};

use crate::frontier::Fifo;
use crate::solution::{Algorithm, SearchError, Solution};
use crate::solver::Solver;
use crate::strategy::Unweighted;

impl Solver {
    /// Breadth-first search from the grid's Start to its End.
    ///
    /// Each step has cost 1; the path found is shortest by edge count.
    pub fn bfs(&mut self, grid: &Grid) -> Result<Solution, SearchError> {
        self.search(
            Algorithm::Bfs,
            grid,
            grid.find(Cell::Start),
            grid.find(Cell::End),
            &mut Fifo::new(),
            &Unweighted,
        )
    }
}
