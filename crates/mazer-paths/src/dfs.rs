use mazer_core::{Cell, Grid};

use crate::frontier::Lifo;
use crate::solution::{Algorithm, SearchError, Solution};
use crate::solver::Solver;
use crate::strategy::Unweighted;

impl Solver {
    /// Depth-first search from the grid's Start to its End.
    ///
    /// The most recently discovered cell is expanded first. The path found
    /// follows the discovery tree and is not necessarily the shortest.
    pub fn dfs(&mut self, grid: &Grid) -> Result<Solution, SearchError> {
        self.search(
            Algorithm::Dfs,
            grid,
            grid.find(Cell::Start),
            grid.find(Cell::End),
            &mut Lifo::new(),
            &Unweighted,
        )
    }
}
