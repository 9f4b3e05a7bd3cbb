use mazer_core::{Cell, Grid, Point};

use crate::frontier::MinQueue;
use crate::solution::{Algorithm, Endpoint, SearchError, Solution};
use crate::solver::Solver;
use crate::strategy::Heuristic;

impl Solver {
    /// A* search from `start` to `end`.
    ///
    /// The endpoints must lie inside the grid, differ, and hold the Start
    /// and End cells respectively. Cells are expanded by `(g + h, g)` where
    /// `h` is the Manhattan distance to `end` scaled by the cheapest cell
    /// cost, which keeps the estimate admissible and the path optimal.
    ///
    /// When the grid holds any zero-cost cell the scale is 0, `h` vanishes
    /// and the search expands exactly like [`dijkstra`](Self::dijkstra).
    /// Open mazes with costs 0–9 almost always fall in this case.
    pub fn astar(&mut self, grid: &Grid, start: Point, end: Point) -> Result<Solution, SearchError> {
        validate_endpoint(grid, Endpoint::Start, start)?;
        validate_endpoint(grid, Endpoint::End, end)?;
        if start == end {
            return Err(SearchError::Collision(start));
        }
        check_marked(grid, Endpoint::Start, start, Cell::Start)?;
        check_marked(grid, Endpoint::End, end, Cell::End)?;

        let heuristic = Heuristic::for_grid(grid, end);
        log::debug!("astar: {start} -> {end}, heuristic scale {}", heuristic.scale);

        self.search(
            Algorithm::AStar,
            grid,
            Some(start),
            Some(end),
            &mut MinQueue::new(),
            &heuristic,
        )
    }
}

fn validate_endpoint(grid: &Grid, which: Endpoint, pos: Point) -> Result<(), SearchError> {
    if grid.contains(pos) {
        Ok(())
    } else {
        Err(SearchError::OutOfBounds { which, pos })
    }
}

fn check_marked(grid: &Grid, which: Endpoint, pos: Point, want: Cell) -> Result<(), SearchError> {
    match grid.at(pos) {
        Some(found) if found == want => Ok(()),
        Some(found) => Err(SearchError::Unmarked { which, pos, found }),
        None => Err(SearchError::OutOfBounds { which, pos }),
    }
}
