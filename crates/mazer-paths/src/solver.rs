use mazer_core::{Cell, Grid, Point};

use crate::frontier::MinQueue;
use crate::solution::{Algorithm, SearchError, Solution};
use crate::strategy::Weighted;

/// Sentinel value meaning "no cost recorded yet" in the cost map.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent index of the search root.
pub const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Runs searches over a [`Grid`].
///
/// `Solver` owns the per-cell bookkeeping (visited set, parent map, cost
/// map) and the neighbour scratch buffer, so repeated solves only allocate
/// when a larger grid comes along.
#[derive(Debug, Default)]
pub struct Solver {
    pub(crate) visited: Vec<bool>,
    pub(crate) parent: Vec<usize>,
    pub(crate) cost: Vec<i32>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Solver {
    pub fn new() -> Self {
        Self {
            nbuf: Vec::with_capacity(4),
            ..Self::default()
        }
    }

    /// Reset the bookkeeping for a grid of `len` cells.
    pub(crate) fn reset(&mut self, len: usize) {
        self.visited.clear();
        self.visited.resize(len, false);
        self.parent.clear();
        self.parent.resize(len, NO_PARENT);
        self.cost.clear();
        self.cost.resize(len, UNREACHABLE);
    }

    /// Run `algorithm` on `grid`.
    ///
    /// A* takes its endpoints from the grid's Start and End cells; use
    /// [`astar`](Self::astar) to pass them explicitly.
    pub fn solve(&mut self, algorithm: Algorithm, grid: &Grid) -> Result<Solution, SearchError> {
        match algorithm {
            Algorithm::Bfs => self.bfs(grid),
            Algorithm::Dfs => self.dfs(grid),
            Algorithm::Dijkstra => self.dijkstra(grid),
            Algorithm::AStar => match (grid.find(Cell::Start), grid.find(Cell::End)) {
                (Some(start), Some(end)) => self.astar(grid, start, end),
                // Without both endpoints there is nothing to aim at; the
                // plain weighted search reports the missing cell.
                (start, end) => self.search(
                    Algorithm::AStar,
                    grid,
                    start,
                    end,
                    &mut MinQueue::new(),
                    &Weighted,
                ),
            },
        }
    }

    /// Cost recorded for `p` by the last search, [`UNREACHABLE`] if none.
    pub fn cost_at(&self, grid: &Grid, p: Point) -> i32 {
        match grid.index(p) {
            Some(i) if i < self.cost.len() => self.cost[i],
            _ => UNREACHABLE,
        }
    }
}

/// Breadth-first search with a fresh [`Solver`].
pub fn bfs(grid: &Grid) -> Result<Solution, SearchError> {
    Solver::new().bfs(grid)
}

/// Depth-first search with a fresh [`Solver`].
pub fn dfs(grid: &Grid) -> Result<Solution, SearchError> {
    Solver::new().dfs(grid)
}

/// Dijkstra's search with a fresh [`Solver`].
pub fn dijkstra(grid: &Grid) -> Result<Solution, SearchError> {
    Solver::new().dijkstra(grid)
}

/// A* search between explicit endpoints with a fresh [`Solver`].
pub fn astar(grid: &Grid, start: Point, end: Point) -> Result<Solution, SearchError> {
    Solver::new().astar(grid, start, end)
}

/// Run `algorithm` on `grid` with a fresh [`Solver`].
pub fn solve(algorithm: Algorithm, grid: &Grid) -> Result<Solution, SearchError> {
    Solver::new().solve(algorithm, grid)
}
