//! Maze generation algorithms.
//!
//! Provides three generators:
//! - **Carved maze**: randomized depth-first carving in two-cell jumps,
//!   every corridor cell costs 0.
//! - **Weighted maze**: a guaranteed zero-cost corridor from Start to End
//!   with weighted branches carved off it.
//! - **Open maze**: no walls at all, every cell carries a random cost.

use std::ops::RangeInclusive;

use mazer_core::{Cell, Grid, MAX_COST, Point};
use mazer_paths::{Algorithm, Solver};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::size::MazeSize;

/// Which generator to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeKind {
    /// [`MazeGen::carve_maze`]
    Carved,
    /// [`MazeGen::weighted_maze`]
    Weighted,
    /// [`MazeGen::open_weighted`] with the given endpoints.
    Open { start: Point, end: Point },
}

impl MazeKind {
    /// The maze each search is normally run on. A* gets an open maze with
    /// Start and End in opposite corners.
    pub fn for_algorithm(algorithm: Algorithm, size: MazeSize) -> Self {
        match algorithm {
            Algorithm::Bfs | Algorithm::Dfs => MazeKind::Carved,
            Algorithm::Dijkstra => MazeKind::Weighted,
            Algorithm::AStar => {
                let (rows, cols) = size.dims();
                MazeKind::Open {
                    start: Point::ZERO,
                    end: Point::new(rows - 1, cols - 1),
                }
            }
        }
    }
}

/// Maze generator driven by an explicit random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    branch_costs: RangeInclusive<u8>,
    open_costs: RangeInclusive<u8>,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default cost ranges (branches 1–5,
    /// open cells 0–9).
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            branch_costs: 1..=5,
            open_costs: 0..=MAX_COST,
        }
    }

    /// Replace the cost ranges. Bounds are put in order and capped at
    /// [`MAX_COST`].
    pub fn with_costs(mut self, branch: RangeInclusive<u8>, open: RangeInclusive<u8>) -> Self {
        self.branch_costs = normalize(branch);
        self.open_costs = normalize(open);
        self
    }

    /// Run the generator selected by `kind`.
    pub fn generate(&mut self, kind: MazeKind, size: MazeSize) -> Grid {
        match kind {
            MazeKind::Carved => self.carve_maze(size),
            MazeKind::Weighted => self.weighted_maze(size),
            MazeKind::Open { start, end } => self.open_weighted(size, start, end),
        }
    }

    /// Generate an unweighted maze.
    ///
    /// Start goes in the top row and End in the bottom row, each at a random
    /// column. Corridors are carved from row 1 below the Start with an
    /// iterative depth-first walk that jumps two cells at a time, opening
    /// the wall in between, so corridors stay one cell wide. Finally the
    /// border cells beside Start and End are opened.
    ///
    /// Connectivity of Start and End is likely but not guaranteed.
    pub fn carve_maze(&mut self, size: MazeSize) -> Grid {
        let (rows, cols) = size.dims();
        let mut grid = Grid::new(rows, cols);

        let start_col = self.rng.random_range(0..cols);
        let end_col = self.rng.random_range(0..cols);
        let start = Point::new(0, start_col);
        let end = Point::new(rows - 1, end_col);
        grid.set(start, Cell::Start);
        grid.set(end, Cell::End);

        let seed_col = if start_col % 2 == 1 { start_col } else { start_col.max(1) };
        let seed = Point::new(1, seed_col);
        grid.set(seed, Cell::Open(0));
        self.carve_from(&mut grid, seed);

        for p in [start, end] {
            for side in [p.shift(0, -1), p.shift(0, 1)] {
                if grid.at(side).is_some_and(|c| !c.is_terminal()) {
                    grid.set(side, Cell::Open(0));
                }
            }
        }

        if !Solver::new().connected(&grid, start, end) {
            log::warn!("carved {size} maze leaves {start} and {end} disconnected");
        }
        log::debug!("carved {size} maze, start {start}, end {end}");
        grid
    }

    /// Generate a weighted maze with a guaranteed Start→End route.
    ///
    /// Start and End sit at random odd columns of the top and bottom rows.
    /// A zero-cost corridor wanders from below the Start down to the second
    /// last row (never moving up), then runs along that row to the End's
    /// column. Branches are then carved from every corridor cell, each
    /// carved pair of cells sharing a random cost from the branch range.
    pub fn weighted_maze(&mut self, size: MazeSize) -> Grid {
        let (rows, cols) = size.dims();
        let mut grid = Grid::new(rows, cols);

        let start = Point::new(0, self.odd_col(cols));
        let end = Point::new(rows - 1, self.odd_col(cols));
        grid.set(start, Cell::Start);
        grid.set(end, Cell::End);

        let corridor = self.corridor(&mut grid, start, end);
        let carved = corridor.len();
        self.branch_from(&mut grid, corridor);

        log::debug!(
            "weighted {size} maze, start {start}, end {end}, corridor {carved} cells"
        );
        grid
    }

    /// Generate a wall-free maze with random cell costs, then stamp Start
    /// and End at the given coordinates.
    ///
    /// The coordinates are not checked: out-of-bounds stamps are dropped and
    /// equal coordinates leave only the End. Validate before searching.
    pub fn open_weighted(&mut self, size: MazeSize, start: Point, end: Point) -> Grid {
        let (rows, cols) = size.dims();
        let mut grid = Grid::new(rows, cols);
        let costs = self.open_costs.clone();
        grid.fill_fn(|_| Cell::Open(self.rng.random_range(costs.clone())));
        grid.set(start, Cell::Start);
        grid.set(end, Cell::End);
        log::debug!("open {size} maze, start {start}, end {end}");
        grid
    }

    /// Random odd column in `1..cols-1`.
    fn odd_col(&mut self, cols: i32) -> i32 {
        1 + 2 * self.rng.random_range(0..((cols - 1) / 2).max(1))
    }

    /// Iterative randomized depth-first carving from `seed`.
    fn carve_from(&mut self, grid: &mut Grid, seed: Point) {
        let bounds = grid.bounds();
        let mut dirs = Point::CARDINALS;
        let mut stack = vec![seed];

        while let Some(&cur) = stack.last() {
            dirs.shuffle(&mut self.rng);
            let next = dirs
                .iter()
                .map(|&d| (cur + d, cur + d + d))
                .find(|&(_, target)| bounds.interior(target) && grid.at(target) == Some(Cell::Wall));

            match next {
                Some((between, target)) => {
                    grid.set(between, Cell::Open(0));
                    grid.set(target, Cell::Open(0));
                    stack.push(target);
                }
                // Dead end, backtrack.
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// Carve the zero-cost corridor from below `start` to above `end`,
    /// returning its cells in carving order.
    fn corridor(&mut self, grid: &mut Grid, start: Point, end: Point) -> Vec<Point> {
        const MOVES: [Point; 3] = [Point::new(1, 0), Point::new(0, 1), Point::new(0, -1)];

        let bounds = grid.bounds();
        let last_row = end.row - 1;
        let mut cur = start.shift(1, 0);
        let mut cells = vec![cur];
        grid.set(cur, Cell::Open(0));

        let open = |grid: &mut Grid, p: Point, cells: &mut Vec<Point>| {
            if grid.at(p) == Some(Cell::Wall) {
                grid.set(p, Cell::Open(0));
                cells.push(p);
            }
        };

        while cur.row < last_row {
            let next = cur + MOVES[self.rng.random_range(0..MOVES.len())];
            if bounds.interior(next) {
                open(grid, next, &mut cells);
                cur = next;
            }
        }
        while cur.col != end.col {
            cur = cur.shift(0, (end.col - cur.col).signum());
            open(grid, cur, &mut cells);
        }
        cells
    }

    /// Carve weighted branches outward from the corridor cells.
    fn branch_from(&mut self, grid: &mut Grid, corridor: Vec<Point>) {
        let bounds = grid.bounds();
        let mut dirs = Point::CARDINALS;
        let mut stack: Vec<Point> = corridor.into_iter().rev().collect();

        while let Some(cur) = stack.pop() {
            dirs.shuffle(&mut self.rng);
            for d in dirs {
                let between = cur + d;
                let target = between + d;
                if !bounds.interior(target) || grid.at(target) != Some(Cell::Wall) {
                    continue;
                }
                let weight = Cell::Open(self.rng.random_range(self.branch_costs.clone()));
                if grid.at(between) == Some(Cell::Wall) {
                    grid.set(between, weight);
                }
                grid.set(target, weight);
                stack.push(target);
            }
        }
    }
}

fn normalize(r: RangeInclusive<u8>) -> RangeInclusive<u8> {
    let (a, b) = r.into_inner();
    a.min(b).min(MAX_COST)..=a.max(b).min(MAX_COST)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mg(seed: u64) -> MazeGen<StdRng> {
        MazeGen::new(StdRng::seed_from_u64(seed))
    }

    fn one_start_one_end(g: &Grid) -> bool {
        g.count(Cell::Start) == 1 && g.count(Cell::End) == 1
    }

    #[test]
    fn carved_maze_layout() {
        for size in MazeSize::ALL {
            for seed in 0..10 {
                let g = mg(seed).carve_maze(size);
                assert_eq!((g.rows(), g.cols()), size.dims());
                assert!(one_start_one_end(&g));
                assert_eq!(g.find(Cell::Start).unwrap().row, 0);
                assert_eq!(g.find(Cell::End).unwrap().row, g.rows() - 1);
                // Only walls and zero-cost corridors.
                assert_eq!(
                    g.count_fn(|_, c| matches!(c, Cell::Open(n) if n != 0)),
                    0
                );
                assert!(g.count(Cell::Open(0)) > 0);
            }
        }
    }

    #[test]
    fn carved_corridors_are_one_cell_wide() {
        let g = mg(3).carve_maze(MazeSize::Large);
        // No 2×2 block of interior open cells.
        for r in 1..g.rows() - 2 {
            for c in 1..g.cols() - 2 {
                let block = [(0, 0), (0, 1), (1, 0), (1, 1)]
                    .iter()
                    .all(|&(dr, dc)| g.at(Point::new(r + dr, c + dc)) == Some(Cell::Open(0)));
                assert!(!block, "2x2 open block at ({r}, {c})");
            }
        }
    }

    #[test]
    fn carved_border_beside_endpoints_is_open() {
        let g = mg(11).carve_maze(MazeSize::Small);
        for p in [g.find(Cell::Start).unwrap(), g.find(Cell::End).unwrap()] {
            for side in [p.shift(0, -1), p.shift(0, 1)] {
                if let Some(c) = g.at(side) {
                    assert!(c.is_passable(), "{side} next to {p} is a wall");
                }
            }
        }
    }

    #[test]
    fn weighted_maze_layout() {
        for size in MazeSize::ALL {
            for seed in 0..10 {
                let g = mg(seed).weighted_maze(size);
                assert!(one_start_one_end(&g));
                let s = g.find(Cell::Start).unwrap();
                let e = g.find(Cell::End).unwrap();
                assert_eq!(s.row, 0);
                assert_eq!(e.row, g.rows() - 1);
                assert_eq!(s.col % 2, 1);
                assert_eq!(e.col % 2, 1);
                assert!(g.count_fn(|_, c| matches!(c, Cell::Open(n) if n > 5)) == 0);
            }
        }
    }

    #[test]
    fn weighted_maze_always_connects() {
        for seed in 0..50 {
            let g = mg(seed).weighted_maze(MazeSize::Medium);
            let s = g.find(Cell::Start).unwrap();
            let e = g.find(Cell::End).unwrap();
            assert!(Solver::new().connected(&g, s, e), "seed {seed}");
        }
    }

    #[test]
    fn weighted_corridor_is_free() {
        // The cheapest route runs along the zero-cost corridor.
        for seed in 0..20 {
            let g = mg(seed).weighted_maze(MazeSize::Small);
            let sol = Solver::new().dijkstra(&g).unwrap();
            assert_eq!(sol.cost, Some(0), "seed {seed}");
        }
    }

    #[test]
    fn open_maze_has_no_walls() {
        let start = Point::new(2, 3);
        let end = Point::new(10, 1);
        let g = mg(5).open_weighted(MazeSize::Medium, start, end);
        assert_eq!(g.count(Cell::Wall), 0);
        assert_eq!(g.at(start), Some(Cell::Start));
        assert_eq!(g.at(end), Some(Cell::End));
        assert!(g.count_fn(|_, c| matches!(c, Cell::Open(n) if n > 9)) == 0);
    }

    #[test]
    fn open_maze_does_not_validate_endpoints() {
        let g = mg(5).open_weighted(MazeSize::Small, Point::new(0, 0), Point::new(40, 40));
        assert_eq!(g.count(Cell::Start), 1);
        assert_eq!(g.count(Cell::End), 0);

        let g = mg(5).open_weighted(MazeSize::Small, Point::new(1, 1), Point::new(1, 1));
        assert_eq!(g.count(Cell::Start), 0);
        assert_eq!(g.at(Point::new(1, 1)), Some(Cell::End));
    }

    #[test]
    fn custom_cost_ranges() {
        let mut g = mg(1).with_costs(7..=3, 4..=200);
        let open = g.open_weighted(MazeSize::Small, Point::ZERO, Point::new(6, 6));
        assert!(open.count_fn(|_, c| matches!(c, Cell::Open(n) if n < 4)) == 0);
        let weighted = g.weighted_maze(MazeSize::Small);
        assert!(
            weighted.count_fn(|_, c| matches!(c, Cell::Open(n) if n != 0 && !(3..=7).contains(&n)))
                == 0
        );
    }

    #[test]
    fn same_seed_same_maze() {
        for kind in [
            MazeKind::Carved,
            MazeKind::Weighted,
            MazeKind::for_algorithm(Algorithm::AStar, MazeSize::Large),
        ] {
            let a = mg(99).generate(kind, MazeSize::Large);
            let b = mg(99).generate(kind, MazeSize::Large);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn same_seed_same_solution() {
        for size in MazeSize::ALL {
            for seed in 0..5 {
                for alg in Algorithm::ALL {
                    let kind = MazeKind::for_algorithm(alg, size);
                    let a = Solver::new().solve(alg, &mg(seed).generate(kind, size)).unwrap();
                    let b = Solver::new().solve(alg, &mg(seed).generate(kind, size)).unwrap();
                    assert_eq!(a, b, "{alg} on {size}, seed {seed}");
                }
            }
        }
    }

    #[test]
    fn dijkstra_and_astar_agree_on_generated_mazes() {
        for size in MazeSize::ALL {
            let (rows, cols) = size.dims();
            let corner = Point::new(rows - 1, cols - 1);
            for seed in 0..10 {
                let grids = [
                    mg(seed).weighted_maze(size),
                    mg(seed).open_weighted(size, Point::ZERO, corner),
                    // No zero-cost cells, so the estimate is live.
                    mg(seed)
                        .with_costs(1..=5, 1..=MAX_COST)
                        .open_weighted(size, Point::ZERO, corner),
                ];
                for g in grids {
                    let s = g.find(Cell::Start).unwrap();
                    let e = g.find(Cell::End).unwrap();
                    let d = Solver::new().dijkstra(&g).unwrap();
                    let a = Solver::new().astar(&g, s, e).unwrap();
                    assert!(d.found(), "{size}, seed {seed}");
                    assert_eq!(a.cost, d.cost, "{size}, seed {seed}");
                    assert_eq!(g.path_cost(&d.path), d.cost);
                    assert_eq!(g.path_cost(&a.path), a.cost);
                    assert_eq!(a.path.first(), Some(&s));
                    assert_eq!(a.path.last(), Some(&e));
                }
            }
        }
    }

    #[test]
    fn bfs_paths_never_longer_than_dfs_on_carved_mazes() {
        for size in MazeSize::ALL {
            for seed in 0..20 {
                let g = mg(seed).carve_maze(size);
                let b = Solver::new().bfs(&g).unwrap();
                let d = Solver::new().dfs(&g).unwrap();
                assert_eq!(b.found(), d.found(), "{size}, seed {seed}");
                assert!(d.trace.len() <= g.len());
                assert!(d.path.len() <= g.len());
                if b.found() {
                    assert!(b.steps() <= d.steps(), "{size}, seed {seed}");
                    assert!(d.path.windows(2).all(|w| w[0].is_adjacent(w[1])));
                    assert_eq!(b.cost, Some(b.steps() as i32));
                }
            }
        }
    }

    #[test]
    fn kind_per_algorithm() {
        assert_eq!(MazeKind::for_algorithm(Algorithm::Bfs, MazeSize::Small), MazeKind::Carved);
        assert_eq!(
            MazeKind::for_algorithm(Algorithm::Dijkstra, MazeSize::Small),
            MazeKind::Weighted
        );
        assert_eq!(
            MazeKind::for_algorithm(Algorithm::AStar, MazeSize::Medium),
            MazeKind::Open {
                start: Point::ZERO,
                end: Point::new(14, 14)
            }
        );
    }
}
