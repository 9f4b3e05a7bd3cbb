//! The edge-cost policies behind the four searches.

use mazer_core::{Grid, Point};

use crate::distance::manhattan;
use crate::traits::Strategy;

/// Every step costs 1 and the first discovery of a cell is kept (BFS, DFS).
#[derive(Debug, Clone, Copy, Default)]
pub struct Unweighted;

impl Strategy for Unweighted {
    const RELAX: bool = false;

    fn cost(&self, grid: &Grid, to: Point) -> Option<i32> {
        grid.at(to).filter(|c| c.is_passable()).map(|_| 1)
    }
}

/// Steps cost the entered cell's weight, cheaper routes relax (Dijkstra).
#[derive(Debug, Clone, Copy, Default)]
pub struct Weighted;

impl Strategy for Weighted {
    const RELAX: bool = true;

    fn cost(&self, grid: &Grid, to: Point) -> Option<i32> {
        grid.at(to)?.cost()
    }
}

/// [`Weighted`] guided by a Manhattan-distance estimate toward `goal` (A*).
#[derive(Debug, Clone, Copy)]
pub struct Heuristic {
    pub goal: Point,
    /// Lower bound on the cost of entering any non-terminal cell.
    pub scale: i32,
}

impl Heuristic {
    /// Build the estimate for `grid`, scaled by the cheapest non-terminal
    /// cell so that it stays admissible when zero-cost cells exist.
    pub fn for_grid(grid: &Grid, goal: Point) -> Self {
        Self {
            goal,
            scale: grid.min_cost().unwrap_or(0),
        }
    }
}

impl Strategy for Heuristic {
    const RELAX: bool = true;

    fn cost(&self, grid: &Grid, to: Point) -> Option<i32> {
        grid.at(to)?.cost()
    }

    /// Every move but the last enters a non-terminal cell; the last enters
    /// the End, which is free.
    fn estimate(&self, p: Point) -> i32 {
        self.scale * (manhattan(p, self.goal) - 1).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::Cell;

    #[test]
    fn unweighted_steps_cost_one() {
        let g = Grid::parse("S9#E").unwrap();
        assert_eq!(Unweighted.cost(&g, Point::new(0, 1)), Some(1));
        assert_eq!(Unweighted.cost(&g, Point::new(0, 3)), Some(1));
        assert_eq!(Unweighted.cost(&g, Point::new(0, 2)), None);
        assert_eq!(Unweighted.cost(&g, Point::new(4, 0)), None);
    }

    #[test]
    fn weighted_uses_cell_cost() {
        let g = Grid::parse("S9.E").unwrap();
        assert_eq!(Weighted.cost(&g, Point::new(0, 1)), Some(9));
        assert_eq!(Weighted.cost(&g, Point::new(0, 2)), Some(1));
        assert_eq!(Weighted.cost(&g, Point::new(0, 3)), Some(0));
    }

    #[test]
    fn heuristic_scale_ignores_terminals() {
        let g = Grid::parse("S34\n567\n89E").unwrap();
        let h = Heuristic::for_grid(&g, Point::new(2, 2));
        assert_eq!(h.scale, 3);
        assert_eq!(h.estimate(Point::new(0, 0)), 3 * 3);
        assert_eq!(h.estimate(Point::new(1, 2)), 0);
        assert_eq!(h.estimate(Point::new(2, 2)), 0);
        assert_eq!(h.key(5, Point::new(0, 0)).primary, 14);
    }

    #[test]
    fn heuristic_never_overestimates() {
        let mut g = Grid::filled(5, 5, Cell::Open(2));
        g.set(Point::new(0, 0), Cell::Start);
        g.set(Point::new(4, 4), Cell::End);
        let h = Heuristic::for_grid(&g, Point::new(4, 4));
        // True cost from p: 2 per cell entered, End free.
        for p in g.bounds() {
            let d = manhattan(p, Point::new(4, 4));
            let true_cost = if d == 0 { 0 } else { 2 * (d - 1) };
            assert!(h.estimate(p) <= true_cost);
        }
    }

    #[test]
    fn zero_cost_cells_disable_the_estimate() {
        let g = Grid::parse("S05\n55E").unwrap();
        let h = Heuristic::for_grid(&g, Point::new(1, 2));
        assert_eq!(h.scale, 0);
        assert_eq!(h.estimate(Point::new(0, 0)), 0);
    }
}
