//! Reachability flood fill.

use mazer_core::{Grid, Point};

use crate::Solver;

impl Solver {
    /// Flood-fill from `p` through passable cells and return every cell
    /// reached, `p` included. Returns an empty set if `p` is a wall or out
    /// of bounds.
    ///
    /// Overwrites the visited set of the previous search.
    pub fn reachable(&mut self, grid: &Grid, p: Point) -> Vec<Point> {
        let mut result = Vec::new();
        let Some(si) = grid.index(p) else {
            return result;
        };
        if !grid.at(p).is_some_and(|c| c.is_passable()) {
            return result;
        }

        self.visited.clear();
        self.visited.resize(grid.len(), false);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let mut stack = vec![si];
        self.visited[si] = true;
        result.push(p);

        while let Some(ci) = stack.pop() {
            let cp = grid.point(ci);
            nbuf.clear();
            grid.passable_neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if let Some(ni) = grid.index(np) {
                    if !self.visited[ni] {
                        self.visited[ni] = true;
                        stack.push(ni);
                        result.push(np);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        result
    }

    /// Whether a passable route joins `a` and `b`.
    pub fn connected(&mut self, grid: &Grid, a: Point, b: Point) -> bool {
        if self.reachable(grid, a).is_empty() {
            return false;
        }
        grid.index(b).is_some_and(|bi| self.visited[bi])
    }
}
