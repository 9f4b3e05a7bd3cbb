//! The expansion loop shared by every search.
//!
//! A position is marked visited when it is popped from the frontier, not
//! when it is pushed. The frontier may therefore hold the same position
//! more than once; every pop after the first is discarded without
//! recording a step.

use mazer_core::{Cell, Grid, Point};

use crate::reconstruct::reconstruct;
use crate::solution::{Algorithm, SearchError, Solution};
use crate::solver::{Solver, UNREACHABLE};
use crate::trace::Trace;
use crate::traits::{Frontier, Strategy};

impl Solver {
    /// Search `grid` from `start` toward `end`, expanding in the order given
    /// by `frontier` and costing steps with `strategy`.
    ///
    /// A missing `start` ends the search before any expansion. A missing or
    /// unreachable `end` exhausts the frontier and yields an empty path.
    pub fn search<F: Frontier, S: Strategy>(
        &mut self,
        algorithm: Algorithm,
        grid: &Grid,
        start: Option<Point>,
        end: Option<Point>,
        frontier: &mut F,
        strategy: &S,
    ) -> Result<Solution, SearchError> {
        let Some(si) = start.and_then(|p| grid.index(p)) else {
            log::debug!("{algorithm}: no start cell, skipping search");
            return Ok(Solution::no_start(algorithm, end));
        };
        let goal = end.and_then(|p| grid.index(p));

        self.reset(grid.len());
        frontier.clear();

        let mut canvas = grid.clone();
        let mut trace = Trace::new(grid);

        self.cost[si] = 0;
        frontier.push(grid.point(si), strategy.key(0, grid.point(si)));

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut stale = 0usize;

        let found = 'search: loop {
            let Some(cp) = frontier.pop() else {
                break 'search None;
            };
            let Some(ci) = grid.index(cp) else {
                continue;
            };

            // Skip stale duplicates.
            if self.visited[ci] {
                stale += 1;
                continue;
            }
            self.visited[ci] = true;
            let current_g = self.cost[ci];
            log::trace!("{algorithm}: expanding {cp} at cost {current_g}");

            let mut step = Vec::new();
            if !canvas.at(cp).is_some_and(Cell::is_terminal) {
                canvas.set(cp, Cell::Visited);
                step.push((cp, Cell::Visited));
            }

            if Some(ci) == goal {
                let path = reconstruct(grid, &self.parent, ci)?;
                if path.len() > 2 {
                    for &p in &path[1..path.len() - 1] {
                        if !canvas.at(p).is_some_and(Cell::is_terminal) {
                            canvas.set(p, Cell::Path);
                            step.push((p, Cell::Path));
                        }
                    }
                }
                trace.push(step);
                break 'search Some((path, current_g));
            }
            trace.push(step);

            nbuf.clear();
            grid.passable_neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.visited[ni] {
                    continue;
                }
                let Some(step_cost) = strategy.cost(grid, np) else {
                    continue;
                };
                let tentative = current_g + step_cost;

                if S::RELAX {
                    if self.cost[ni] != UNREACHABLE && tentative >= self.cost[ni] {
                        continue;
                    }
                    self.cost[ni] = tentative;
                    self.parent[ni] = ci;
                } else if self.cost[ni] == UNREACHABLE {
                    self.cost[ni] = tentative;
                    self.parent[ni] = ci;
                }

                frontier.push(np, strategy.key(tentative, np));
            }
        };

        self.nbuf = nbuf;

        let start = Some(grid.point(si));
        let end = goal.map(|gi| grid.point(gi));
        let expanded = trace.len();

        let solution = match found {
            Some((path, cost)) => {
                let end_point = path[path.len() - 1];
                log::debug!(
                    "{algorithm}: reached {end_point} in {} steps at cost {cost}, {expanded} expanded, {stale} stale",
                    path.len() - 1
                );
                Solution {
                    algorithm,
                    trace: trace.into_strings(),
                    path,
                    start,
                    end,
                    cost: Some(cost),
                    message: format!("We've reached the end at {end_point}!"),
                }
            }
            None => {
                log::debug!("{algorithm}: no path after {expanded} expanded, {stale} stale");
                Solution {
                    algorithm,
                    trace: trace.into_strings(),
                    path: Vec::new(),
                    start,
                    end,
                    cost: None,
                    message: "There is no path to the end of this maze".to_string(),
                }
            }
        };
        Ok(solution)
    }
}
