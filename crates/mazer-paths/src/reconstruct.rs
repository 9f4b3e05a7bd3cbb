use mazer_core::{Grid, Point};

use crate::solution::SearchError;
use crate::solver::NO_PARENT;

/// Walk the parent chain back from `end` and return the path from the
/// root of the chain (the Start) to `end`.
///
/// `parents` holds one flat index per grid cell, [`NO_PARENT`] for the
/// root. A chain longer than the number of cells can only be a cycle and
/// is reported as [`SearchError::ParentCycle`]. An index that falls outside
/// `parents` or the grid is reported as [`SearchError::ParentOutOfRange`].
pub fn reconstruct(grid: &Grid, parents: &[usize], end: usize) -> Result<Vec<Point>, SearchError> {
    let bound = parents.len();
    let mut path = Vec::new();
    let mut ci = end;
    loop {
        if ci >= bound || ci >= grid.len() {
            return Err(SearchError::ParentOutOfRange { index: ci, len: bound });
        }
        if path.len() >= bound {
            return Err(SearchError::ParentCycle { bound });
        }
        path.push(grid.point(ci));
        match parents[ci] {
            NO_PARENT => break,
            p => ci = p,
        }
    }
    path.reverse();
    Ok(path)
}
