use std::fmt;
use std::str::FromStr;

use mazer_core::{Cell, Point};

/// The four search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Outcome of one solve: the traversal trace, the path found and a status
/// message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub algorithm: Algorithm,
    /// One serialized grid per expanded cell.
    pub trace: Vec<String>,
    /// Start to End inclusive, empty when the End was not reached.
    pub path: Vec<Point>,
    pub start: Option<Point>,
    pub end: Option<Point>,
    /// Cumulative cost of `path`: edge count for the unweighted searches,
    /// summed cell costs for the weighted ones.
    pub cost: Option<i32>,
    pub message: String,
}

impl Solution {
    pub(crate) fn no_start(algorithm: Algorithm, end: Option<Point>) -> Self {
        Self {
            algorithm,
            trace: Vec::new(),
            path: Vec::new(),
            start: None,
            end,
            cost: None,
            message: "maze doesn't have a valid starting point".to_string(),
        }
    }

    /// Whether the End was reached.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Which endpoint an A* validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// Errors that can occur when solving a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// An explicit endpoint lies outside the grid.
    OutOfBounds { which: Endpoint, pos: Point },
    /// Start and end are the same cell.
    Collision(Point),
    /// An explicit endpoint does not hold the matching Start/End cell.
    Unmarked {
        which: Endpoint,
        pos: Point,
        found: Cell,
    },
    /// The parent chain did not terminate within the grid's cell count.
    ParentCycle { bound: usize },
    /// A parent index points outside the parent map or the grid.
    ParentOutOfRange { index: usize, len: usize },
    /// Name that matches no strategy.
    UnknownAlgorithm(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { which, pos } => {
                write!(f, "{which} {pos} lies outside the maze")
            }
            Self::Collision(pos) => write!(f, "start and end are both {pos}"),
            Self::Unmarked { which, pos, found } => {
                write!(f, "{which} {pos} holds \u{201c}{found}\u{201d}")
            }
            Self::ParentCycle { bound } => {
                write!(f, "parent chain exceeds {bound} cells")
            }
            Self::ParentOutOfRange { index, len } => {
                write!(f, "parent index {index} outside a map of {len} cells")
            }
            Self::UnknownAlgorithm(s) => write!(
                f,
                "unknown algorithm \u{201c}{s}\u{201d}, expected bfs, dfs, dijkstra or astar"
            ),
        }
    }
}

impl std::error::Error for SearchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
        }
        assert_eq!("A*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert!(matches!(
            "greedy".parse::<Algorithm>(),
            Err(SearchError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn no_start_is_empty() {
        let s = Solution::no_start(Algorithm::Bfs, None);
        assert!(!s.found());
        assert_eq!(s.steps(), 0);
        assert!(s.trace.is_empty());
    }
}
