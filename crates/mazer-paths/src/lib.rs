//! Maze solving with traversal traces.
//!
//! This crate solves [`mazer_core::Grid`] mazes with four classic searches
//! and records every expansion for step-by-step playback:
//!
//! - **BFS** shortest path by step count ([`Solver::bfs`])
//! - **DFS** depth-first exploration ([`Solver::dfs`])
//! - **Dijkstra** cheapest path by cell cost ([`Solver::dijkstra`])
//! - **A\*** cheapest path guided by Manhattan distance ([`Solver::astar`])
//!
//! All four run the same expansion loop ([`Solver::search`]), which is
//! parameterized by a [`Frontier`] discipline and a cost [`Strategy`].
//!
//! | Search | Frontier | Strategy |
//! |---|---|---|
//! | BFS | [`Fifo`] | [`Unweighted`] |
//! | DFS | [`Lifo`] | [`Unweighted`] |
//! | Dijkstra | [`MinQueue`] | [`Weighted`] |
//! | A* | [`MinQueue`] | [`Heuristic`] |

mod astar;
mod bfs;
mod cc;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;
mod reconstruct;
mod search;
mod solution;
mod solver;
mod strategy;
mod trace;
mod traits;

pub use distance::manhattan;
pub use frontier::{Fifo, Key, Lifo, MinQueue};
pub use reconstruct::reconstruct;
pub use solution::{Algorithm, Endpoint, SearchError, Solution};
pub use solver::{NO_PARENT, Solver, UNREACHABLE, astar, bfs, dfs, dijkstra, solve};
pub use strategy::{Heuristic, Unweighted, Weighted};
pub use trace::{Frames, Step, Trace};
pub use traits::{Frontier, Strategy};
