//! Maze generation for mazer: carved, weighted and open mazes in three
//! size tiers, driven by a seedable random source.

pub mod config;
pub mod mapgen;
pub mod size;

pub use config::MazeConfig;
pub use mapgen::{MazeGen, MazeKind};
pub use size::{MazeSize, SizeError};
