//! **mazer-core**: the maze grid data model.
//!
//! This crate provides the foundational types shared by the *mazer*
//! generators and solvers: geometry primitives, maze cells, and the owned
//! rectangular [`Grid`] with its text serialization.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, MAX_COST};
pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
