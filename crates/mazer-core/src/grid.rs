//! The [`Grid`] type: a rectangular maze of [`Cell`]s.
//!
//! A `Grid` owns its cells in a flat row-major buffer. Cloning produces an
//! independent copy, so a search can scribble markers on its own working
//! grid without touching the caller's.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions, filled with walls.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self::filled(rows, cols, Cell::Wall)
    }

    /// Create a grid of the given dimensions, filled with `cell`.
    pub fn filled(rows: i32, cols: i32, cell: Cell) -> Self {
        let bounds = Range::sized(rows, cols);
        Self {
            cells: vec![cell; bounds.len()],
            bounds,
        }
    }

    /// Parse a grid from its glyph representation.
    ///
    /// Rows are separated by newlines. Spaces and tabs inside a row are
    /// ignored, and blank lines around the grid are dropped. Every row must
    /// have the same number of cells.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut cols: Option<usize> = None;
        let mut rows = 0usize;

        for line in s.trim_matches(|c| c == '\n' || c == '\r').lines() {
            let start = cells.len();
            for (col, ch) in line.chars().filter(|c| *c != ' ' && *c != '\t' && *c != '\r').enumerate() {
                let cell = Cell::from_glyph(ch).ok_or(GridError::InvalidGlyph {
                    ch,
                    pos: Point::new(rows as i32, col as i32),
                })?;
                cells.push(cell);
            }
            let width = cells.len() - start;
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(GridError::Ragged {
                        row: rows,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = cols.unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            cells,
            bounds: Range::sized(rows as i32, cols as i32),
        })
    }

    /// The bounding range `[0, rows) × [0, cols)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.row as usize * self.cols() as usize + p.col as usize)
    }

    /// Point at a flat index.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let cols = self.cols() as usize;
        Point::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the grid using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Cell) {
        for (p, c) in self.bounds.iter().zip(self.cells.iter_mut()) {
            *c = f(p);
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, Cell) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// First point holding `cell`, in row-major order.
    pub fn find(&self, cell: Cell) -> Option<Point> {
        self.cells.iter().position(|&c| c == cell).map(|i| self.point(i))
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Append the passable 4-neighbours of `p` to `buf`, in the order
    /// down, up, right, left.
    pub fn passable_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.at(n).is_some_and(Cell::is_passable) {
                buf.push(n);
            }
        }
    }

    /// Smallest entering cost among passable non-terminal cells, `None` if
    /// there are none. Start and End are left out since they are free.
    pub fn min_cost(&self) -> Option<i32> {
        self.cells
            .iter()
            .filter(|c| !c.is_terminal())
            .filter_map(|c| c.cost())
            .min()
    }

    /// Total cost of walking `path`: the sum of entering costs of every cell
    /// after the first.
    ///
    /// Returns `None` if the path leaves the grid, crosses a wall, or takes a
    /// step that is not a single cardinal move.
    pub fn path_cost(&self, path: &[Point]) -> Option<i32> {
        let first = *path.first()?;
        self.at(first)?.cost()?;
        let mut total = 0;
        for w in path.windows(2) {
            if !w[0].is_adjacent(w[1]) {
                return None;
            }
            total += self.at(w[1])?.cost()?;
        }
        Some(total)
    }
}

impl fmt::Display for Grid {
    /// Rows joined by `\n`, one glyph per cell, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.cols().max(1) as usize;
        for (r, row) in self.cells.chunks(cols).enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for c in row {
                fmt::Write::write_char(f, c.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Grid::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// GridError
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows or no columns.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a cell glyph.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "grid contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
###S###
###0###
###0###
###0###
###0###
###0###
###E###";

    #[test]
    fn new_is_all_walls() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.count(Cell::Wall), 12);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        let p = Point::new(2, 3);
        g.set(p, Cell::Open(4));
        assert_eq!(g.at(p), Some(Cell::Open(4)));
        assert_eq!(g.at(Point::new(0, 0)), Some(Cell::Wall));
        assert_eq!(g.at(Point::new(10, 10)), None);
        g.set(Point::new(-1, 0), Cell::Start);
        assert_eq!(g.count(Cell::Start), 0);
    }

    #[test]
    fn index_and_point_agree() {
        let g = Grid::new(3, 5);
        for p in g.bounds() {
            assert_eq!(g.point(g.index(p).unwrap()), p);
        }
    }

    #[test]
    fn parse_and_render() {
        let g = Grid::parse(CORRIDOR).unwrap();
        assert_eq!(g.rows(), 7);
        assert_eq!(g.cols(), 7);
        assert_eq!(g.find(Cell::Start), Some(Point::new(0, 3)));
        assert_eq!(g.find(Cell::End), Some(Point::new(6, 3)));
        assert_eq!(g.to_string(), CORRIDOR);
    }

    #[test]
    fn parse_ignores_separating_spaces() {
        let g = Grid::parse("S 0 #\n# 0 E\n").unwrap();
        assert_eq!(g.to_string(), "S0#\n#0E");
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert_eq!(Grid::parse("\n\n"), Err(GridError::Empty));
    }

    #[test]
    fn parse_rejects_ragged() {
        let err = Grid::parse("S00\n0E").unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_glyph() {
        let err = Grid::parse("S0\n0Q").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidGlyph {
                ch: 'Q',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let g = Grid::parse("S0#\n0#E\n000").unwrap();
        let mut buf = Vec::new();
        g.passable_neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);
        buf.clear();
        g.passable_neighbors(Point::new(1, 2), &mut buf);
        assert_eq!(buf, vec![Point::new(2, 2)]);
    }

    #[test]
    fn path_cost_sums_entering_costs() {
        let g = Grid::parse("S25\n##4\n##E").unwrap();
        let path = [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
        ];
        assert_eq!(g.path_cost(&path), Some(2 + 5 + 4));
        assert_eq!(g.path_cost(&[Point::new(0, 0), Point::new(1, 1)]), None);
        assert_eq!(g.path_cost(&[Point::new(0, 0), Point::new(1, 0)]), None);
        assert_eq!(g.path_cost(&[]), None);
    }

    #[test]
    fn min_cost_ignores_walls_and_terminals() {
        let g = Grid::parse("#37\n5#9").unwrap();
        assert_eq!(g.min_cost(), Some(3));
        assert_eq!(Grid::new(2, 2).min_cost(), None);

        let g = Grid::parse("S4\n2E").unwrap();
        assert_eq!(g.min_cost(), Some(2));
        assert_eq!(Grid::parse("S#E").unwrap().min_cost(), None);
        assert_eq!(Grid::parse("SX*E").unwrap().min_cost(), Some(1));
    }

    #[test]
    fn fill_fn_and_count_fn() {
        let mut g = Grid::new(3, 3);
        g.fill_fn(|p| if p.row == p.col { Cell::Open(0) } else { Cell::Wall });
        assert_eq!(g.count(Cell::Open(0)), 3);
        assert_eq!(g.count_fn(|p, c| p.row == 0 && c == Cell::Wall), 2);
        g.fill(Cell::OPEN);
        assert_eq!(g.count(Cell::OPEN), 9);
    }
}
