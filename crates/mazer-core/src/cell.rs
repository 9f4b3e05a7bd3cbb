//! The [`Cell`] type: the state of one maze square.

use std::fmt;

/// Highest cost an open cell can carry (one decimal digit).
pub const MAX_COST: u8 = 9;

/// One square of a maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Impassable.
    Wall,
    /// Traversable, entering it costs the given amount (0–9).
    Open(u8),
    Start,
    End,
    /// Marker left on a cell once the search expanded it.
    Visited,
    /// Marker left on a cell lying on the reconstructed path.
    Path,
}

impl Cell {
    /// An open cell with the default cost of 1.
    pub const OPEN: Cell = Cell::Open(1);

    /// Glyph used when serializing a grid.
    pub const fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open(c) => (b'0' + if c > MAX_COST { MAX_COST } else { c }) as char,
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Visited => 'X',
            Cell::Path => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph). `.` is read as a plain open cell.
    pub fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            '#' => Some(Cell::Wall),
            '0'..='9' => Some(Cell::Open(ch as u8 - b'0')),
            '.' => Some(Cell::OPEN),
            'S' => Some(Cell::Start),
            'E' => Some(Cell::End),
            'X' => Some(Cell::Visited),
            '*' => Some(Cell::Path),
            _ => None,
        }
    }

    /// Whether a search may step onto this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// Whether this is the Start or End cell.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Cell::Start | Cell::End)
    }

    /// Cost of entering this cell, `None` for walls.
    ///
    /// Numeric cells cost their digit, the non-numeric markers cost 1 and
    /// the terminals cost nothing.
    #[inline]
    pub const fn cost(self) -> Option<i32> {
        match self {
            Cell::Wall => None,
            Cell::Open(c) => Some(c as i32),
            Cell::Visited | Cell::Path => Some(1),
            Cell::Start | Cell::End => Some(0),
        }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Cell::Wall
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        let cells = [
            Cell::Wall,
            Cell::Open(0),
            Cell::Open(7),
            Cell::Start,
            Cell::End,
            Cell::Visited,
            Cell::Path,
        ];
        for c in cells {
            assert_eq!(Cell::from_glyph(c.glyph()), Some(c));
        }
    }

    #[test]
    fn dot_is_default_open() {
        assert_eq!(Cell::from_glyph('.'), Some(Cell::Open(1)));
        assert_eq!(Cell::from_glyph('?'), None);
    }

    #[test]
    fn costs() {
        assert_eq!(Cell::Wall.cost(), None);
        assert_eq!(Cell::Open(0).cost(), Some(0));
        assert_eq!(Cell::Open(9).cost(), Some(9));
        assert_eq!(Cell::Visited.cost(), Some(1));
        assert_eq!(Cell::End.cost(), Some(0));
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Start.is_terminal());
    }
}
