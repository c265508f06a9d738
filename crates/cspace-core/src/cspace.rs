//! The [`CSpace`] occupancy grid.
//!
//! A configuration space describes where a robot may safely travel: each
//! cell of a rectangular grid is either free or blocked. Cells are stored
//! row-major with `(0, 0)` at the top-left.

use std::fmt;

use crate::geom::Point;

/// State of a single configuration-space cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// The robot can occupy this cell.
    #[default]
    Free,
    /// The robot cannot safely pass through this cell.
    Blocked,
}

/// Errors that can occur when building a [`CSpace`] from matrix input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CSpaceError {
    /// Rows have inconsistent widths.
    InconsistentSize {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for CSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize { row, expected, got } => write!(
                f,
                "cspace: row {row} has width {got}, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for CSpaceError {}

/// A rectangular occupancy grid.
///
/// The grid may be edited with [`block`](CSpace::block) and
/// [`free`](CSpace::free) while being set up; once handed to a graph
/// builder it is treated as immutable input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSpace {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
}

impl CSpace {
    /// Create a new configuration space of the given dimensions with every
    /// cell free. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![CellState::Free; (w * h) as usize],
            width: w,
            height: h,
        }
    }

    /// Build a configuration space from a matrix of occupancy values,
    /// one inner slice per row: `0` means free, any other value blocked.
    ///
    /// Fails if the rows do not all have the same width.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, CSpaceError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(CSpaceError::InconsistentSize {
                    row: y,
                    expected: width,
                    got: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| {
                if v == 0 {
                    CellState::Free
                } else {
                    CellState::Blocked
                }
            }));
        }
        Ok(Self {
            cells,
            width: width as i32,
            height: height as i32,
        })
    }

    /// Width of the grid (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    /// The state of the cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is an in-bounds free cell.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.at(p) == Some(CellState::Free)
    }

    /// Mark the cell at `p` as blocked. No-op if `p` is out of bounds.
    pub fn block(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.cells[i] = CellState::Blocked;
        }
    }

    /// Mark the cell at `p` as free. No-op if `p` is out of bounds.
    pub fn free(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.cells[i] = CellState::Free;
        }
    }
}

impl fmt::Display for CSpace {
    /// Render the grid as text: `.` for free cells, `#` for blocked ones,
    /// one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = if self.is_free(Point::new(x, y)) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_free() {
        let cs = CSpace::new(3, 2);
        assert_eq!(cs.width(), 3);
        assert_eq!(cs.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert!(cs.is_free(Point::new(x, y)));
            }
        }
    }

    #[test]
    fn from_rows_reads_occupancy() {
        let cs = CSpace::from_rows(&[[0, 1], [1, 0]]).unwrap();
        assert!(cs.is_free(Point::new(0, 0)));
        assert!(!cs.is_free(Point::new(1, 0)));
        assert!(!cs.is_free(Point::new(0, 1)));
        assert!(cs.is_free(Point::new(1, 1)));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows: [&[i32]; 2] = [&[0, 0, 0], &[0, 0]];
        let err = CSpace::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            CSpaceError::InconsistentSize {
                row: 1,
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn block_and_free() {
        let mut cs = CSpace::new(2, 2);
        cs.block(Point::new(1, 1));
        assert_eq!(cs.at(Point::new(1, 1)), Some(CellState::Blocked));
        cs.free(Point::new(1, 1));
        assert!(cs.is_free(Point::new(1, 1)));
        // Out-of-bounds edits are ignored.
        cs.block(Point::new(5, 5));
        assert_eq!(cs.at(Point::new(5, 5)), None);
    }

    #[test]
    fn bounds() {
        let cs = CSpace::new(2, 3);
        assert!(cs.contains(Point::new(1, 2)));
        assert!(!cs.contains(Point::new(2, 2)));
        assert!(!cs.contains(Point::new(-1, 0)));
        assert!(!cs.is_free(Point::new(0, 3)));
    }

    #[test]
    fn render() {
        let cs = CSpace::from_rows(&[[0, 1], [0, 0]]).unwrap();
        assert_eq!(cs.to_string(), ".#\n..");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_state_round_trip() {
        let json = serde_json::to_string(&CellState::Blocked).unwrap();
        let back: CellState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CellState::Blocked);
    }
}
