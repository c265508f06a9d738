//! **cspace-core** — configuration-space primitives.
//!
//! Foundational types for planning over a robot's configuration space:
//! integer grid geometry ([`Point`]) and the occupancy grid itself
//! ([`CSpace`]), a 2-D matrix of free and blocked cells with `(0, 0)` at
//! the top-left.

pub mod cspace;
pub mod geom;

pub use cspace::{CSpace, CSpaceError, CellState};
pub use geom::Point;
