use std::fmt;

use cspace_core::Point;

use crate::graph::VertexId;

/// Errors from graph construction and path queries.
///
/// Absence of a path is not an error; path queries report it as `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint lies outside the declared vertex range.
    InvalidEdge {
        from: VertexId,
        to: VertexId,
        vertex_count: usize,
    },
    /// A query referenced a vertex id outside the graph.
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },
    /// A query referenced an out-of-bounds or blocked grid coordinate.
    InvalidCoordinate(Point),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEdge {
                from,
                to,
                vertex_count,
            } => write!(
                f,
                "edge {from} -> {to} references a vertex outside 0..{vertex_count}"
            ),
            Self::InvalidVertex {
                vertex,
                vertex_count,
            } => write!(f, "vertex {vertex} is outside 0..{vertex_count}"),
            Self::InvalidCoordinate(p) => {
                write!(f, "coordinate {p} is out of bounds or blocked")
            }
        }
    }
}

impl std::error::Error for GraphError {}
