//! The weighted directed [`Graph`] and its adjacency storage.

use log::debug;

use crate::error::GraphError;

/// Dense integer identifier of a graph vertex, in `[0, vertex_count)`.
pub type VertexId = usize;

/// A directed edge with a positive weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    #[inline]
    pub const fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// A weighted directed graph over dense vertex ids.
///
/// Each instance exclusively owns its adjacency storage; vertex count and
/// edges are fixed at construction and never change afterwards, so shared
/// references can be queried from multiple threads.
///
/// The order of each vertex's outgoing edges is the order they were
/// supplied in. BFS and DFS enqueue neighbors in exactly that order, which
/// determines which of several equally good paths is returned.
#[derive(Debug)]
pub struct Graph {
    pub(crate) adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Build a graph from a vertex count and an edge list.
    ///
    /// Fails with [`GraphError::InvalidEdge`] if any edge endpoint falls
    /// outside `0..vertex_count`; no graph is produced in that case.
    pub fn new(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); vertex_count];
        let mut edge_count = 0usize;
        for edge in edges {
            if edge.from >= vertex_count || edge.to >= vertex_count {
                return Err(GraphError::InvalidEdge {
                    from: edge.from,
                    to: edge.to,
                    vertex_count,
                });
            }
            adjacency[edge.from].push(edge);
            edge_count += 1;
        }
        debug!("graph built: {vertex_count} vertices, {edge_count} edges");
        Ok(Self { adjacency })
    }

    /// Number of vertices (valid ids are `0..vertex_count`).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The outgoing edges of `v`, in insertion order.
    pub fn edges_from(&self, v: VertexId) -> Result<&[Edge], GraphError> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    /// Whether some outgoing edge of `u` targets `v`. O(degree(u)).
    pub fn is_adjacent(&self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.adjacency[u].iter().any(|e| e.to == v))
    }

    #[inline]
    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if v < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.adjacency.len(),
            })
        }
    }
}

/// Sentinel for "no predecessor recorded".
pub(crate) const NO_PREV: VertexId = VertexId::MAX;

/// Walk the predecessor array from `end` back to `start` and return the
/// path in forward order, endpoints included.
///
/// Callers must only invoke this once `end` has actually been reached, so
/// the predecessor chain is guaranteed to terminate at `start`.
pub(crate) fn rebuild_path(prev: &[VertexId], start: VertexId, end: VertexId) -> Vec<VertexId> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = prev[current];
        path.push(current);
    }
    path.reverse();
    path
}
