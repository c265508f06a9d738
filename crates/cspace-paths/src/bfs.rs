//! Breadth-first fewest-hop paths.

use std::collections::VecDeque;

use crate::error::GraphError;
use crate::graph::{Graph, NO_PREV, VertexId, rebuild_path};

impl Graph {
    /// Find a path from `start` to `end` by breadth-first search.
    ///
    /// The FIFO frontier explores vertices in increasing hop count, so the
    /// returned path has the fewest vertices of any start-to-end path.
    /// Neighbors are enqueued in stored adjacency order and marked visited
    /// at enqueue time; among equal-length paths, the one whose vertices
    /// were inserted first wins.
    ///
    /// Returns the path including both endpoints, `Ok(Some([start]))` when
    /// `start == end`, or `Ok(None)` when `end` is unreachable.
    pub fn bfs_path(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> Result<Option<Vec<VertexId>>, GraphError> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut prev = vec![NO_PREV; n];
        let mut queue: VecDeque<VertexId> = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                return Ok(Some(rebuild_path(&prev, start, end)));
            }
            for edge in &self.adjacency[current] {
                if !visited[edge.to] {
                    visited[edge.to] = true;
                    prev[edge.to] = current;
                    queue.push_back(edge.to);
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;

    fn diamond() -> Graph {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3, undirected pairs.
        let pairs = [(0, 1), (0, 2), (1, 3), (2, 3)];
        let edges = pairs
            .iter()
            .flat_map(|&(a, b)| [Edge::new(a, b, 1.0), Edge::new(b, a, 1.0)]);
        Graph::new(4, edges).unwrap()
    }

    #[test]
    fn finds_fewest_hop_path() {
        let g = diamond();
        // Both 0-1-3 and 0-2-3 have two hops; 1 was enqueued before 2.
        assert_eq!(g.bfs_path(0, 3).unwrap(), Some(vec![0, 1, 3]));
    }

    #[test]
    fn start_equals_end() {
        let g = diamond();
        assert_eq!(g.bfs_path(2, 2).unwrap(), Some(vec![2]));
    }

    #[test]
    fn unreachable_is_none() {
        let g = Graph::new(3, [Edge::new(0, 1, 1.0), Edge::new(1, 0, 1.0)]).unwrap();
        assert_eq!(g.bfs_path(0, 2).unwrap(), None);
    }

    #[test]
    fn shortcut_beats_long_chain() {
        // 0-1-2-3 chain plus a direct 0-3 edge.
        let g = Graph::new(
            4,
            [
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 1.0),
                Edge::new(2, 3, 1.0),
                Edge::new(0, 3, 1.0),
            ],
        )
        .unwrap();
        assert_eq!(g.bfs_path(0, 3).unwrap(), Some(vec![0, 3]));
    }

    #[test]
    fn invalid_vertex() {
        let g = diamond();
        assert!(matches!(
            g.bfs_path(0, 7),
            Err(GraphError::InvalidVertex { vertex: 7, .. })
        ));
    }

    #[test]
    fn idempotent() {
        let g = diamond();
        assert_eq!(g.bfs_path(0, 3).unwrap(), g.bfs_path(0, 3).unwrap());
    }
}
