//! Depth-first reachability paths.

use crate::error::GraphError;
use crate::graph::{Graph, NO_PREV, VertexId, rebuild_path};

impl Graph {
    /// Find a path from `start` to `end` by depth-first search.
    ///
    /// The LIFO frontier pushes neighbors in stored adjacency order and
    /// marks them visited at push time, so they are explored in *reverse*
    /// of that order. This is the inherent behavior of stack-based DFS and
    /// part of the contract; the returned path demonstrates reachability
    /// but is generally not the shortest.
    ///
    /// Returns the path including both endpoints, `Ok(Some([start]))` when
    /// `start == end`, or `Ok(None)` when `end` is unreachable.
    pub fn dfs_path(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> Result<Option<Vec<VertexId>>, GraphError> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut prev = vec![NO_PREV; n];
        let mut stack: Vec<VertexId> = Vec::new();

        visited[start] = true;
        stack.push(start);

        while let Some(current) = stack.pop() {
            if current == end {
                return Ok(Some(rebuild_path(&prev, start, end)));
            }
            for edge in &self.adjacency[current] {
                if !visited[edge.to] {
                    visited[edge.to] = true;
                    prev[edge.to] = current;
                    stack.push(edge.to);
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
        let pairs = [(0, 1), (0, 2), (1, 3), (2, 3)];
        let edges = pairs
            .iter()
            .flat_map(|&(a, b)| [Edge::new(a, b, 1.0), Edge::new(b, a, 1.0)]);
        Graph::new(4, edges).unwrap()
    }

    #[test]
    fn explores_last_pushed_neighbor_first() {
        let g = diamond();
        // From 0 the stack holds [1, 2]; 2 pops first and leads to 3.
        assert_eq!(g.dfs_path(0, 3).unwrap(), Some(vec![0, 2, 3]));
    }

    #[test]
    fn start_equals_end() {
        let g = diamond();
        assert_eq!(g.dfs_path(1, 1).unwrap(), Some(vec![1]));
    }

    #[test]
    fn unreachable_is_none() {
        let g = Graph::new(4, [Edge::new(0, 1, 1.0)]).unwrap();
        assert_eq!(g.dfs_path(0, 3).unwrap(), None);
    }

    #[test]
    fn follows_a_chain() {
        let g = Graph::new(
            4,
            [
                Edge::new(0, 1, 1.0),
                Edge::new(1, 2, 1.0),
                Edge::new(2, 3, 1.0),
            ],
        )
        .unwrap();
        assert_eq!(g.dfs_path(0, 3).unwrap(), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn invalid_vertex() {
        let g = diamond();
        assert!(matches!(
            g.dfs_path(9, 0),
            Err(GraphError::InvalidVertex { vertex: 9, .. })
        ));
    }
}
