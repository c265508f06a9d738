//! Dijkstra minimal-weight paths.

use crate::error::GraphError;
use crate::graph::{Graph, NO_PREV, VertexId, rebuild_path};

impl Graph {
    /// Find a minimal-weight path from `start` to `end`.
    ///
    /// Standard Dijkstra with a linear scan for the minimum (O(V² + E),
    /// fine for graphs bounded by grid cell counts). Scanning ids in
    /// increasing order breaks distance ties toward the lowest vertex id,
    /// which keeps results deterministic.
    ///
    /// Returns the path including both endpoints, `Ok(Some([start]))` when
    /// `start == end`, or `Ok(None)` when `end` is unreachable.
    pub fn dijkstra_path(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> Result<Option<Vec<VertexId>>, GraphError> {
        Ok(self.dijkstra(start, end)?.map(|(path, _)| path))
    }

    /// Summed edge weight of the minimal-weight path from `start` to
    /// `end`, or `Ok(None)` when `end` is unreachable.
    pub fn dijkstra_distance(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> Result<Option<f64>, GraphError> {
        Ok(self.dijkstra(start, end)?.map(|(_, weight)| weight))
    }

    fn dijkstra(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> Result<Option<(Vec<VertexId>, f64)>, GraphError> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        let n = self.vertex_count();
        let mut dist = vec![f64::INFINITY; n];
        let mut settled = vec![false; n];
        let mut prev = vec![NO_PREV; n];
        dist[start] = 0.0;

        loop {
            // Select the unsettled vertex with minimum tentative distance;
            // strict `<` while scanning upward keeps the lowest id on ties.
            let mut current = NO_PREV;
            let mut best = f64::INFINITY;
            for v in 0..n {
                if !settled[v] && dist[v] < best {
                    best = dist[v];
                    current = v;
                }
            }
            if current == NO_PREV {
                // No unsettled reachable vertex remains.
                return Ok(None);
            }
            if current == end {
                return Ok(Some((rebuild_path(&prev, start, end), best)));
            }
            settled[current] = true;

            for edge in &self.adjacency[current] {
                if settled[edge.to] {
                    continue;
                }
                let tentative = best + edge.weight;
                if tentative < dist[edge.to] {
                    dist[edge.to] = tentative;
                    prev[edge.to] = current;
                }
            }
        }
    }
}
