//! Occupancy-grid to graph adapter.

use cspace_core::{CSpace, Point};
use log::debug;

use crate::error::GraphError;
use crate::graph::{Edge, Graph, VertexId};

/// Weight of a diagonal move between 8-adjacent cells.
pub const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// The eight compass offsets, in the fixed order edges are emitted for
/// each cell. BFS/DFS tie-breaking depends on this sequence.
const COMPASS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A weighted graph derived from a [`CSpace`] occupancy grid.
///
/// Every grid cell reserves a vertex slot (`id = x + y * width`, so the
/// vertex count is `width * height`); only free cells receive edges. Two
/// free 8-adjacent cells are connected by a directed edge in each
/// direction, weight 1 for straight moves and √2 for diagonal ones.
pub struct GridGraph {
    cspace: CSpace,
    graph: Graph,
}

impl GridGraph {
    /// Build the graph for an occupancy grid. The grid is consumed and
    /// kept for coordinate validation; it is not modified afterwards.
    pub fn new(cspace: CSpace) -> Self {
        let width = cspace.width();
        let height = cspace.height();
        let mut edges = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let p = Point::new(x, y);
                if !cspace.is_free(p) {
                    continue;
                }
                for (dx, dy) in COMPASS {
                    let neighbor = p.shift(dx, dy);
                    // Covers both out-of-bounds and blocked neighbors.
                    if !cspace.is_free(neighbor) {
                        continue;
                    }
                    let weight = if dx == 0 || dy == 0 { 1.0 } else { SQRT_2 };
                    edges.push(Edge::new(
                        (p.x + p.y * width) as VertexId,
                        (neighbor.x + neighbor.y * width) as VertexId,
                        weight,
                    ));
                }
            }
        }
        debug!(
            "grid graph: {width}x{height} cspace, {} edges",
            edges.len()
        );
        let graph = Graph::new((width * height) as usize, edges)
            .expect("grid edges are in range by construction");
        Self { cspace, graph }
    }

    /// The occupancy grid this graph was built from.
    #[inline]
    pub fn cspace(&self) -> &CSpace {
        &self.cspace
    }

    /// The underlying vertex-id graph, for raw [`Graph`] queries.
    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Vertex id of `p` (`x + y * width`), or `None` if out of bounds.
    /// Blocked cells keep their id slot; they simply have no edges.
    pub fn vertex_id(&self, p: Point) -> Option<VertexId> {
        self.cspace
            .contains(p)
            .then(|| (p.x + p.y * self.cspace.width()) as VertexId)
    }

    /// Coordinate of vertex `id` (`(id % width, id / width)`), or `None`
    /// if `id` is outside the graph.
    pub fn point(&self, id: VertexId) -> Option<Point> {
        (id < self.graph.vertex_count()).then(|| self.point_of(id))
    }

    #[inline]
    fn point_of(&self, id: VertexId) -> Point {
        let w = self.cspace.width();
        Point::new(id as i32 % w, id as i32 / w)
    }

    /// Map a query coordinate to its vertex id, rejecting out-of-bounds
    /// and blocked cells.
    fn checked_vertex(&self, p: Point) -> Result<VertexId, GraphError> {
        if !self.cspace.is_free(p) {
            return Err(GraphError::InvalidCoordinate(p));
        }
        Ok((p.x + p.y * self.cspace.width()) as VertexId)
    }

    fn to_points(&self, ids: Vec<VertexId>) -> Vec<Point> {
        ids.into_iter().map(|id| self.point_of(id)).collect()
    }

    /// Minimal-weight path between two free cells, by Dijkstra.
    ///
    /// Returns the coordinate path including both endpoints, `Ok(None)` if
    /// the cells are not connected, or [`GraphError::InvalidCoordinate`]
    /// if either coordinate is out of bounds or blocked.
    pub fn shortest_path(
        &self,
        start: Point,
        end: Point,
    ) -> Result<Option<Vec<Point>>, GraphError> {
        let s = self.checked_vertex(start)?;
        let e = self.checked_vertex(end)?;
        Ok(self.graph.dijkstra_path(s, e)?.map(|ids| self.to_points(ids)))
    }

    /// Fewest-cell path between two free cells, by BFS. Same contract as
    /// [`shortest_path`](Self::shortest_path).
    pub fn bfs_path(&self, start: Point, end: Point) -> Result<Option<Vec<Point>>, GraphError> {
        let s = self.checked_vertex(start)?;
        let e = self.checked_vertex(end)?;
        Ok(self.graph.bfs_path(s, e)?.map(|ids| self.to_points(ids)))
    }

    /// Reachability path between two free cells, by DFS. Same contract as
    /// [`shortest_path`](Self::shortest_path).
    pub fn dfs_path(&self, start: Point, end: Point) -> Result<Option<Vec<Point>>, GraphError> {
        let s = self.checked_vertex(start)?;
        let e = self.checked_vertex(end)?;
        Ok(self.graph.dfs_path(s, e)?.map(|ids| self.to_points(ids)))
    }

    /// Whether two free cells are directly connected by an edge.
    pub fn is_adjacent(&self, a: Point, b: Point) -> Result<bool, GraphError> {
        let a = self.checked_vertex(a)?;
        let b = self.checked_vertex(b)?;
        self.graph.is_adjacent(a, b)
    }

    /// Total edge weight of a path of consecutive 8-adjacent coordinates,
    /// as returned by the path queries.
    pub fn path_weight(path: &[Point]) -> f64 {
        path.windows(2)
            .map(|w| {
                let d = w[1] - w[0];
                if d.x == 0 || d.y == 0 { 1.0 } else { SQRT_2 }
            })
            .sum()
    }
}
