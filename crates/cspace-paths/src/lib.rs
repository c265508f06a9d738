//! Path queries over configuration-space graphs.
//!
//! This crate turns a 2-D occupancy grid into a weighted directed graph and
//! answers path queries over it:
//!
//! - **BFS** fewest-hop paths ([`Graph::bfs_path`])
//! - **DFS** reachability paths ([`Graph::dfs_path`])
//! - **Dijkstra** minimal-weight paths ([`Graph::dijkstra_path`])
//! - **Grid adapter** coordinate-level queries ([`GridGraph::shortest_path`])
//!
//! [`Graph`] works on raw dense vertex ids and an explicit edge list;
//! [`GridGraph`] derives such a graph from a [`cspace_core::CSpace`], with
//! one vertex slot per grid cell (`id = x + y * width`), edges between free
//! 8-adjacent cells, weight 1 for straight moves and √2 for diagonal ones.
//!
//! Both structures are immutable once constructed: queries never mutate, so
//! a built graph can be shared freely across threads.
//!
//! Traversal order is deterministic. BFS and DFS visit neighbors in stored
//! adjacency order (for grid graphs, a fixed compass-offset sequence) and
//! Dijkstra breaks distance ties toward the lowest vertex id, so repeated
//! queries always return the same path.

mod bfs;
mod dfs;
mod dijkstra;
mod error;
mod graph;
mod grid_graph;

pub use error::GraphError;
pub use graph::{Edge, Graph, VertexId};
pub use grid_graph::{GridGraph, SQRT_2};
