pub mod a_star;
pub mod dijkstra;
mod frontier;
mod shortest_path;

use crate::collections::FxIndexMap;

/// Map of discovered nodes built during a search.
/// N: node on the graph
/// C: best known cost of reaching the node from the start
/// The tuple holds (parent_index, cost) where parent_index is the index of
/// the predecessor node in this map; the start node uses usize::MAX to mark
/// that it has no predecessor.
pub(crate) type SearchNodeMap<N, C> = FxIndexMap<N, (usize, C)>;

/// An ordered node sequence from start to goal plus its total traversal cost.
/// Produced by a search call, immutable, holds no reference back to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<N, C> {
    /// Nodes from start to goal; consecutive nodes share an edge.
    /// A start == goal query yields the single-element sequence.
    pub path: Vec<N>,
    /// Sum of traversed edge weights; zero for a single-node path.
    pub cost: C,
}
