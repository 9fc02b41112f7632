use super::{PathResult, frontier};
use crate::errors::GraphError;
use crate::graph::Graph;

use std::{fmt::Debug, hash::Hash};

use num_traits::Zero;

/// Identify the least-cost path using Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Uniform-cost search over the frontier skeleton: with a zero heuristic the
/// frontier is ordered by confirmed cost alone. Requires non-negative edge
/// weights, which [`Graph`](crate::graph::Graph) enforces at construction.
///
/// Fails with `UnknownNode` if start or goal was never added to the graph,
/// and `NoPath` if the goal is unreachable from the start. A start == goal
/// query returns the single-node path with cost zero.
pub fn shortest_path<N, C>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
) -> Result<PathResult<N, C>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    frontier::search(graph, start, goal, |_| C::zero())
}
