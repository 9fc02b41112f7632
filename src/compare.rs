use crate::errors::GraphError;
use crate::graph::Graph;
use crate::search::{PathResult, a_star, dijkstra};

use std::{fmt::Debug, hash::Hash};

use log::debug;
use num_traits::Zero;

/// Both search results for one (start, goal) query, side by side.
/// Pure data for external reporting; the library never prints or renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<N, C> {
    pub dijkstra: PathResult<N, C>,
    pub a_star: PathResult<N, C>,
}

impl<N, C: PartialEq> Comparison<N, C> {
    /// True when both algorithms agree on the total cost.
    /// Always true for an admissible heuristic; a mismatch is a strong sign
    /// the supplied heuristic overestimates.
    pub fn costs_agree(&self) -> bool {
        self.dijkstra.cost == self.a_star.cost
    }
}

/// Run Dijkstra and A* over the same query and return both results
///
/// Pure composition of the two searches; both borrow the graph read-only and
/// see the identical snapshot. Fails with the first error either search
/// reports (`UnknownNode`, `NoPath`).
pub fn compare<N, C, H>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
    heuristic: H,
) -> Result<Comparison<N, C>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
    H: Fn(&N, &N) -> C,
{
    let dijkstra = dijkstra::shortest_path(graph, start, goal)?;
    let a_star = a_star::shortest_path(graph, start, goal, heuristic)?;

    debug!(
        "compare {start:?} -> {goal:?}: dijkstra cost {:?} ({} nodes), a* cost {:?} ({} nodes)",
        dijkstra.cost,
        dijkstra.path.len(),
        a_star.cost,
        a_star.path.len(),
    );

    Ok(Comparison { dijkstra, a_star })
}
