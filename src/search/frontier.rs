use super::shortest_path::reconstruct;
use super::{PathResult, SearchNodeMap};
use crate::errors::GraphError;
use crate::graph::Graph;

use std::{cmp::Ordering, collections::BinaryHeap, fmt::Debug, hash::Hash};

use indexmap::map::Entry::{Occupied, Vacant};
use log::trace;
use num_traits::Zero;

/// Entry on the frontier
/// - index identifies the node in the search node map
/// - cost is the confirmed cost from the start when this entry was pushed
/// - priority orders the heap: cost alone for Dijkstra, cost + heuristic
///   for A*
#[derive(Debug)]
struct FrontierNode<C> {
    index: usize,
    cost: C,
    priority: C,
}

// BinaryHeap pops largest first; reverse the comparison to make it a
// min-priority frontier
impl<C: Ord> Ord for FrontierNode<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}
impl<C: Ord> PartialOrd for FrontierNode<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for FrontierNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}
impl<C: PartialEq> Eq for FrontierNode<C> {}

/// Shared frontier-search skeleton behind both Dijkstra and A*
///
/// Repeatedly extracts the frontier entry with minimum priority, relaxes its
/// neighbors, and stops as soon as the goal is extracted. The two algorithms
/// differ only in the priority term: `heuristic` returns the estimated
/// remaining cost for a node (identically zero for Dijkstra).
///
/// Ties on equal priority resolve by node-map insertion order, which follows
/// the graph's edge input order; no other ordering is guaranteed.
pub(crate) fn search<N, C, H>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
    heuristic: H,
) -> Result<PathResult<N, C>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
    H: Fn(&N) -> C,
{
    if !graph.contains(start) {
        return Err(GraphError::UnknownNode(format!("{start:?}")));
    }
    if !graph.contains(goal) {
        return Err(GraphError::UnknownNode(format!("{goal:?}")));
    }

    // Nodes to expand, cheapest (by priority) first
    let mut frontier: BinaryHeap<FrontierNode<C>> = BinaryHeap::new();

    // Discovered nodes with their best known cost and predecessor
    // usize::MAX marks the start node's missing predecessor
    let mut node_map: SearchNodeMap<N, C> = SearchNodeMap::default();

    let start_index = node_map
        .insert_full(start.clone(), (usize::MAX, Zero::zero()))
        .0;
    frontier.push(FrontierNode {
        index: start_index,
        cost: Zero::zero(),
        priority: heuristic(start),
    });

    while let Some(FrontierNode { index, cost, .. }) = frontier.pop() {
        // current best cost for this node
        let (node, &(_, best)) = node_map
            .get_index(index)
            .expect("frontier indices always come from the node map");

        // A cheaper path to this node was relaxed after this entry was
        // pushed; the entry is stale
        if cost > best {
            continue;
        }

        if node == goal {
            trace!("goal extracted after settling {} nodes", node_map.len());
            let path = reconstruct(&node_map, index)?;
            return Ok(PathResult { path, cost: best });
        }

        for (neighbor, edge_cost) in graph.neighbors(node)? {
            // confirmed cost through the current node, heuristic excluded
            let new_cost = edge_cost + best;
            let h_cost = heuristic(&neighbor);

            let neighbor_index;
            match node_map.entry(neighbor) {
                Vacant(e) => {
                    // first time seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // found a better path to this neighbor
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        // the existing path is better, do nothing
                        continue;
                    }
                }
            }

            // only re-enter the frontier on an improved path
            frontier.push(FrontierNode {
                index: neighbor_index,
                cost: new_cost,
                priority: new_cost + h_cost,
            });
        }
    }

    // frontier drained without extracting the goal
    Err(GraphError::NoPath)
}
