use crate::collections::FxIndexMap;
use crate::errors::GraphError;

use std::{fmt::Debug, hash::Hash};

use num_traits::Zero;

/// Weighted undirected graph stored as a symmetric adjacency map.
///
/// Every edge (u, v, w) is stored in both directions with the same weight.
/// Adjacency rows keep insertion order, so neighbor iteration (and therefore
/// search tie-breaking) is deterministic for a fixed edge input order.
///
/// The graph is built once and then borrowed read-only by searches; it is
/// safe to share `&Graph` across concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct Graph<N, C> {
    adjacency: FxIndexMap<N, FxIndexMap<N, C>>,
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{
    pub fn new() -> Self {
        Self {
            adjacency: FxIndexMap::default(),
        }
    }

    /// Build a graph from a batch of (u, v, weight) triples
    /// Edges are inserted in the given order; see [`Graph::add_edge`] for the
    /// duplicate-edge policy.
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (N, N, C)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Insert an undirected weighted edge
    /// Re-adding the same (u, v) pair overwrites the previous weight
    /// (last-write-wins) rather than creating a parallel edge.
    pub fn add_edge(&mut self, u: N, v: N, weight: C) -> Result<(), GraphError> {
        if weight < Zero::zero() {
            return Err(GraphError::InvalidWeight(format!("{weight:?}")));
        }

        self.adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone(), weight);
        self.adjacency.entry(v).or_default().insert(u, weight);

        Ok(())
    }

    /// Iterate over the (neighbor, weight) pairs of a node
    /// Fails with `UnknownNode` if the node was never inserted via any edge.
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = (N, C)> + '_, GraphError> {
        let row = self
            .adjacency
            .get(node)
            .ok_or_else(|| GraphError::UnknownNode(format!("{node:?}")))?;

        Ok(row.iter().map(|(neighbor, weight)| (neighbor.clone(), *weight)))
    }

    /// True if the node was inserted via any edge
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        // every edge appears in two adjacency rows
        self.adjacency.values().map(FxIndexMap::len).sum::<usize>() / 2
    }

    /// Weight of the edge between u and v, if one exists
    pub fn edge_weight(&self, u: &N, v: &N) -> Option<C> {
        self.adjacency.get(u)?.get(v).copied()
    }

    /// Resolve a node sequence into its traversed edges with weights
    /// Intended for visualization collaborators that highlight a computed
    /// path on top of a rendered layout. The sequence must be a valid path
    /// in this graph: `UnknownNode` if a node is absent, `NoPath` if two
    /// consecutive nodes are not adjacent.
    pub fn path_edges(&self, path: &[N]) -> Result<Vec<(N, N, C)>, GraphError> {
        for node in path {
            if !self.contains(node) {
                return Err(GraphError::UnknownNode(format!("{node:?}")));
            }
        }

        path.windows(2)
            .map(|pair| {
                let weight = self
                    .edge_weight(&pair[0], &pair[1])
                    .ok_or(GraphError::NoPath)?;
                Ok((pair[0].clone(), pair[1].clone(), weight))
            })
            .collect()
    }
}
