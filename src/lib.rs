//! Shortest paths over small weighted undirected graphs.
//!
//! Build a [`Graph`] from weighted edge triples, then query it with
//! [`search::dijkstra`] or [`search::a_star`], or run both over the same
//! query with [`compare::compare`]. The library is pure computation:
//! no rendering, no I/O, no global state.

mod collections;

pub mod compare;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod search;

pub use compare::{Comparison, compare};
pub use errors::GraphError;
pub use graph::Graph;
pub use search::PathResult;
