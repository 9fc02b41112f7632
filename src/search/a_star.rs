use super::{PathResult, frontier};
use crate::errors::GraphError;
use crate::graph::Graph;

use std::{fmt::Debug, hash::Hash};

use num_traits::Zero;

/// Identify the least-cost path using the A* algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Same frontier skeleton as [Dijkstra](crate::search::dijkstra), but the
/// frontier is ordered by confirmed cost plus `heuristic(node, goal)`, an
/// estimate of the remaining cost. Preconditions on the heuristic:
/// 1. It never returns a negative estimate.
/// 2. It is admissible: it never overestimates the true remaining cost.
///    Typically a straight-line distance between node coordinates.
///
/// Admissibility is not checked at runtime. With a non-admissible heuristic
/// the returned path is still a valid path, but its cost may exceed the true
/// minimum.
///
/// Failure modes match Dijkstra: `UnknownNode` for an absent start or goal,
/// `NoPath` when the goal is unreachable.
pub fn shortest_path<N, C, H>(
    graph: &Graph<N, C>,
    start: &N,
    goal: &N,
    heuristic: H,
) -> Result<PathResult<N, C>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
    H: Fn(&N, &N) -> C,
{
    frontier::search(graph, start, goal, |node| heuristic(node, goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::euclidean;
    use crate::search::dijkstra;
    use ordered_float::OrderedFloat;
    use std::collections::HashMap;

    fn city_graph() -> Graph<&'static str, OrderedFloat<f64>> {
        let edges = [
            ("A", "B", 5.0),
            ("A", "C", 2.0),
            ("B", "C", 8.0),
            ("B", "D", 7.0),
            ("C", "D", 1.0),
            ("C", "E", 3.0),
            ("D", "E", 2.0),
            ("D", "F", 4.0),
            ("E", "F", 6.0),
        ];
        Graph::from_edges(edges.into_iter().map(|(u, v, w)| (u, v, OrderedFloat(w)))).unwrap()
    }

    fn coordinates() -> HashMap<&'static str, (f64, f64)> {
        HashMap::from([
            ("A", (0.0, 0.0)),
            ("B", (5.0, 0.0)),
            ("C", (3.0, 2.0)),
            ("D", (7.0, 2.0)),
            ("E", (4.0, 4.0)),
            ("F", (6.0, 5.0)),
        ])
    }

    /// Straight-line distance scaled so it never exceeds the true remaining
    /// cost on the city graph (the layout coordinates are not to scale with
    /// the edge weights, so the raw distance would overestimate)
    fn admissible_heuristic(
        coords: HashMap<&'static str, (f64, f64)>,
    ) -> impl Fn(&&'static str, &&'static str) -> OrderedFloat<f64> {
        move |node, goal| {
            let (x1, y1) = coords[node];
            let (x2, y2) = coords[goal];
            OrderedFloat(0.1 * euclidean(x1, y1, x2, y2))
        }
    }

    #[test]
    fn test_city_graph_a_to_f() {
        let graph = city_graph();
        let heuristic = admissible_heuristic(coordinates());

        let result = shortest_path(&graph, &"A", &"F", heuristic).unwrap();
        assert_eq!(result.path, vec!["A", "C", "D", "F"]);
        assert_eq!(result.cost, OrderedFloat(7.0));
    }

    #[test]
    fn test_zero_heuristic_behaves_like_dijkstra() {
        let graph = city_graph();
        let zero = |_: &&str, _: &&str| OrderedFloat(0.0);

        for &goal in &["B", "C", "D", "E", "F"] {
            let a_star = shortest_path(&graph, &"A", &goal, zero).unwrap();
            let dijkstra = dijkstra::shortest_path(&graph, &"A", &goal).unwrap();
            assert_eq!(a_star.cost, dijkstra.cost);
            assert_eq!(a_star.path, dijkstra.path);
        }
    }

    #[test]
    fn test_admissible_heuristic_preserves_optimality() {
        let graph = city_graph();
        let coords = coordinates();

        for &start in &["A", "B", "C", "D", "E", "F"] {
            for &goal in &["A", "B", "C", "D", "E", "F"] {
                let heuristic = admissible_heuristic(coords.clone());
                let a_star = shortest_path(&graph, &start, &goal, heuristic).unwrap();
                let dijkstra = dijkstra::shortest_path(&graph, &start, &goal).unwrap();
                assert_eq!(
                    a_star.cost, dijkstra.cost,
                    "optimality lost for {start} -> {goal}"
                );
            }
        }
    }

    #[test]
    fn test_non_admissible_heuristic_never_beats_dijkstra() {
        let graph = city_graph();
        let coords = coordinates();

        // grossly inflated estimate; may misguide the search but any path it
        // returns still weighs at least the true minimum
        let inflated = move |node: &&'static str, goal: &&'static str| {
            let (x1, y1) = coords[node];
            let (x2, y2) = coords[goal];
            OrderedFloat(100.0 * euclidean(x1, y1, x2, y2))
        };

        let a_star = shortest_path(&graph, &"A", &"F", inflated).unwrap();
        let dijkstra = dijkstra::shortest_path(&graph, &"A", &"F").unwrap();
        assert!(a_star.cost >= dijkstra.cost);
    }

    #[test]
    fn test_heuristic_guides_expansion() {
        // grid-like graph where the heuristic prefers the straight route
        // A(0,0) - B(1,0) - D(2,0) over the detour through C(0,1)
        let edges = [
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("B", "D", 1.0),
            ("C", "D", 2.0),
        ];
        let graph: Graph<&str, OrderedFloat<f64>> =
            Graph::from_edges(edges.into_iter().map(|(u, v, w)| (u, v, OrderedFloat(w))))
                .unwrap();

        let coords = HashMap::from([
            ("A", (0.0, 0.0)),
            ("B", (1.0, 0.0)),
            ("C", (0.0, 1.0)),
            ("D", (2.0, 0.0)),
        ]);
        let heuristic = move |node: &&str, goal: &&str| {
            let (x1, y1) = coords[node];
            let (x2, y2) = coords[goal];
            OrderedFloat(euclidean(x1, y1, x2, y2))
        };

        let result = shortest_path(&graph, &"A", &"D", heuristic).unwrap();
        assert_eq!(result.path, vec!["A", "B", "D"]);
        assert_eq!(result.cost, OrderedFloat(2.0));
    }

    #[test]
    fn test_start_equals_goal() {
        let graph = city_graph();
        let heuristic = admissible_heuristic(coordinates());

        let result = shortest_path(&graph, &"D", &"D", heuristic).unwrap();
        assert_eq!(result.path, vec!["D"]);
        assert_eq!(result.cost, OrderedFloat(0.0));
    }

    #[test]
    fn test_unreachable_goal() {
        let edges = [("A", "B", 1.0), ("C", "D", 1.0)];
        let graph: Graph<&str, OrderedFloat<f64>> =
            Graph::from_edges(edges.into_iter().map(|(u, v, w)| (u, v, OrderedFloat(w))))
                .unwrap();

        let result = shortest_path(&graph, &"A", &"D", |_, _| OrderedFloat(0.0));
        assert_eq!(result, Err(GraphError::NoPath));
    }

    #[test]
    fn test_unknown_node() {
        let graph = city_graph();
        let result = shortest_path(&graph, &"A", &"Z", |_, _| OrderedFloat(0.0));
        assert!(matches!(result, Err(GraphError::UnknownNode(_))));
    }
}
