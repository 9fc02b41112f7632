use super::SearchNodeMap;
use crate::errors::GraphError;

/// Construct the shortest path from the goal node back to the start node
/// Follows parent indices through the node map, then reverses into
/// start-to-goal order.
pub(crate) fn reconstruct<N, C>(
    node_map: &SearchNodeMap<N, C>,
    goal_index: usize,
) -> Result<Vec<N>, GraphError>
where
    N: Clone,
{
    let mut path = Vec::new();
    let mut current_index = goal_index;

    // usize::MAX marks the start node's missing parent
    while current_index != usize::MAX {
        if let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(node.clone());
            current_index = parent_index;
        } else {
            return Err(GraphError::NoPath);
        }
    }

    path.reverse();

    if path.is_empty() {
        return Err(GraphError::NoPath);
    }

    Ok(path)
}
