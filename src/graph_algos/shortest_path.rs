use crate::errors::PathPlannerError;
use crate::graph::{Graph, NodeId};
use super::CameFrom;


/// Ordered route through a graph with its total cost
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub nodes: Vec<NodeId>, // start first, goal last
    pub cost: f64,
}


/// Construct the path from `start` to `goal` by walking predecessors back from the goal
/// Returns the ordered path as a vector of nodes from start to goal
/// Fails with NoPathFound if the goal was never reached or the chain ends before `start`
pub fn reconstruct(came_from: &CameFrom, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>, PathPlannerError> {

    let mut path = vec![goal];
    let mut current = goal;

    // Trace back from goal to start
    // every step adds a distinct node, so a chain longer than the map is a cycle
    while current != start {
        match came_from.get(&current) {
            Some(&Some(parent)) if path.len() <= came_from.len() => {
                path.push(parent);
                current = parent;
            }
            _ => return Err(PathPlannerError::NoPathFound),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}


/// Sum of the edge costs along `path`
/// Fails if two consecutive nodes are not connected
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Result<f64, PathPlannerError> {
    path.windows(2)
        .map(|pair| graph.cost(pair[0], pair[1]))
        .sum()
}
