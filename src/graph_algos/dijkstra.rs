use crate::errors::PathPlannerError;
use crate::graph::{Graph, NodeId};
use super::a_star::search_with;
use super::shortest_path::{Path, reconstruct};
use super::SearchState;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// This is A* with a zero heuristic, which never overestimates, so the cost
/// found for the goal is the true minimum for non-negative edge costs
pub fn dijkstra(start: NodeId, goal: NodeId, graph: &Graph) -> Result<SearchState, PathPlannerError> {
    search_with(start, goal, graph, |_, _| 0.0)
}

/// Minimum cost path from `start` to `goal`
pub fn dijkstra_path(start: NodeId, goal: NodeId, graph: &Graph) -> Result<Path, PathPlannerError> {
    let state = dijkstra(start, goal, graph)?;
    let cost = state.cost_to(goal).ok_or(PathPlannerError::NoPathFound)?;
    let nodes = reconstruct(&state.came_from, start, goal)?;
    Ok(Path { nodes, cost })
}
