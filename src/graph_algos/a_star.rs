use crate::collections::FxIndexSet;
use crate::errors::PathPlannerError;
use crate::geometry::{Point3, heuristic};
use crate::graph::{Graph, NodeId};
use super::priority_queue::MinHeap;
use super::shortest_path::{Path, reconstruct};
use super::SearchState;

use tracing::{debug, trace};


/// A* search from `start` to `goal` guided by the Manhattan heuristic
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic is not admissible for Euclidean edge costs, so the cost found
/// for the goal is not guaranteed to be the minimum.
/// An unreachable goal is not an error here, it just has no entry in the result.
pub fn search(start: NodeId, goal: NodeId, graph: &Graph) -> Result<SearchState, PathPlannerError> {
    search_with(start, goal, graph, heuristic)
}

/// A* search with a caller supplied heuristic
/// `heuristic_fn(node, goal)` estimates the remaining cost from `node` to `goal`
/// The result is optimal when the estimate never exceeds the true remaining cost
pub fn search_with<H>(start: NodeId, goal: NodeId, graph: &Graph, heuristic_fn: H) -> Result<SearchState, PathPlannerError>
where
    H: Fn(&Point3, &Point3) -> f64,
{
    let goal_point = *graph.point(goal)?;
    graph.point(start)?;

    // Frontier ordered by cost + heuristic
    // Nodes are pushed again whenever their cost improves, older entries are left in place
    let mut frontier: MinHeap<NodeId> = MinHeap::with_capacity(graph.node_count());
    frontier.push(start, 0.0);

    let mut state = SearchState::default();
    state.came_from.insert(start, None);
    state.cost_so_far.insert(start, 0.0);

    // only used for reporting
    let mut expanded: FxIndexSet<NodeId> = FxIndexSet::default();
    let mut pops = 0usize;
    let mut found = false;

    while let Some(current) = frontier.pop() {
        pops += 1;

        if current == goal {
            found = true;
            break;
        }
        expanded.insert(current);

        // cost_so_far is the source of truth, so re-expanding a node from an
        // outdated entry relaxes nothing new
        let current_cost = state.cost_so_far[&current];

        for neighbor in graph.neighbors(current)? {
            // parallel edges all relax with the first edge's cost, same as `Graph::cost`
            let new_cost = current_cost + graph.cost(current, neighbor)?;
            let improved = match state.cost_so_far.get(&neighbor) {
                Some(&known) => new_cost < known,
                None => true,
            };
            if !improved {
                continue;
            }

            state.cost_so_far.insert(neighbor, new_cost);
            state.came_from.insert(neighbor, Some(current));

            let priority = new_cost + heuristic_fn(graph.point(neighbor)?, &goal_point);
            trace!(node = %neighbor, from = %current, cost = new_cost, priority, "relaxed");
            frontier.push(neighbor, priority);
        }
    }

    debug!(
        %start,
        %goal,
        found,
        pops,
        expanded = expanded.len(),
        reexpanded = pops - expanded.len() - usize::from(found),
        relaxed = state.cost_so_far.len(),
        "a* search finished"
    );

    Ok(state)
}


/// Search and rebuild the path in one step
pub fn plan(start: NodeId, goal: NodeId, graph: &Graph) -> Result<Path, PathPlannerError> {
    let state = search(start, goal, graph)?;
    let cost = state.cost_to(goal).ok_or(PathPlannerError::NoPathFound)?;
    let nodes = reconstruct(&state.came_from, start, goal)?;
    Ok(Path { nodes, cost })
}
