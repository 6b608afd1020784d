use crate::errors::PathPlannerError;
use crate::geometry::Point3;
use crate::graph::{Graph, NodeId};

use rand::Rng;
use tracing::debug;


/// Upper bound (exclusive) on random edge costs
pub const MAX_EDGE_COST: f64 = 100.0;


/// Random graph with `num_nodes` points in the unit cube
///
/// Makes `num_edges` attempts at connecting two random nodes. Attempts that pick
/// the same node twice or an already connected pair are skipped, not retried, so
/// the graph usually ends up with fewer than `num_edges` edges.
/// Each accepted edge gets a cost drawn from [0, 100).
pub fn generate_random_graph<R: Rng>(rng: &mut R, num_nodes: usize, num_edges: usize) -> Result<Graph, PathPlannerError> {
    let mut graph = Graph::with_capacity(num_nodes);
    for _ in 0..num_nodes {
        graph.add_node(Point3::new(rng.random(), rng.random(), rng.random()));
    }

    if num_nodes == 0 {
        return Ok(graph);
    }

    let mut skipped = 0usize;
    for _ in 0..num_edges {
        let a = NodeId(rng.random_range(0..num_nodes));
        let b = NodeId(rng.random_range(0..num_nodes));
        if a == b || graph.has_edge(a, b) {
            skipped += 1;
            continue;
        }
        let cost = rng.random_range(0.0..MAX_EDGE_COST);
        graph.add_edge(a, b, cost)?;
    }

    debug!(nodes = num_nodes, attempts = num_edges, edges = graph.edge_count(), skipped, "generated random graph");
    Ok(graph)
}


/// Pick two distinct random nodes as (start, goal)
/// Needs at least two nodes, otherwise there is no distinct pair to find
pub fn generate_random_start_and_goal<R: Rng>(rng: &mut R, graph: &Graph) -> Result<(NodeId, NodeId), PathPlannerError> {
    let nodes = graph.node_count();
    if nodes < 2 {
        return Err(PathPlannerError::DegenerateInstance { nodes });
    }

    let start = NodeId(rng.random_range(0..nodes));
    let mut goal = NodeId(rng.random_range(0..nodes));
    while goal == start {
        goal = NodeId(rng.random_range(0..nodes));
    }

    debug!(%start, %goal, "picked endpoints");
    Ok((start, goal))
}
