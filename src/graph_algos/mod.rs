
pub mod a_star;
pub mod dijkstra;
pub mod priority_queue;
pub mod shortest_path;

use crate::collections::FxIndexMap;
use crate::graph::NodeId;

/// Predecessor map produced by a search
/// The start node maps to `None`, every other relaxed node to the node it was reached from
pub type CameFrom = FxIndexMap<NodeId, Option<NodeId>>;

/// Best known cost from the start for every relaxed node
pub type CostSoFar = FxIndexMap<NodeId, f64>;


/// Bookkeeping left behind by one search run
/// Only nodes the search actually relaxed have entries, an unreachable goal has none
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub came_from: CameFrom,
    pub cost_so_far: CostSoFar,
}

impl SearchState {

    /// Best known cost to `node`, `None` if it was never reached
    pub fn cost_to(&self, node: NodeId) -> Option<f64> {
        self.cost_so_far.get(&node).copied()
    }

    pub fn reached(&self, node: NodeId) -> bool {
        self.cost_so_far.contains_key(&node)
    }
}
