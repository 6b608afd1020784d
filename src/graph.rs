use std::fmt;

use crate::errors::PathPlannerError;
use crate::geometry::Point3;


/// Handle to a node in a `Graph`
/// Handles are indices into the graph's node list, so two nodes with equal
/// coordinates are still distinct nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}


/// One side of an undirected edge, stored in the adjacency list of its other endpoint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub cost: f64,
}


/// Undirected graph of 3D points with weighted edges
///
/// Every edge is stored twice, once in the adjacency list of each endpoint,
/// with the same cost. Costs are expected to be finite and non-negative but
/// are not checked.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    points: Vec<Point3>,
    adjacency: Vec<Vec<Edge>>, // indexed by NodeId
    edge_count: usize,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            points: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Add a node with no edges, returns its handle
    pub fn add_node(&mut self, point: Point3) -> NodeId {
        let id = NodeId(self.points.len());
        self.points.push(point);
        self.adjacency.push(Vec::new());
        id
    }

    /// Connect two existing nodes in both directions
    /// Adding the same pair twice stores a second edge, callers dedupe with `has_edge`
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, cost: f64) -> Result<(), PathPlannerError> {
        self.check(a)?;
        self.check(b)?;

        self.adjacency[a.0].push(Edge { to: b, cost });
        self.adjacency[b.0].push(Edge { to: a, cost });
        self.edge_count += 1;
        Ok(())
    }

    /// True if `b` is adjacent to `a`, false when either node is unknown
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        self.adjacency[a.0].iter().any(|edge| edge.to == b)
    }

    /// Nodes adjacent to `node`, in the order their edges were added
    pub fn neighbors(&self, node: NodeId) -> Result<impl Iterator<Item = NodeId> + '_, PathPlannerError> {
        Ok(self.edges(node)?.iter().map(|edge| edge.to))
    }

    /// Adjacency list of `node` with edge costs
    pub fn edges(&self, node: NodeId) -> Result<&[Edge], PathPlannerError> {
        self.adjacency
            .get(node.0)
            .map(Vec::as_slice)
            .ok_or(PathPlannerError::InvalidReference(node))
    }

    /// Cost of the edge between `a` and `b`
    /// Fails if there is no such edge - check `has_edge` first
    pub fn cost(&self, a: NodeId, b: NodeId) -> Result<f64, PathPlannerError> {
        self.check(b)?;
        self.edges(a)?
            .iter()
            .find(|edge| edge.to == b)
            .map(|edge| edge.cost)
            .ok_or(PathPlannerError::MissingEdge { from: a, to: b })
    }

    /// Coordinates of a node
    pub fn point(&self, node: NodeId) -> Result<&Point3, PathPlannerError> {
        self.points.get(node.0).ok_or(PathPlannerError::InvalidReference(node))
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.points.len()
    }

    /// All node handles in insertion order
    pub fn node_ids(&self) -> impl ExactSizeIterator<Item = NodeId> + use<> {
        (0..self.points.len()).map(NodeId)
    }

    pub fn node_count(&self) -> usize {
        self.points.len()
    }

    /// Number of undirected edges added
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn check(&self, node: NodeId) -> Result<(), PathPlannerError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(PathPlannerError::InvalidReference(node))
        }
    }
}
