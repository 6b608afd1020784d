//! Weighted 3D spatial graphs and A* search over them
//!
//! Build a [`Graph`] of points joined by cost weighted undirected edges, then
//! find a route between two nodes with [`search`] and [`reconstruct`].
//! [`generator`] builds random instances and [`demo::run_demo`] ties it all together.

pub mod collections;
pub mod demo;
pub mod errors;
pub mod generator;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod logging;

pub use errors::PathPlannerError;
pub use geometry::{Point3, heuristic};
pub use graph::{Edge, Graph, NodeId};
pub use graph_algos::SearchState;
pub use graph_algos::a_star::{plan, search, search_with};
pub use graph_algos::shortest_path::{Path, path_cost, reconstruct};
