use std::fmt;

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::errors::PathPlannerError;
use crate::generator::{generate_random_graph, generate_random_start_and_goal};
use crate::geometry::Point3;
use crate::graph::Graph;
use crate::graph_algos::a_star::search;
use crate::graph_algos::shortest_path::{Path, reconstruct};


/// Settings for one random demo run
#[derive(Clone, Debug, PartialEq)]
pub struct DemoConfig {
    pub num_nodes: usize,
    pub num_edges: usize, // edge attempts, see `generate_random_graph`
    pub seed: Option<u64>, // fixed seed for reproducible runs, entropy otherwise
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            num_nodes: 100,
            num_edges: 500,
            seed: None,
        }
    }
}


/// Path found by a demo run, with the coordinates of every node on it
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub points: Vec<Point3>,
    pub cost: f64,
}

impl Route {

    pub fn from_path(graph: &Graph, path: &Path) -> Result<Self, PathPlannerError> {
        let points = path.nodes
            .iter()
            .map(|&node| graph.point(node).copied())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points, cost: path.cost })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shortest path: ")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{point}")?;
        }
        writeln!(f)?;
        write!(f, "Total cost: {}", self.cost)
    }
}


/// Generate a random graph, pick two endpoints and search between them
pub fn run_demo(config: &DemoConfig) -> Result<Route, PathPlannerError> {
    match config.seed {
        Some(seed) => run_demo_with(&mut StdRng::seed_from_u64(seed), config),
        None => run_demo_with(&mut rand::rng(), config),
    }
}

/// `run_demo` with a caller supplied random source
pub fn run_demo_with<R: Rng>(rng: &mut R, config: &DemoConfig) -> Result<Route, PathPlannerError> {
    // check before generating so a degenerate request fails fast
    if config.num_nodes < 2 {
        return Err(PathPlannerError::DegenerateInstance { nodes: config.num_nodes });
    }

    let graph = generate_random_graph(rng, config.num_nodes, config.num_edges)?;
    let (start, goal) = generate_random_start_and_goal(rng, &graph)?;

    let state = search(start, goal, &graph)?;
    let cost = state.cost_to(goal).ok_or(PathPlannerError::NoPathFound)?;
    let nodes = reconstruct(&state.came_from, start, goal)?;
    debug!(hops = nodes.len() - 1, cost, "reconstructed path");

    let route = Route::from_path(&graph, &Path { nodes, cost })?;
    info!(%start, %goal, cost, "demo route found");
    Ok(route)
}
