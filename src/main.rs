use std::process::ExitCode;

use clap::Parser;

use navgraph::demo::{DemoConfig, run_demo};
use navgraph::logging;


/// Search a random 3D graph with A* and print the route
#[derive(Parser, Debug)]
#[command(name = "navgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of nodes to generate
    #[arg(long, short, default_value_t = 100)]
    nodes: usize,

    /// Number of random edge attempts
    #[arg(long, short, default_value_t = 500)]
    edges: usize,

    /// Seed for a reproducible graph
    #[arg(long, short, env = "NAVGRAPH_SEED")]
    seed: Option<u64>,

    /// Log search progress
    #[arg(long, short)]
    verbose: bool,

    /// Log level or filter directive, overrides --verbose
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref()) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    let config = DemoConfig {
        num_nodes: cli.nodes,
        num_edges: cli.edges,
        seed: cli.seed,
    };

    match run_demo(&config) {
        Ok(route) => {
            println!("{route}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
