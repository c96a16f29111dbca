use std::path::PathBuf;

use apsp_core::{
    constants::DEFAULT_VERTICES,
    harness::Harness,
    params::{ApspParams, GraphParams, Threads},
    solver::ApspSolver,
};
use clap::Args;
use tracing::info;

use crate::{input, report};

#[derive(Args)]
pub struct RunArgs {
    /// Number of vertices of the generated graph
    #[arg(short, long, default_value_t = DEFAULT_VERTICES)]
    vertices: usize,

    /// Seed for the generated graph, random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Set every generated self loop to 0
    #[arg(long)]
    zero_diagonal: bool,

    /// JSON file with the graph rows, `null` for a missing edge. Replaces the generated graph
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Worker threads (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Pivots per range for the chunked strategy
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Print the graph and its shortest paths
    #[arg(long)]
    print_graph: bool,

    /// Compare every strategy against the sequential result
    #[arg(long)]
    verify: bool,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RunArgs) -> Result<(), anyhow::Error> {
    let graph = match &args.input {
        Some(path) => input::read_graph(path)?,
        None => input::random_graph(
            &GraphParams {
                vertices: args.vertices,
                zero_diagonal: args.zero_diagonal,
                ..GraphParams::default()
            },
            args.seed,
        )?,
    };

    let solver = ApspSolver::new(ApspParams {
        threads: args.threads.map_or(Threads::Auto, Threads::Multi),
        chunk_size: args.chunk_size,
    })?;
    info!("Using {} worker threads", solver.num_threads());

    if args.print_graph {
        println!("----- Initial Graph -----");
        println!("{graph}");
        println!("----- Shortest Paths -----");
        println!("{}", solver.solve_sequential(&graph)?);
    }

    let harness = if args.verify {
        Harness::new(&solver).with_oracle(&graph)?
    } else {
        Harness::new(&solver)
    };

    let reports = harness.run_all(&solver.strategies(), &graph)?;

    if args.json {
        report::print_json(&reports)?;
    } else {
        report::print_lines(&reports);
        if args.verify {
            report::print_table(&reports);
        }
    }

    Ok(())
}
