// Usage:
//   compare_random <num_vertices> <density> [num_queries] [seed]
//   compare_random --file <path> [num_queries] [seed]
#[macro_use]
extern crate dijkstra_compare;
use dijkstra_compare::{cli::CliErr, datastr::graph::*, experiments, generator, graph_pair::GraphPair, io::load_edge_list, report::*};
use std::{env, error::Error};

use rand::prelude::*;

pub fn main() -> Result<(), Box<dyn Error>> {
    let _reporter = enable_reporting("compare_random");

    let mut args = env::args().skip(1);
    let first = args.next().ok_or(CliErr("No vertex count or --file arg given"))?;

    let graphs: GraphPair = if first == "--file" {
        let path = args.next().ok_or(CliErr("No graph file given"))?;
        report!("graph_file", path);
        report_time_with_key("loading graph", "graph_build_time_ms", || load_edge_list(&path))?
    } else {
        let num_nodes: usize = first.parse().map_err(|_| CliErr("Vertex count must be a non-negative integer"))?;
        let density: u32 = args
            .next()
            .ok_or(CliErr("No density arg given"))?
            .parse()
            .map_err(|_| CliErr("Density must be an integer between 0 and 100"))?;
        report!("density", density);

        let seed = generator::wall_clock_seed();
        report!("graph_seed", seed);
        let mut rng = StdRng::seed_from_u64(seed);
        report_time_with_key("generating graph", "graph_build_time_ms", || generator::generate_random_with_rng(num_nodes, density, &mut rng))?
    };

    report!("graph", { "num_nodes": graphs.num_nodes(), "num_list_arcs": graphs.list().num_arcs(), "num_matrix_arcs": graphs.matrix().num_arcs() });

    let num_queries = match args.next() {
        Some(arg) => arg.parse().map_err(|_| CliErr("Query count must be a non-negative integer"))?,
        None => experiments::NUM_RANDOM_QUERIES,
    };
    let seed = match args.next() {
        Some(arg) => arg.parse().map_err(|_| CliErr("Seed must be an unsigned 64bit integer"))?,
        None => generator::wall_clock_seed(),
    };
    report!("num_queries", num_queries);
    report!("seed", seed);

    if let Some(core) = core_affinity::get_core_ids().and_then(|ids| ids.into_iter().next()) {
        core_affinity::set_for_current(core);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let summary = report_time("running queries", || {
        let mut algo_runs_ctxt = push_collection_context("algo_runs".to_string());
        experiments::run_random_comparisons(&graphs, &mut rng, &mut algo_runs_ctxt, num_queries)
    });

    eprintln!(
        "{} queries: adjacency list {:.3}ms, adjacency matrix {:.3}ms, {} disagreements",
        summary.num_queries, summary.total_list_time_ms, summary.total_matrix_time_ms, summary.num_disagreements
    );
    report!("summary", summary);

    Ok(())
}
