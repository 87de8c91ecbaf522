//! Batch comparison of both Dijkstra variants on random queries.

use rand::prelude::*;
use serde::Serialize;

use crate::{
    algo::Query,
    datastr::graph::*,
    graph_pair::{Comparison, GraphPair},
    report::*,
};

/// Number of random queries performed when not given explicitly.
pub const NUM_RANDOM_QUERIES: usize = 100;

/// Aggregated result of `run_random_comparisons`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub num_queries: usize,
    pub total_list_time_ms: f64,
    pub total_matrix_time_ms: f64,
    pub num_disagreements: usize,
}

impl ComparisonSummary {
    fn add(&mut self, comparison: &Comparison) {
        self.num_queries += 1;
        self.total_list_time_ms += comparison.list.running_time_ms;
        self.total_matrix_time_ms += comparison.matrix.running_time_ms;
        if !comparison.agrees() {
            self.num_disagreements += 1;
        }
    }
}

/// Run `num_queries` queries between uniformly drawn source and target nodes on both representations.
/// Each query gets its own item in the reporting collection.
/// Graphs without nodes have no valid queries, the summary is empty then.
pub fn run_random_comparisons(graphs: &GraphPair, rng: &mut StdRng, reporting_context: &mut CollectionContextGuard, num_queries: usize) -> ComparisonSummary {
    let num_nodes = graphs.num_nodes() as NodeId;
    let mut summary = ComparisonSummary::default();
    if num_nodes == 0 {
        return summary;
    }

    let queries = std::iter::from_fn(|| {
        Some(Query {
            from: rng.gen_range(0..num_nodes),
            to: rng.gen_range(0..num_nodes),
        })
    });

    for query in queries.take(num_queries) {
        let _query_ctxt = reporting_context.push_collection_item();
        report!("from", query.from);
        report!("to", query.to);
        let comparison = graphs.run_and_compare(query);
        report!("agrees", comparison.agrees());
        report!("list_distance", comparison.list.distance);
        report!("matrix_distance", comparison.matrix.distance);
        summary.add(&comparison);
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_random_with_rng;

    #[test]
    fn runs_requested_number_of_queries() {
        let mut rng = StdRng::seed_from_u64(3);
        let graphs: GraphPair = generate_random_with_rng(30, 20, &mut rng).unwrap();

        let (summary, report) = collect_report(|| {
            let mut ctxt = push_collection_context("algo_runs".to_string());
            run_random_comparisons(&graphs, &mut rng, &mut ctxt, 25)
        });

        assert_eq!(summary.num_queries, 25);
        let runs = report["algo_runs"].as_array().unwrap();
        assert_eq!(runs.len(), 25);
        let disagreements = runs.iter().filter(|run| run["agrees"] == json!(false)).count();
        assert_eq!(disagreements, summary.num_disagreements);
        assert!(runs.iter().all(|run| run["adjacency_list"]["running_time_ms"].is_number()));
    }

    #[test]
    fn empty_graph_has_no_queries() {
        let graphs = GraphPair::with_num_nodes(0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ctxt = push_collection_context("algo_runs".to_string());

        assert_eq!(run_random_comparisons(&graphs, &mut rng, &mut ctxt, 10), ComparisonSummary::default());
    }
}
