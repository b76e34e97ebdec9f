//! Sigflow CLI
//!
//! Entry point for the sigflow command-line tool. Loads a linked design
//! description and a cluster specification, builds the data-flow graph, and
//! reports the bounded-hop connectivity between the declared clusters.

mod args;

use std::fs;

use clap::Parser;
use sigflow_common::Design;
use sigflow_graph::{ClusterLabels, ConnectionMap, Error, FlowGraph};
use tracing::info;

use args::Args;

/// Runs the sigflow connection mapper.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads the design and cluster specs from JSON
/// 4. Builds the graph, assigns clusters, and computes the connection map
/// 5. Prints one line per (src, snk, hop) triple
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if args.max_hop <= 0 {
        return Err(Box::new(Error::InvalidHopBound {
            max_hop: args.max_hop,
        }));
    }

    let design: Design = serde_json::from_str(&fs::read_to_string(&args.design_path)?)?;
    let specs: Vec<Vec<String>> = serde_json::from_str(&fs::read_to_string(&args.clusters_path)?)?;
    info!("loaded design '{}' with {} cluster specs", design.top, specs.len());

    let graph = FlowGraph::build(&design)?;
    info!(
        "built graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let labels = ClusterLabels::assign(&graph, &specs)?;
    let map = ConnectionMap::compute(&graph, &labels, args.max_hop as usize)?;

    for (src, snk, hop) in map.iter() {
        println!("src cluster id {src} -> snk cluster id {snk} hop {hop}");
    }

    Ok(())
}
