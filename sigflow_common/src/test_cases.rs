//! Common connectivity test fixtures for the sigflow workspace.
//!
//! These scenarios are consumed by the graph core's integration tests so that
//! every crate checks against the same designs and the same expected maps.

use crate::design::Design;
use crate::design::PinDirection::{Input, Output};

/// A complete connectivity scenario.
#[derive(Debug, Clone)]
pub struct ConnectivityCase {
    /// The name of the scenario.
    pub name: &'static str,
    /// The design to build the graph from.
    pub design: Design,
    /// Ordered cluster specs; cluster id equals position.
    pub clusters: Vec<Vec<&'static str>>,
    /// Hop bound for the query.
    pub max_hop: usize,
    /// The full expected map as (src, snk, hop) triples in query order.
    pub expected: Vec<(usize, usize, usize)>,
}

/// Two pipelines through combinational cells into registers, plus an
/// unconnected register:
///
/// ```text
/// in1 -> u1 -> r1 -> out
/// in2 -> u2 -> r2
///              r3
/// ```
pub fn pipeline_design() -> Design {
    Design::builder("top")
        .input("in1")
        .input("in2")
        .output("out")
        .cell("u1", &["a"], &["z"])
        .cell("u2", &["a"], &["z"])
        .instance("r1", &[("d", Input), ("q", Output)], &[("d", "q")])
        .instance("r2", &[("d", Input), ("q", Output)], &[("d", "q")])
        .instance("r3", &[("d", Input), ("q", Output)], &[("d", "q")])
        .net("n1", &["in1"], &["u1/a"])
        .net("n2", &["u1/z"], &["r1/d"])
        .net("n3", &["r1/q"], &["out"])
        .net("n4", &["in2"], &["u2/a"])
        .net("n5", &["u2/z"], &["r2/d"])
        .finish()
}

/// A linear chain of `cells` single-input buffers, `b0` through `b{n-1}`,
/// each output wired to the next buffer's input.
pub fn chain_design(cells: usize) -> Design {
    let mut builder = Design::builder("chain");
    for i in 0..cells {
        builder = builder.cell(&format!("b{i}"), &["a"], &["z"]);
    }
    for i in 1..cells {
        builder = builder.net(
            &format!("n{i}"),
            &[&format!("b{}/z", i - 1)],
            &[&format!("b{i}/a")],
        );
    }
    builder.finish()
}

/// Pre-defined scenarios with their full expected connection maps.
pub fn basic_cases() -> Vec<ConnectivityCase> {
    vec![
        ConnectivityCase {
            name: "pipeline_two_hops",
            design: pipeline_design(),
            clusters: vec![
                vec!["r1", "u1"],
                vec!["r2", "u2"],
                vec!["r3"],
                vec!["in1"],
                vec!["in2"],
                vec!["out"],
            ],
            max_hop: 2,
            expected: vec![(0, 5, 1), (3, 0, 1), (4, 1, 1)],
        },
        ConnectivityCase {
            name: "chain_singletons_direct_neighbors",
            design: chain_design(10),
            clusters: (0..10).map(|i| vec![chain_cluster_name(i)]).collect(),
            max_hop: 1,
            expected: (0..9).map(|i| (i, i + 1, 1)).collect(),
        },
        ConnectivityCase {
            name: "chain_singletons_wide_bound",
            design: chain_design(4),
            clusters: (0..4).map(|i| vec![chain_cluster_name(i)]).collect(),
            max_hop: 8,
            // Each net hop crosses one edge; each buffer adds an internal arc
            // edge, so bi reaches bj at distance 2*(j-i)-1.
            expected: vec![
                (0, 1, 1),
                (0, 2, 3),
                (0, 3, 5),
                (1, 2, 1),
                (1, 3, 3),
                (2, 3, 1),
            ],
        },
        ConnectivityCase {
            name: "isolated_cells_yield_nothing",
            design: Design::builder("top")
                .cell("g1", &["a"], &["z"])
                .cell("g2", &["a"], &["z"])
                .finish(),
            clusters: vec![vec!["g1"], vec!["g2"]],
            max_hop: 3,
            expected: vec![],
        },
    ]
}

fn chain_cluster_name(i: usize) -> &'static str {
    // Cluster specs borrow 'static names; the chain fixtures only ever use
    // ten buffers.
    const NAMES: [&str; 10] = ["b0", "b1", "b2", "b3", "b4", "b5", "b6", "b7", "b8", "b9"];
    NAMES[i]
}
