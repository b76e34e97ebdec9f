//! End-to-end checks over the shared connectivity scenarios, plus a
//! brute-force cross-check of reported hop distances.

use std::collections::HashMap;
use std::sync::Once;

use rstest::rstest;
use sigflow_common::{Design, basic_cases, chain_design, pipeline_design};
use sigflow_graph::{ClusterId, ClusterLabels, ConnectionMap, Error, FlowGraph, NodeId};

static INIT: Once = Once::new();

/// Configures logging for the test runner.
fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn basic_cases_produce_their_expected_maps() {
    setup_test_logging();
    for case in basic_cases() {
        let graph = FlowGraph::build(&case.design)
            .unwrap_or_else(|e| panic!("case '{}' failed to build: {e}", case.name));
        let labels = ClusterLabels::assign(&graph, &case.clusters)
            .unwrap_or_else(|e| panic!("case '{}' failed to assign: {e}", case.name));
        let map = ConnectionMap::compute(&graph, &labels, case.max_hop)
            .unwrap_or_else(|e| panic!("case '{}' failed to compute: {e}", case.name));

        let triples: Vec<(usize, usize, usize)> = map
            .iter()
            .map(|(src, snk, hop)| (src.index(), snk.index(), hop))
            .collect();
        assert_eq!(
            triples, case.expected,
            "case '{}' produced an unexpected map",
            case.name
        );
    }
}

/// Unbounded single-source BFS distances from `start`, in edges.
fn node_distances(graph: &FlowGraph, start: NodeId) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.node_count()];
    dist[start.index()] = Some(0);
    let mut frontier = std::collections::VecDeque::from([start]);
    while let Some(node) = frontier.pop_front() {
        let d = dist[node.index()].unwrap();
        for &(next, _) in graph.succs(node) {
            if dist[next.index()].is_none() {
                dist[next.index()] = Some(d + 1);
                frontier.push_back(next);
            }
        }
    }
    dist
}

/// Reference implementation: per-pair minimum over all (member, member)
/// node distances, capped at the hop bound.
fn brute_force_map(
    graph: &FlowGraph,
    labels: &ClusterLabels,
    max_hop: usize,
) -> HashMap<(usize, usize), usize> {
    let mut expected = HashMap::new();
    for src in 0..labels.cluster_count() {
        for dst in 0..labels.cluster_count() {
            if src == dst {
                continue;
            }
            let best = labels
                .members(ClusterId::new(src))
                .iter()
                .flat_map(|&seed| {
                    let dist = node_distances(graph, seed);
                    labels
                        .members(ClusterId::new(dst))
                        .iter()
                        .filter_map(|&m| dist[m.index()])
                        .collect::<Vec<_>>()
                })
                .filter(|&d| d >= 1 && d <= max_hop)
                .min();
            if let Some(hop) = best {
                expected.insert((src, dst), hop);
            }
        }
    }
    expected
}

#[rstest]
#[case::tight(1)]
#[case::medium(3)]
#[case::loose(20)]
fn engine_agrees_with_brute_force(#[case] max_hop: usize) {
    setup_test_logging();
    let designs = [pipeline_design(), chain_design(6)];
    let cluster_sets: [&[Vec<&str>]; 2] = [
        &[
            vec!["r1", "u1"],
            vec!["r2", "u2"],
            vec!["r3"],
            vec!["in1"],
            vec!["in2"],
            vec!["out"],
        ],
        &[
            vec!["b0"],
            vec!["b2", "b3"],
            vec!["b5"],
        ],
    ];

    for (design, clusters) in designs.iter().zip(cluster_sets) {
        let graph = FlowGraph::build(design).unwrap();
        let labels = ClusterLabels::assign(&graph, clusters).unwrap();
        let map = ConnectionMap::compute(&graph, &labels, max_hop).unwrap();

        let got: HashMap<(usize, usize), usize> = map
            .iter()
            .map(|(src, snk, hop)| ((src.index(), snk.index()), hop))
            .collect();
        assert_eq!(got, brute_force_map(&graph, &labels, max_hop));
    }
}

#[rstest]
#[case::empty(Design::builder("top").finish())]
#[case::pipeline(pipeline_design())]
fn zero_hop_bound_always_fails(#[case] design: Design) {
    setup_test_logging();
    let graph = FlowGraph::build(&design).unwrap();
    let labels = ClusterLabels::assign::<&str>(&graph, &[]).unwrap();
    assert_eq!(
        ConnectionMap::compute(&graph, &labels, 0).unwrap_err(),
        Error::InvalidHopBound { max_hop: 0 }
    );
}

#[test]
fn unresolved_name_fails_before_any_traversal() {
    setup_test_logging();
    let graph = FlowGraph::build(&pipeline_design()).unwrap();
    let err = ClusterLabels::assign(&graph, &[vec!["in1"], vec!["nope"], vec!["out"]]).unwrap_err();
    assert_eq!(err, Error::unresolved("nope"));
}

#[test]
fn rebuilding_replaces_the_previous_graph() {
    setup_test_logging();
    let first = FlowGraph::build(&pipeline_design()).unwrap();
    let second = FlowGraph::build(&chain_design(3)).unwrap();
    // Independent values: node ids from one graph mean nothing in the other.
    assert_ne!(first.node_count(), second.node_count());
    assert!(first.registry().lookup("in1").is_some());
    assert!(second.registry().lookup("in1").is_none());
}
