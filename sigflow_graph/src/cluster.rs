//! Cluster assignment: mapping caller-declared name groups onto graph nodes.

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::FlowGraph;
use crate::node::NodeId;

/// Identifier of a cluster: its 0-based position in the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(u32);

impl ClusterId {
    /// Make a cluster id from a declaration index.
    pub fn new(index: usize) -> Self {
        ClusterId(index as u32)
    }

    /// The declaration index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-node cluster labels plus per-cluster member lists.
///
/// Nodes not named by any spec stay unlabeled: traversals pass through them
/// but they are never reported as sources or sinks.
#[derive(Debug, Clone)]
pub struct ClusterLabels {
    labels: Vec<Option<ClusterId>>,
    members: Vec<Vec<NodeId>>,
}

impl ClusterLabels {
    /// Resolve ordered cluster specs against a graph.
    ///
    /// Each name resolves either to a single port/pin node or, failing that,
    /// to every pin of the instance with that name. A name that resolves
    /// neither way fails the whole assignment with
    /// [`Error::UnresolvedNodeName`]; nothing partial escapes. When a name
    /// lands in more than one spec, the later spec (higher index) wins.
    pub fn assign<S: AsRef<str>>(graph: &FlowGraph, specs: &[Vec<S>]) -> Result<Self> {
        let registry = graph.registry();
        let mut labels: Vec<Option<ClusterId>> = vec![None; registry.len()];

        for (index, spec) in specs.iter().enumerate() {
            let cluster = ClusterId::new(index);
            for name in spec {
                let name = name.as_ref();
                if let Some(id) = registry.lookup(name) {
                    labels[id.index()] = Some(cluster);
                    continue;
                }
                let pins = registry.owned_by(name);
                if pins.is_empty() {
                    return Err(Error::unresolved(name));
                }
                for &pin in pins {
                    labels[pin.index()] = Some(cluster);
                }
            }
        }

        // Member lists are derived after all overwrites so a name claimed by
        // a later spec never lingers in an earlier cluster. Members end up in
        // ascending node-id order, which fixes the traversal seed order.
        let mut members: Vec<Vec<NodeId>> = vec![Vec::new(); specs.len()];
        for (index, label) in labels.iter().enumerate() {
            if let Some(cluster) = label {
                members[cluster.index()].push(NodeId::new(index));
            }
        }

        let labeled = labels.iter().flatten().count();
        debug!(clusters = specs.len(), labeled, "assigned cluster labels");
        Ok(ClusterLabels { labels, members })
    }

    /// The cluster a node belongs to, if any.
    pub fn label(&self, id: NodeId) -> Option<ClusterId> {
        self.labels[id.index()]
    }

    /// Members of a cluster, in ascending node-id order.
    pub fn members(&self, cluster: ClusterId) -> &[NodeId] {
        &self.members[cluster.index()]
    }

    /// Number of declared clusters (including empty ones).
    pub fn cluster_count(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use sigflow_common::pipeline_design;

    use super::*;

    fn pipeline_graph() -> FlowGraph {
        FlowGraph::build(&pipeline_design()).unwrap()
    }

    #[test]
    fn instance_names_expand_to_all_pins() {
        let graph = pipeline_graph();
        let labels = ClusterLabels::assign(&graph, &[vec!["r1", "u1"]]).unwrap();
        let cluster = ClusterId::new(0);
        assert_eq!(labels.members(cluster).len(), 4);
        for name in ["r1/d", "r1/q", "u1/a", "u1/z"] {
            let id = graph.registry().lookup(name).unwrap();
            assert_eq!(labels.label(id), Some(cluster));
        }
    }

    #[test]
    fn port_names_resolve_to_single_nodes() {
        let graph = pipeline_graph();
        let labels = ClusterLabels::assign(&graph, &[vec!["in1"], vec!["out"]]).unwrap();
        let in1 = graph.registry().lookup("in1").unwrap();
        assert_eq!(labels.label(in1), Some(ClusterId::new(0)));
        assert_eq!(labels.members(ClusterId::new(1)).len(), 1);
    }

    #[test]
    fn later_spec_wins_on_duplicate_names() {
        let graph = pipeline_graph();
        let labels = ClusterLabels::assign(&graph, &[vec!["in1", "in2"], vec!["in1"]]).unwrap();
        let in1 = graph.registry().lookup("in1").unwrap();
        let in2 = graph.registry().lookup("in2").unwrap();
        assert_eq!(labels.label(in1), Some(ClusterId::new(1)));
        assert_eq!(labels.label(in2), Some(ClusterId::new(0)));
        // in1 must not linger in cluster 0's member list.
        assert_eq!(labels.members(ClusterId::new(0)), &[in2]);
        assert_eq!(labels.members(ClusterId::new(1)), &[in1]);
    }

    #[test]
    fn unresolved_name_fails_the_whole_assignment() {
        let graph = pipeline_graph();
        let err = ClusterLabels::assign(&graph, &[vec!["in1"], vec!["bogus"]]).unwrap_err();
        assert_eq!(err, Error::unresolved("bogus"));
    }

    #[test]
    fn unmentioned_nodes_stay_unlabeled() {
        let graph = pipeline_graph();
        let labels = ClusterLabels::assign(&graph, &[vec!["in1"]]).unwrap();
        let out = graph.registry().lookup("out").unwrap();
        assert_eq!(labels.label(out), None);
    }

    #[test]
    fn empty_spec_list_yields_no_clusters() {
        let graph = pipeline_graph();
        let labels = ClusterLabels::assign::<&str>(&graph, &[]).unwrap();
        assert_eq!(labels.cluster_count(), 0);
    }
}
