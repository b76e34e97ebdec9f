//! The directed data-flow graph.

use crate::node::{NodeId, NodeRegistry};

/// Kind of a directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// A net connection from a driver endpoint to a load endpoint.
    Net,
    /// An internal timing arc through an instance.
    Arc,
}

/// Directed graph of signal endpoints, read-only once built.
///
/// Adjacency is arena-indexed: node `i`'s outgoing edges live at position
/// `i`, so traversals can use flat visited arrays instead of hash sets.
/// Parallel edges of distinct kinds between the same pair are kept; they
/// collapse to a single hop under BFS visited semantics.
#[derive(Debug, Clone)]
pub struct FlowGraph {
    registry: NodeRegistry,
    succs: Vec<Vec<(NodeId, EdgeKind)>>,
    edge_count: usize,
}

impl FlowGraph {
    pub(crate) fn new(
        registry: NodeRegistry,
        succs: Vec<Vec<(NodeId, EdgeKind)>>,
        edge_count: usize,
    ) -> Self {
        debug_assert_eq!(registry.len(), succs.len());
        debug_assert!(
            succs
                .iter()
                .flatten()
                .all(|&(dst, _)| dst.index() < registry.len())
        );
        FlowGraph {
            registry,
            succs,
            edge_count,
        }
    }

    /// The node registry backing this graph.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn succs(&self, id: NodeId) -> &[(NodeId, EdgeKind)] {
        &self.succs[id.index()]
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
