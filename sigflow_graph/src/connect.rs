//! The bounded-hop cluster connectivity engine and its query surface.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::debug;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::cluster::{ClusterId, ClusterLabels};
use crate::error::{Error, Result};
use crate::graph::FlowGraph;

/// A sink cluster reached from some source cluster, with the minimum hop
/// count at which it was first discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterHop {
    /// The sink cluster.
    pub dst: ClusterId,
    /// Minimum number of edges from the source cluster, in `1..=max_hop`.
    pub hop: usize,
}

/// Minimum inter-cluster hop distances, bounded by a maximum hop count.
///
/// An immutable snapshot computed per query. Sources that discover no sinks
/// are absent, keeping the map sparse; per-source sink lists are in BFS
/// discovery order, which is non-decreasing in hop count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionMap {
    map: IndexMap<ClusterId, Vec<ClusterHop>>,
}

impl ConnectionMap {
    /// Compute the connection map for every source cluster.
    ///
    /// For each cluster a multi-source BFS runs from all of its members at
    /// once, capped at `max_hop` edges, over the directed graph. The first
    /// visit of a node labeled with a different cluster records that sink at
    /// the current hop; BFS order makes the first visit the minimum. Each
    /// traversal owns a flat visited array, so cyclic graphs terminate and
    /// the work per source cluster is O(V + E).
    ///
    /// Seeds sit at hop 0 and are never reported, which also excludes
    /// reflexive pairs: every member of the source cluster is a seed.
    ///
    /// A hop bound of zero is rejected with [`Error::InvalidHopBound`]
    /// before any traversal starts.
    pub fn compute(graph: &FlowGraph, labels: &ClusterLabels, max_hop: usize) -> Result<Self> {
        if max_hop == 0 {
            return Err(Error::InvalidHopBound { max_hop: 0 });
        }

        let sources: Vec<ClusterId> = (0..labels.cluster_count()).map(ClusterId::new).collect();

        // Traversals are independent given the read-only graph and labels:
        // one result slot per source cluster, merged in source order below.
        #[cfg(feature = "rayon")]
        let source_iter = sources.par_iter();

        #[cfg(not(feature = "rayon"))]
        let source_iter = sources.iter();

        let slots: Vec<Vec<ClusterHop>> = source_iter
            .map(|&src| trace_cluster(graph, labels, src, max_hop))
            .collect();

        let mut map = IndexMap::new();
        for (src, sinks) in sources.into_iter().zip(slots) {
            if !sinks.is_empty() {
                map.insert(src, sinks);
            }
        }
        debug!(sources = map.len(), max_hop, "computed connection map");
        Ok(ConnectionMap { map })
    }

    /// Sinks discovered from a source cluster, in discovery order.
    /// Empty when the source discovered nothing.
    pub fn sinks(&self, src: ClusterId) -> &[ClusterHop] {
        self.map.get(&src).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Source clusters present in the map, ascending.
    pub fn sources(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.map.keys().copied()
    }

    /// Iterate all `(src, snk, hop)` triples, ordered by source cluster id
    /// ascending and then by discovery order. Restartable: each call yields
    /// a fresh iterator over the same snapshot.
    pub fn iter(&self) -> impl Iterator<Item = (ClusterId, ClusterId, usize)> + '_ {
        self.map
            .iter()
            .flat_map(|(&src, sinks)| sinks.iter().map(move |s| (src, s.dst, s.hop)))
    }

    /// Number of source clusters with at least one sink.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no cluster reaches any other within the bound.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Multi-source BFS from every member of `src`, depth-capped at `max_hop`.
fn trace_cluster(
    graph: &FlowGraph,
    labels: &ClusterLabels,
    src: ClusterId,
    max_hop: usize,
) -> Vec<ClusterHop> {
    let seeds = labels.members(src);
    if seeds.is_empty() {
        return Vec::new();
    }

    let mut visited = vec![false; graph.node_count()];
    let mut frontier = VecDeque::with_capacity(seeds.len());
    for &seed in seeds {
        visited[seed.index()] = true;
        frontier.push_back((seed, 0usize));
    }

    let mut sinks: Vec<ClusterHop> = Vec::new();
    let mut recorded = vec![false; labels.cluster_count()];

    while let Some((node, hop)) = frontier.pop_front() {
        if hop == max_hop {
            continue;
        }
        for &(next, _) in graph.succs(node) {
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            let hop = hop + 1;
            if let Some(dst) = labels.label(next) {
                if dst != src && !recorded[dst.index()] {
                    recorded[dst.index()] = true;
                    sinks.push(ClusterHop { dst, hop });
                }
            }
            frontier.push_back((next, hop));
        }
    }

    debug!(src = %src, sinks = sinks.len(), "traced source cluster");
    sinks
}
