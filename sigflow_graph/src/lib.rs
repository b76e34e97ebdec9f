//! Structural connectivity core for linked digital designs.
//!
//! Sigflow turns a linked circuit description into a directed data-flow graph
//! of signal endpoints (ports and instance pins), lets callers partition
//! those endpoints into ordered clusters, and computes the minimum hop
//! distance between every pair of clusters within a caller-supplied bound.
//!
//! The main entry points are:
//! - [`FlowGraph::build`]: description -> graph
//! - [`ClusterLabels::assign`]: graph + name specs -> per-node labels
//! - [`ConnectionMap::compute`]: graph + labels + hop bound -> map

mod builder;
pub mod cluster;
pub mod connect;
pub mod error;
pub mod graph;
pub mod node;

pub use crate::cluster::{ClusterId, ClusterLabels};
pub use crate::connect::{ClusterHop, ConnectionMap};
pub use crate::error::{Error, Result};
pub use crate::graph::{EdgeKind, FlowGraph};
pub use crate::node::{Node, NodeId, NodeRegistry};
