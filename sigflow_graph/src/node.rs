//! Node identities and the name registry.

use std::collections::HashMap;
use std::fmt;

use sigflow_common::PinDirection;

use crate::error::{Error, Result};

/// Dense identifier for a node in a flow graph.
///
/// Ids are assigned in registration order, are stable for the lifetime of the
/// graph, and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index as u32)
    }

    /// Position of this node in the registry's arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A signal endpoint: a top-level port or an instance pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The node's id.
    pub id: NodeId,
    /// Display name: the bare port name, or `"inst/pin"`.
    pub name: String,
    /// Signal direction.
    pub direction: PinDirection,
    /// Owning instance, `None` for top-level ports.
    pub owner: Option<String>,
}

/// Name-to-id registry over all signal endpoints of a design.
///
/// Nodes live in a dense arena indexed by [`NodeId`]; lookups by display name
/// or by owning instance are O(1) after construction.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeId>,
    by_owner: HashMap<String, Vec<NodeId>>,
}

impl NodeRegistry {
    /// Register a new node, failing if the name is already taken.
    pub fn register(
        &mut self,
        name: &str,
        direction: PinDirection,
        owner: Option<&str>,
    ) -> Result<NodeId> {
        if self.by_name.contains_key(name) {
            return Err(Error::duplicate(name));
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            id,
            name: name.to_string(),
            direction,
            owner: owner.map(str::to_string),
        });
        self.by_name.insert(name.to_string(), id);
        if let Some(owner) = owner {
            self.by_owner.entry(owner.to_string()).or_default().push(id);
        }
        Ok(id)
    }

    /// Resolve a display name to an id.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// All pins registered under the given instance, in registration order.
    pub fn owned_by(&self, instance: &str) -> &[NodeId] {
        self.by_owner
            .get(instance)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// The node record for an id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
