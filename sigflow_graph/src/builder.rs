//! Data-flow graph construction from a linked design description.

use itertools::iproduct;
use sigflow_common::Design;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{EdgeKind, FlowGraph};
use crate::node::{NodeId, NodeRegistry};

impl FlowGraph {
    /// Build the directed data-flow graph for a linked design.
    ///
    /// Every top-level port and every instance pin becomes a node. Every net
    /// contributes one `Net` edge from each driver endpoint to each load
    /// endpoint, and every instance contributes one `Arc` edge per declared
    /// input-to-output timing arc. Sequential cells are not cut points:
    /// their arcs pass through like any other, giving a purely structural
    /// connectivity view.
    ///
    /// Validation is eager. An empty top name, a net endpoint that resolves
    /// to no registered node, or an arc referencing a pin its instance does
    /// not have fails with [`Error::UnlinkedDesign`] before any graph
    /// escapes; a repeated port or pin name fails with
    /// [`Error::DuplicateNode`].
    pub fn build(design: &Design) -> Result<Self> {
        if design.top.is_empty() {
            return Err(Error::unlinked("design has no top module name"));
        }

        // 0: Registering one node per port and per instance pin
        let registry = register_nodes(design)?;

        // 1: Wiring net edges (driver -> load)
        let mut adjacency = Adjacency::new(registry.len());
        connect_nets(design, &registry, &mut adjacency)?;

        // 2: Wiring instance arc edges (input pin -> output pin)
        connect_arcs(design, &registry, &mut adjacency)?;

        debug!(
            top = %design.top,
            nodes = registry.len(),
            edges = adjacency.edge_count,
            "built data-flow graph"
        );
        Ok(FlowGraph::new(registry, adjacency.succs, adjacency.edge_count))
    }
}

struct Adjacency {
    succs: Vec<Vec<(NodeId, EdgeKind)>>,
    edge_count: usize,
}

impl Adjacency {
    fn new(nodes: usize) -> Self {
        Adjacency {
            succs: vec![Vec::new(); nodes],
            edge_count: 0,
        }
    }

    fn add(&mut self, src: NodeId, dst: NodeId, kind: EdgeKind) {
        // Self-loops carry no hop information.
        if src == dst {
            return;
        }
        self.succs[src.index()].push((dst, kind));
        self.edge_count += 1;
    }
}

fn register_nodes(design: &Design) -> Result<NodeRegistry> {
    let mut registry = NodeRegistry::default();
    for port in &design.ports {
        registry.register(&port.name, port.direction, None)?;
    }
    for instance in &design.instances {
        for pin in &instance.pins {
            let name = format!("{}/{}", instance.name, pin.name);
            registry.register(&name, pin.direction, Some(&instance.name))?;
        }
    }
    Ok(registry)
}

fn connect_nets(design: &Design, registry: &NodeRegistry, adjacency: &mut Adjacency) -> Result<()> {
    for net in &design.nets {
        let drivers = resolve_endpoints(registry, &net.name, &net.drivers)?;
        let loads = resolve_endpoints(registry, &net.name, &net.loads)?;
        for (&driver, &load) in iproduct!(&drivers, &loads) {
            adjacency.add(driver, load, EdgeKind::Net);
        }
    }
    Ok(())
}

fn resolve_endpoints(
    registry: &NodeRegistry,
    net: &str,
    endpoints: &[String],
) -> Result<Vec<NodeId>> {
    endpoints
        .iter()
        .map(|endpoint| {
            registry.lookup(endpoint).ok_or_else(|| {
                Error::unlinked(format!("net '{net}' references unknown endpoint '{endpoint}'"))
            })
        })
        .collect()
}

fn connect_arcs(design: &Design, registry: &NodeRegistry, adjacency: &mut Adjacency) -> Result<()> {
    for instance in &design.instances {
        for arc in &instance.arcs {
            let from = resolve_pin(registry, &instance.name, &arc.from)?;
            let to = resolve_pin(registry, &instance.name, &arc.to)?;
            adjacency.add(from, to, EdgeKind::Arc);
        }
    }
    Ok(())
}

fn resolve_pin(registry: &NodeRegistry, instance: &str, pin: &str) -> Result<NodeId> {
    registry.lookup(&format!("{instance}/{pin}")).ok_or_else(|| {
        Error::unlinked(format!("instance '{instance}' arc references unknown pin '{pin}'"))
    })
}
