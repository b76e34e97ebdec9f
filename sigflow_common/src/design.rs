//! The linked circuit description model.
//!
//! A [`Design`] is the boundary contract between sigflow and whatever produced
//! the circuit: a netlist parser, a synthesis flow, or a test fixture. It
//! enumerates top-level ports, instances with their pins and internal timing
//! arcs, and nets with explicit driver/load endpoint lists. Net and arc
//! endpoints are plain names: a bare port name (`"in1"`) or an
//! instance-qualified pin name (`"u1/a"`).
//!
//! The model is deliberately permissive: it carries whatever the producer
//! handed over, and the graph core validates it eagerly at build time.

use serde::{Deserialize, Serialize};

/// Direction of a port or pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinDirection {
    /// Signal flows into the owner.
    Input,
    /// Signal flows out of the owner.
    Output,
    /// Bidirectional.
    Inout,
}

/// A top-level port of the design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Port name, unique among ports.
    pub name: String,
    /// Signal direction as seen from outside the design.
    pub direction: PinDirection,
}

/// A pin on an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// Pin name, unique within the owning instance.
    pub name: String,
    /// Signal direction as seen from the instance.
    pub direction: PinDirection,
}

/// An internal timing arc of an instance, from an input pin to an output pin
/// it influences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingArc {
    /// Source pin name (an input pin of the instance).
    pub from: String,
    /// Destination pin name (an output pin of the instance).
    pub to: String,
}

/// A placed instance: a named cell with pins and internal arcs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance name, unique among instances.
    pub name: String,
    /// All pins of the instance.
    pub pins: Vec<Pin>,
    /// Input-to-output arcs through the instance.
    pub arcs: Vec<TimingArc>,
}

/// A net connecting driver endpoints to load endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Net {
    /// Net name, for diagnostics only.
    pub name: String,
    /// Driving endpoints (`"port"` or `"inst/pin"`).
    pub drivers: Vec<String>,
    /// Loaded endpoints (`"port"` or `"inst/pin"`).
    pub loads: Vec<String>,
}

/// A linked circuit description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Design {
    /// Top module name.
    pub top: String,
    /// Top-level ports.
    pub ports: Vec<Port>,
    /// Instances.
    pub instances: Vec<Instance>,
    /// Nets.
    pub nets: Vec<Net>,
}

impl Design {
    /// Start building a design with the given top name.
    pub fn builder(top: impl Into<String>) -> DesignBuilder {
        DesignBuilder {
            design: Design {
                top: top.into(),
                ..Design::default()
            },
        }
    }
}

/// Fluent constructor for [`Design`] values, used by tests and by callers
/// that assemble descriptions in code rather than loading them.
#[derive(Debug, Clone)]
pub struct DesignBuilder {
    design: Design,
}

impl DesignBuilder {
    /// Add a top-level port.
    pub fn port(mut self, name: &str, direction: PinDirection) -> Self {
        self.design.ports.push(Port {
            name: name.to_string(),
            direction,
        });
        self
    }

    /// Add a top-level input port.
    pub fn input(self, name: &str) -> Self {
        self.port(name, PinDirection::Input)
    }

    /// Add a top-level output port.
    pub fn output(self, name: &str) -> Self {
        self.port(name, PinDirection::Output)
    }

    /// Add an instance with explicit pins and arcs.
    pub fn instance(
        mut self,
        name: &str,
        pins: &[(&str, PinDirection)],
        arcs: &[(&str, &str)],
    ) -> Self {
        self.design.instances.push(Instance {
            name: name.to_string(),
            pins: pins
                .iter()
                .map(|&(pin, direction)| Pin {
                    name: pin.to_string(),
                    direction,
                })
                .collect(),
            arcs: arcs
                .iter()
                .map(|&(from, to)| TimingArc {
                    from: from.to_string(),
                    to: to.to_string(),
                })
                .collect(),
        });
        self
    }

    /// Add a combinational cell: every input arcs to every output.
    pub fn cell(mut self, name: &str, inputs: &[&str], outputs: &[&str]) -> Self {
        let mut pins = Vec::with_capacity(inputs.len() + outputs.len());
        let mut arcs = Vec::with_capacity(inputs.len() * outputs.len());
        for &input in inputs {
            pins.push(Pin {
                name: input.to_string(),
                direction: PinDirection::Input,
            });
        }
        for &output in outputs {
            pins.push(Pin {
                name: output.to_string(),
                direction: PinDirection::Output,
            });
            for &input in inputs {
                arcs.push(TimingArc {
                    from: input.to_string(),
                    to: output.to_string(),
                });
            }
        }
        self.design.instances.push(Instance {
            name: name.to_string(),
            pins,
            arcs,
        });
        self
    }

    /// Add a net with explicit driver and load endpoint names.
    pub fn net(mut self, name: &str, drivers: &[&str], loads: &[&str]) -> Self {
        self.design.nets.push(Net {
            name: name.to_string(),
            drivers: drivers.iter().map(|s| s.to_string()).collect(),
            loads: loads.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    /// Finish and return the description.
    pub fn finish(self) -> Design {
        self.design
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_assembles_ports_instances_and_nets() {
        let design = Design::builder("top")
            .input("a")
            .output("y")
            .cell("g1", &["a"], &["z"])
            .net("n1", &["a"], &["g1/a"])
            .net("n2", &["g1/z"], &["y"])
            .finish();

        assert_eq!(design.top, "top");
        assert_eq!(design.ports.len(), 2);
        assert_eq!(design.instances.len(), 1);
        assert_eq!(design.nets.len(), 2);
        assert_eq!(design.instances[0].pins.len(), 2);
        assert_eq!(
            design.instances[0].arcs,
            vec![TimingArc {
                from: "a".to_string(),
                to: "z".to_string()
            }]
        );
    }

    #[test]
    fn cell_arcs_cover_the_input_output_cross_product() {
        let design = Design::builder("top")
            .cell("g1", &["a", "b"], &["x", "y"])
            .finish();

        let arcs = &design.instances[0].arcs;
        assert_eq!(arcs.len(), 4);
        assert!(arcs.iter().any(|arc| arc.from == "b" && arc.to == "x"));
    }

    #[test]
    fn design_round_trips_through_json() {
        let design = Design::builder("top")
            .input("in1")
            .cell("u1", &["a"], &["z"])
            .net("n1", &["in1"], &["u1/a"])
            .finish();

        let json = serde_json::to_string(&design).unwrap();
        let back: Design = serde_json::from_str(&json).unwrap();
        assert_eq!(design, back);
    }
}
