//! Error types for graph construction and connectivity queries.
//!
//! Everything here is detected eagerly, before any traversal runs: a broken
//! description never yields a partial graph, and a broken cluster spec never
//! yields a partial assignment.

use thiserror::Error;

/// Convenience alias for sigflow results.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the connectivity core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The circuit description is absent or incomplete: a missing top name,
    /// a net endpoint that resolves to no port or pin, or an arc referencing
    /// a pin its instance does not have.
    #[error("design is not linked: {detail}")]
    UnlinkedDesign {
        /// What was missing or dangling.
        detail: String,
    },

    /// The same physical node was registered twice; the description is
    /// malformed.
    #[error("duplicate node registration: '{name}'")]
    DuplicateNode {
        /// Display name of the offending node.
        name: String,
    },

    /// A cluster spec referenced a name that is neither a port, a pin, nor
    /// an instance of the design.
    #[error("cluster spec references unknown node or instance: '{name}'")]
    UnresolvedNodeName {
        /// The offending name, verbatim from the spec.
        name: String,
    },

    /// The hop bound was zero or negative; traversal never starts.
    #[error("invalid hop bound {max_hop}: must be at least 1")]
    InvalidHopBound {
        /// The rejected bound.
        max_hop: i64,
    },
}

impl Error {
    /// Create an [`Error::UnlinkedDesign`].
    pub fn unlinked(detail: impl Into<String>) -> Self {
        Self::UnlinkedDesign {
            detail: detail.into(),
        }
    }

    /// Create an [`Error::DuplicateNode`].
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateNode { name: name.into() }
    }

    /// Create an [`Error::UnresolvedNodeName`].
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::UnresolvedNodeName { name: name.into() }
    }
}
