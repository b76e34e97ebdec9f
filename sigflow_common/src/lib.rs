//! Shared types for the sigflow workspace.
//!
//! This crate provides the linked circuit description model consumed by the
//! graph core, a builder for constructing descriptions programmatically, and
//! common test fixtures used across the sigflow project.

pub mod design;
mod test_cases;

pub use crate::design::*;
pub use crate::test_cases::*;
