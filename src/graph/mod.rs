//! Call-graph data structure and its construction.
//!
//! - `digraph`: dense-index directed graph with a name table
//! - `builder`: two-phase construction from parsed traces
//! - `stats`: degree distribution statistics

pub mod builder;
pub mod digraph;
pub mod stats;

// Re-export main types
pub use builder::GraphBuilder;
pub use digraph::{Digraph, Neighbors, VertexId};
pub use stats::{DegreeDirection, DegreeStats};
