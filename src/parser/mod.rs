//! Call-flow trace parsing.
//!
//! This module handles:
//! - Classifying cflow output lines by nesting level
//! - Tracking the current caller across lines
//! - Collecting caller/callee pairs for the graph builder

pub mod cflow;

// Re-export main types
pub use cflow::{parse_cflow_trace, ParsedTrace};
