//! Structural analysis of call graphs.
//!
//! This module computes:
//! - Strongly connected components (Kosaraju–Sharir)
//! - Per-graph metrics for the evolution report

pub mod metrics;
pub mod scc;

// Re-export main types and functions
pub use metrics::{calculate_metrics, GraphMetrics};
pub use scc::{compute_scc, SccResult};
