//! Structural metrics of one call graph.
//!
//! Combines the degree statistics of the digraph with its SCC partition into
//! the figures tracked from release to release.

use super::scc::SccResult;
use crate::graph::Digraph;
use serde::{Deserialize, Serialize};

/// Per-graph metrics, one report row minus the version tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetrics {
    /// Number of vertices (functions)
    pub vertices: usize,

    /// Number of arcs (calls), parallel arcs included
    pub arcs: usize,

    /// Mean out-degree
    pub avg_degree: f64,

    /// Population standard deviation of the out-degree
    pub std_dev: f64,

    /// Number of strongly connected components
    pub components: usize,

    /// Size of the largest component
    pub largest_component_size: usize,
}

/// Calculate metrics for a graph and its SCC partition
///
/// **Public** - main entry point for metrics calculation
pub fn calculate_metrics(digraph: &Digraph, scc: &SccResult) -> GraphMetrics {
    let (avg_degree, std_dev) = digraph.average_degree();

    GraphMetrics {
        vertices: digraph.vertex_count(),
        arcs: digraph.arc_count(),
        avg_degree,
        std_dev,
        components: scc.count(),
        largest_component_size: scc.largest_component_size(),
    }
}

impl GraphMetrics {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the inspect command
    pub fn summary(&self) -> String {
        format!(
            "Vertices: {} | Arcs: {} | Avg degree: {:.3} | Std dev: {:.3} | SCCs: {} | Largest SCC: {}",
            self.vertices,
            self.arcs,
            self.avg_degree,
            self.std_dev,
            self.components,
            self.largest_component_size
        )
    }

    /// True when some call cycle spans more than one function
    pub fn has_mutual_recursion(&self) -> bool {
        self.largest_component_size > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::scc::compute_scc;

    #[test]
    fn test_calculate_metrics() {
        let mut g = Digraph::new(3);
        g.add_arc(0, 1).unwrap();
        g.add_arc(1, 0).unwrap();

        let metrics = calculate_metrics(&g, &compute_scc(&g));

        assert_eq!(metrics.vertices, 3);
        assert_eq!(metrics.arcs, 2);
        assert_eq!(metrics.components, 2);
        assert_eq!(metrics.largest_component_size, 2);
        assert!(metrics.has_mutual_recursion());
    }
}
