//! Strongly connected components (Kosaraju–Sharir).
//!
//! 1. Depth-first traversal of the graph records vertices in finishing order.
//! 2. The reversed graph is traversed in decreasing finishing order; each
//!    traversal started from an unvisited vertex collects one component.
//!
//! Both traversals use an explicit stack, so long call chains do not grow
//! the call stack. Component ids are handed out in the order roots are taken
//! from the finishing order, which only depends on vertex order.

use crate::graph::{Digraph, VertexId};
use log::debug;

const UNASSIGNED: usize = usize::MAX;

/// Partition of the vertices into strongly connected components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    /// Component id per vertex
    component_of: Vec<usize>,

    /// Number of components
    count: usize,
}

impl SccResult {
    /// Number of strongly connected components
    pub fn count(&self) -> usize {
        self.count
    }

    /// Component id of `v`, `None` if `v` is not a vertex
    pub fn component_of(&self, v: VertexId) -> Option<usize> {
        self.component_of.get(v).copied()
    }

    /// Component id per vertex, indexed by vertex
    pub fn ids(&self) -> &[usize] {
        &self.component_of
    }

    /// Whether `v` and `w` are mutually reachable
    pub fn same_component(&self, v: VertexId, w: VertexId) -> bool {
        match (self.component_of(v), self.component_of(w)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Members of every component, indexed by component id, ascending
    pub fn components(&self) -> Vec<Vec<VertexId>> {
        let mut components = vec![Vec::new(); self.count];
        for (v, &id) in self.component_of.iter().enumerate() {
            components[id].push(v);
        }
        components
    }

    /// Size of every component, indexed by component id
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &id in &self.component_of {
            sizes[id] += 1;
        }
        sizes
    }

    /// Size of the largest component, 0 for an empty graph
    pub fn largest_component_size(&self) -> usize {
        self.component_sizes().into_iter().max().unwrap_or(0)
    }
}

/// Compute the strongly connected components of `digraph`
///
/// **Public** - main entry point for SCC analysis
///
/// Runs in `O(V + A)` time and memory.
pub fn compute_scc(digraph: &Digraph) -> SccResult {
    let order = finishing_order(digraph.adjacency());

    // names are not needed here, so skip the full `Digraph::reverse`
    let rev = digraph.reversed_adjacency();

    let mut component_of = vec![UNASSIGNED; digraph.vertex_count()];
    let mut count = 0;
    let mut stack: Vec<VertexId> = Vec::new();

    for &root in order.iter().rev() {
        if component_of[root] != UNASSIGNED {
            continue;
        }

        component_of[root] = count;
        stack.push(root);

        while let Some(v) = stack.pop() {
            for &w in &rev[v] {
                if component_of[w] == UNASSIGNED {
                    component_of[w] = count;
                    stack.push(w);
                }
            }
        }

        count += 1;
    }

    debug!(
        "Found {} strongly connected components in {} vertices",
        count,
        component_of.len()
    );

    SccResult { component_of, count }
}

/// Vertices in the order their depth-first traversal finishes
///
/// **Private** - first pass of compute_scc
///
/// Each stack frame keeps the vertex and the position of the next neighbor
/// to visit, mirroring the recursive formulation.
fn finishing_order(adjacency: &[Vec<VertexId>]) -> Vec<VertexId> {
    let n = adjacency.len();
    let mut order = Vec::with_capacity(n);
    let mut seen = vec![false; n];
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        stack.push((start, 0));

        while let Some((v, next)) = stack.pop() {
            if let Some(&w) = adjacency[v].get(next) {
                stack.push((v, next + 1));
                if !seen[w] {
                    seen[w] = true;
                    stack.push((w, 0));
                }
            } else {
                order.push(v);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, arcs: &[(usize, usize)]) -> Digraph {
        let mut g = Digraph::new(n);
        for &(v, w) in arcs {
            g.add_arc(v, w).unwrap();
        }
        g
    }

    #[test]
    fn test_finishing_order_on_chain() {
        let g = graph(3, &[(0, 1), (1, 2)]);
        assert_eq!(finishing_order(g.adjacency()), vec![2, 1, 0]);
    }

    #[test]
    fn test_root_order_assigns_ids() {
        // 0 -> 1 -> 2: vertex 0 finishes last, so it is the first root
        let scc = compute_scc(&graph(3, &[(0, 1), (1, 2)]));
        assert_eq!(scc.ids(), &[0, 1, 2]);
    }

    #[test]
    fn test_self_loop_is_singleton() {
        let scc = compute_scc(&graph(2, &[(0, 0), (0, 1)]));
        assert_eq!(scc.count(), 2);
        assert!(!scc.same_component(0, 1));
    }

    #[test]
    fn test_empty_graph() {
        let scc = compute_scc(&Digraph::new(0));
        assert_eq!(scc.count(), 0);
        assert_eq!(scc.largest_component_size(), 0);
        assert!(scc.components().is_empty());
        assert_eq!(scc.component_of(0), None);
    }
}
