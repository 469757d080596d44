//! Two-phase construction of a `Digraph` from parsed traces.
//!
//! Phase 1 accumulates an insertion-ordered, name-keyed registry of
//! functions and their callee names across every parsed file. Phase 2
//! sizes the graph from the closed registry, names every vertex, then
//! resolves each recorded call to an arc between dense indices.

use super::digraph::Digraph;
use crate::parser::ParsedTrace;
use crate::utils::error::GraphError;
use log::debug;
use std::collections::HashMap;

/// Accumulates caller/callee names until the vertex count is known
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// Function names in first-discovery order
    names: Vec<String>,

    /// Name -> position in `names`
    positions: HashMap<String, usize>,

    /// Callee names per registered function, aligned with `names`
    callees: Vec<Vec<String>>,

    /// Label copied onto the built graph
    label: Option<String>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style label setter
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Register a function, keeping its first-discovery position
    pub fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(&pos) = self.positions.get(name) {
            return pos;
        }
        let pos = self.names.len();
        self.names.push(name.to_string());
        self.positions.insert(name.to_string(), pos);
        self.callees.push(Vec::new());
        pos
    }

    /// Record that `caller` calls `callee`
    ///
    /// Both names are registered first, so a callee that never appears as a
    /// caller still becomes a vertex. Repeated calls are recorded again.
    pub fn add_call(&mut self, caller: &str, callee: &str) {
        let from = self.add_vertex(caller);
        self.add_vertex(callee);
        self.callees[from].push(callee.to_string());
    }

    /// Merge everything one parsed trace discovered
    pub fn absorb(&mut self, trace: &ParsedTrace) {
        for name in &trace.functions {
            self.add_vertex(name);
        }
        for (caller, callee) in &trace.calls {
            self.add_call(caller, callee);
        }
    }

    /// Distinct functions registered so far
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Calls recorded so far
    pub fn call_count(&self) -> usize {
        self.callees.iter().map(Vec::len).sum()
    }

    /// Produce the digraph
    ///
    /// **Public** - main entry point for graph construction
    ///
    /// Vertex indices follow first-discovery order, so identical inputs
    /// always produce identical graphs.
    ///
    /// # Errors
    /// * `GraphError::MissingName` - a call references an unregistered name
    /// * `GraphError::DuplicateName` - the registry holds a name twice
    pub fn build(self) -> Result<Digraph, GraphError> {
        let mut digraph = Digraph::new(self.names.len());
        if let Some(label) = self.label {
            digraph.set_label(label);
        }

        // First pass: vertices' names
        for (v, name) in self.names.iter().enumerate() {
            digraph.name_vertex(v, name.as_str())?;
        }

        // Second pass: adjacencies
        for (name, callees) in self.names.iter().zip(&self.callees) {
            let v = digraph.vertex_index(name)?;
            for callee in callees {
                let w = digraph.vertex_index(callee)?;
                digraph.add_arc(v, w)?;
            }
        }

        debug!(
            "Built digraph: {} vertices, {} arcs",
            digraph.vertex_count(),
            digraph.arc_count()
        );

        Ok(digraph)
    }
}
