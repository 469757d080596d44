//! Directed graph with dense vertex indices and an optional name table.
//!
//! Vertices are `0..V`. Each vertex owns an ordered out-adjacency list, so
//! arcs come back in the order they were inserted. Parallel arcs and
//! self-loops are kept as-is.

use super::stats::{DegreeDirection, DegreeStats};
use crate::utils::error::GraphError;
use std::collections::HashMap;
use std::ops::Range;

/// Dense vertex index in `[0, V)`
pub type VertexId = usize;

/// Iterator over the out-neighbors of one vertex, in insertion order
pub type Neighbors<'a> = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

/// Call graph: vertices are functions, an arc `(v, w)` means `v` calls `w`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    /// Optional label (the version tag of the analyzed release)
    label: Option<String>,

    /// Out-adjacency per vertex
    adjacency: Vec<Vec<VertexId>>,

    /// Index -> name
    names: Vec<Option<String>>,

    /// Name -> index
    index: HashMap<String, VertexId>,

    /// Total number of adjacency entries, kept in step with `add_arc`
    arc_count: usize,
}

impl Digraph {
    /// Create a graph with `vertex_count` unnamed vertices and no arcs
    pub fn new(vertex_count: usize) -> Self {
        Self {
            label: None,
            adjacency: vec![Vec::new(); vertex_count],
            names: vec![None; vertex_count],
            index: HashMap::with_capacity(vertex_count),
            arc_count: 0,
        }
    }

    /// Builder-style label setter
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of vertices (`V`)
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of arcs (`A`), parallel arcs included
    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    /// Give vertex `v` a name
    ///
    /// **Public** - first pass of graph construction
    ///
    /// # Errors
    /// * `GraphError::OutOfRange` - `v` is not a vertex
    /// * `GraphError::AlreadyNamed` - `v` already carries a name
    /// * `GraphError::DuplicateName` - another vertex already uses `name`
    pub fn name_vertex(&mut self, v: VertexId, name: impl Into<String>) -> Result<(), GraphError> {
        self.check(v)?;
        let name = name.into();

        if let Some(existing) = &self.names[v] {
            return Err(GraphError::AlreadyNamed {
                index: v,
                existing: existing.clone(),
            });
        }
        if let Some(&other) = self.index.get(&name) {
            return Err(GraphError::DuplicateName { name, index: other });
        }

        self.index.insert(name.clone(), v);
        self.names[v] = Some(name);
        Ok(())
    }

    /// Resolve a function name to its vertex index
    ///
    /// # Errors
    /// * `GraphError::MissingName` - no vertex carries `name`
    pub fn vertex_index(&self, name: &str) -> Result<VertexId, GraphError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::MissingName(name.to_string()))
    }

    /// Name of vertex `v`, if it has one
    pub fn vertex_name(&self, v: VertexId) -> Option<&str> {
        self.names.get(v).and_then(|n| n.as_deref())
    }

    /// Append the arc `from -> to` to the adjacency of `from`
    ///
    /// **Public** - second pass of graph construction
    ///
    /// # Errors
    /// * `GraphError::OutOfRange` - either endpoint is not a vertex
    pub fn add_arc(&mut self, from: VertexId, to: VertexId) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;
        self.adjacency[from].push(to);
        self.arc_count += 1;
        Ok(())
    }

    /// All vertex indices in ascending order
    ///
    /// The range is cheap to clone, so iteration can be restarted freely.
    pub fn vertices(&self) -> Range<VertexId> {
        0..self.vertex_count()
    }

    /// Out-neighbors of `v`, in insertion order
    ///
    /// # Errors
    /// * `GraphError::OutOfRange` - `v` is not a vertex
    pub fn neighbors(&self, v: VertexId) -> Result<Neighbors<'_>, GraphError> {
        self.check(v)?;
        Ok(self.adjacency[v].iter().copied())
    }

    /// Number of arcs leaving `v`
    pub fn out_degree(&self, v: VertexId) -> Result<usize, GraphError> {
        self.check(v)?;
        Ok(self.adjacency[v].len())
    }

    /// Out-degree of every vertex, indexed by vertex
    pub fn out_degrees(&self) -> Vec<usize> {
        self.adjacency.iter().map(Vec::len).collect()
    }

    /// In-degree of every vertex, indexed by vertex
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertex_count()];
        for adj in &self.adjacency {
            for &w in adj {
                degrees[w] += 1;
            }
        }
        degrees
    }

    /// Average out-degree and its population standard deviation
    ///
    /// **Public** - the two degree columns of the report
    ///
    /// Average is `A / V`; both values are 0 for an empty graph and the
    /// standard deviation is 0 when `V <= 1`.
    pub fn average_degree(&self) -> (f64, f64) {
        let stats = self.degree_stats(DegreeDirection::Out);
        (stats.mean, stats.std_dev)
    }

    /// Full degree statistics in the requested direction
    pub fn degree_stats(&self, direction: DegreeDirection) -> DegreeStats {
        match direction {
            DegreeDirection::Out => DegreeStats::from_degrees(&self.out_degrees()),
            DegreeDirection::In => DegreeStats::from_degrees(&self.in_degrees()),
        }
    }

    /// New graph with every arc flipped
    ///
    /// Names and label are carried over. Useful to look at "who calls this
    /// function" instead of "what does this function call".
    pub fn reverse(&self) -> Digraph {
        Digraph {
            label: self.label.clone(),
            adjacency: self.reversed_adjacency(),
            names: self.names.clone(),
            index: self.index.clone(),
            arc_count: self.arc_count,
        }
    }

    /// Raw adjacency lists, for algorithms that have already validated indices
    pub(crate) fn adjacency(&self) -> &[Vec<VertexId>] {
        &self.adjacency
    }

    /// In-adjacency per vertex, sources listed in ascending vertex order
    pub(crate) fn reversed_adjacency(&self) -> Vec<Vec<VertexId>> {
        let mut reversed = vec![Vec::new(); self.vertex_count()];
        for (v, adj) in self.adjacency.iter().enumerate() {
            for &w in adj {
                reversed[w].push(v);
            }
        }
        reversed
    }

    fn check(&self, v: VertexId) -> Result<(), GraphError> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index: v,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
