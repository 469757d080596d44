//! Callgraph Evolution
//!
//! Extracts function-call graphs from cflow traces, persists them as Pajek
//! networks, and computes the structural metrics (degree statistics,
//! strongly connected components) used to follow a C codebase's call
//! structure from release to release.
//!
//! This crate provides the core implementation for the
//! `callgraph-evolution` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! callgraph-evolution build --input linux-1.0 --sources --output data/linux-1.0.net
//! callgraph-evolution analyze data --output scc.dat
//! ```
//!
//! Or as a library:
//!
//! ```
//! use callgraph_evolution::analysis::compute_scc;
//! use callgraph_evolution::commands::build_graph_from_traces;
//!
//! let trace = "{   0} foo()\n{   1}     bar()\n{   0} bar()\n{   1}     foo()\n";
//! let graph = build_graph_from_traces([trace], Some("demo-1.0")).unwrap();
//! assert_eq!(compute_scc(&graph).count(), 1);
//! ```

pub mod analysis;
pub mod cflow;
pub mod commands;
pub mod graph;
pub mod output;
pub mod parser;
pub mod utils;
