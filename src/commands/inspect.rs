//! Inspect command: summary and adjacency listing of one persisted graph.

use crate::analysis::{calculate_metrics, compute_scc};
use crate::graph::{DegreeDirection, Digraph};
use crate::output::read_pajek;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Clone, Default)]
pub struct InspectArgs {
    /// Path to the Pajek graph file
    pub file: PathBuf,

    /// Print the adjacency list of every vertex
    pub list: bool,

    /// Inspect the reversed graph
    pub reverse: bool,
}

/// Execute the inspect command
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    println!("Inspecting graph: {}", args.file.display());

    let mut digraph = read_pajek(&args.file)
        .with_context(|| format!("Failed to load graph {}", args.file.display()))?;
    if args.reverse {
        digraph = digraph.reverse();
    }

    let scc = compute_scc(&digraph);
    let metrics = calculate_metrics(&digraph, &scc);

    println!("✓ Valid {} graph", crate::utils::config::GRAPH_FORMAT_NAME);
    println!("  Label: {}", digraph.label().unwrap_or("-"));
    println!("  {}", metrics.summary());
    println!(
        "  Out-degree: {}",
        digraph.degree_stats(DegreeDirection::Out).summary()
    );
    println!(
        "  In-degree:  {}",
        digraph.degree_stats(DegreeDirection::In).summary()
    );

    if args.list {
        println!();
        print!("{}", format_adjacency(&digraph));
    }

    Ok(())
}

/// One `v: w1 w2 ...` line per vertex, in index order
pub fn format_adjacency(digraph: &Digraph) -> String {
    let mut out = String::new();
    for v in digraph.vertices() {
        out.push_str(&v.to_string());
        out.push(':');
        for w in digraph.neighbors(v).into_iter().flatten() {
            out.push(' ');
            out.push_str(&w.to_string());
        }
        out.push('\n');
    }
    out
}
