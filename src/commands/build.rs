//! Build command implementation.
//!
//! The build command:
//! 1. Collects call-flow traces (trace files, or cflow run on C sources)
//! 2. Parses each trace
//! 3. Accumulates callers and callees across files
//! 4. Builds one digraph
//! 5. Writes it as a Pajek file

use super::utils::collect_files;
use crate::cflow::CflowRunner;
use crate::graph::{Digraph, GraphBuilder};
use crate::output::{validate_path, write_pajek};
use crate::parser::parse_cflow_trace;
use crate::utils::config::{SOURCE_EXTENSION, TRACE_EXTENSION};
use crate::utils::error::GraphError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Trace file, directory of trace files, or (with `from_sources`) a source tree
    pub input: PathBuf,

    /// Output path for the Pajek graph
    pub output: PathBuf,

    /// Graph label (defaults to the input's file name)
    pub label: Option<String>,

    /// Run cflow on every C file under `input` instead of reading traces
    pub from_sources: bool,

    /// Extension of trace files when reading a directory (a leading `.` is ignored)
    pub trace_extension: String,

    /// Explicit cflow executable; `PATH` is searched when unset
    pub cflow: Option<PathBuf>,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("."),
            output: PathBuf::from("graph.net"),
            label: None,
            from_sources: false,
            trace_extension: TRACE_EXTENSION.to_string(),
            cflow: None,
        }
    }
}

/// Outcome of a build run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub files_parsed: usize,
    pub files_skipped: usize,
    pub skipped_lines: usize,
    pub vertices: usize,
    pub arcs: usize,
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
pub fn validate_build_args(args: &BuildArgs) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input path does not exist: {}", args.input.display());
    }

    if args.from_sources && !args.input.is_dir() {
        anyhow::bail!("--sources requires a directory: {}", args.input.display());
    }

    if trace_extension(args).is_empty() {
        anyhow::bail!("Trace extension cannot be empty");
    }

    if let Some(cflow) = &args.cflow {
        if !args.from_sources {
            anyhow::bail!("--cflow is only used together with --sources");
        }
        if !cflow.is_file() {
            anyhow::bail!("cflow executable does not exist: {}", cflow.display());
        }
    }

    validate_path(&args.output).context("Invalid output path")?;

    Ok(())
}

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// A trace that cannot be produced or read is logged and skipped; the build
/// fails only if no trace at all could be parsed or the graph is invalid.
pub fn execute_build(args: BuildArgs) -> Result<BuildSummary> {
    let start_time = Instant::now();
    let mut summary = BuildSummary::default();

    let label = args.label.clone().unwrap_or_else(|| default_label(&args.input));
    let mut builder = GraphBuilder::new().with_label(label.clone());

    info!("Building call graph \"{}\" from {}", label, args.input.display());

    if args.from_sources {
        let runner = match &args.cflow {
            Some(program) => CflowRunner::with_program(program),
            None => CflowRunner::locate(),
        }
        .context("Cannot run cflow")?;
        let sources = collect_files(&args.input, SOURCE_EXTENSION);
        info!("Step 1/3: Tracing {} source files...", sources.len());

        for source in &sources {
            match runner.trace_file(source) {
                Ok(text) => absorb_trace(&mut builder, &text, &mut summary),
                Err(e) => {
                    warn!("Skipping {}: {}", source.display(), e);
                    summary.files_skipped += 1;
                }
            }
        }
    } else {
        let traces = if args.input.is_file() {
            vec![args.input.clone()]
        } else {
            collect_files(&args.input, trace_extension(&args))
        };
        info!("Step 1/3: Parsing {} trace files...", traces.len());

        for trace in &traces {
            match std::fs::read_to_string(trace) {
                Ok(text) => absorb_trace(&mut builder, &text, &mut summary),
                Err(e) => {
                    warn!("Skipping {}: {}", trace.display(), e);
                    summary.files_skipped += 1;
                }
            }
        }
    }

    if summary.files_parsed == 0 {
        anyhow::bail!("No call-flow trace could be parsed from {}", args.input.display());
    }

    info!(
        "Step 2/3: Building digraph from {} functions, {} calls...",
        builder.vertex_count(),
        builder.call_count()
    );
    let digraph = builder
        .build()
        .with_context(|| format!("Invalid call graph for {}", args.input.display()))?;

    info!("Step 3/3: Writing graph...");
    write_pajek(&digraph, &args.output)
        .with_context(|| format!("Failed to write graph {}", args.output.display()))?;

    summary.vertices = digraph.vertex_count();
    summary.arcs = digraph.arc_count();

    info!(
        "Build completed in {:.2}s: {} vertices, {} arcs ({} files, {} skipped)",
        start_time.elapsed().as_secs_f64(),
        summary.vertices,
        summary.arcs,
        summary.files_parsed,
        summary.files_skipped
    );

    Ok(summary)
}

/// Build a digraph straight from in-memory trace texts
///
/// **Public** - library shortcut for callers that already hold cflow output
pub fn build_graph_from_traces<'a>(
    traces: impl IntoIterator<Item = &'a str>,
    label: Option<&str>,
) -> Result<Digraph, GraphError> {
    let mut builder = GraphBuilder::new();
    if let Some(label) = label {
        builder = builder.with_label(label);
    }
    for text in traces {
        builder.absorb(&parse_cflow_trace(text));
    }
    builder.build()
}

/// Parse one trace and fold it into the builder
///
/// **Private** - internal helper for execute_build
fn absorb_trace(builder: &mut GraphBuilder, text: &str, summary: &mut BuildSummary) {
    let parsed = parse_cflow_trace(text);
    debug!(
        "Trace: {} functions, {} calls",
        parsed.functions.len(),
        parsed.calls.len()
    );
    summary.skipped_lines += parsed.skipped_lines;
    summary.files_parsed += 1;
    builder.absorb(&parsed);
}

/// `--extension` without its leading dot, as `Path::extension` reports it
fn trace_extension(args: &BuildArgs) -> &str {
    args.trace_extension.trim_start_matches('.')
}

/// Label derived from the input path (e.g. `linux-2.6.11`)
fn default_label(input: &Path) -> String {
    let name = if input.is_file() {
        input.file_stem()
    } else {
        input.file_name()
    };
    name.map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "callgraph".to_string())
}
