//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Collects persisted graphs (files, or `.net` files under directories)
//! 2. Loads each graph (optionally reversed)
//! 3. Computes strongly connected components and degree statistics
//! 4. Writes one report row per graph

use super::utils::{collect_files, sample_every};
use crate::analysis::compute_scc;
use crate::output::{read_pajek, validate_path, ReportRow, StatsReport};
use crate::utils::config::{DEFAULT_DATA_DIR, DEFAULT_REPORT_FILE, GRAPH_FORMAT_EXTENSION};
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Graph files or directories containing them
    pub inputs: Vec<PathBuf>,

    /// Output path for the tab-separated report
    pub output: PathBuf,

    /// Output path for a JSON rendering of the report (optional)
    pub json: Option<PathBuf>,

    /// Analyze only every N-th graph file
    pub every: usize,

    /// Analyze the reversed graph ("who calls" instead of "calls whom")
    pub reverse: bool,

    /// Fill in the largest component size column
    pub largest_component: bool,

    /// Abort the batch on the first graph that fails
    pub fail_fast: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            inputs: vec![PathBuf::from(DEFAULT_DATA_DIR)],
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            json: None,
            every: 1,
            reverse: false,
            largest_component: false,
            fail_fast: false,
        }
    }
}

/// Outcome of an analyze run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeSummary {
    pub analyzed: usize,
    pub failed: Vec<PathBuf>,
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_analyze_args(args: &AnalyzeArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one graph file or directory is required");
    }

    for input in &args.inputs {
        if !input.exists() {
            anyhow::bail!("Input path does not exist: {}", input.display());
        }
    }

    if args.every == 0 {
        anyhow::bail!("--every must be greater than 0");
    }

    validate_path(&args.output).context("Invalid report path")?;
    if let Some(json) = &args.json {
        validate_path(json).context("Invalid JSON report path")?;
    }

    Ok(())
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// A graph that cannot be loaded is reported with its path and skipped,
/// unless `fail_fast` is set. The report is written once, after every
/// graph has been processed.
pub fn execute_analyze(args: AnalyzeArgs) -> Result<AnalyzeSummary> {
    let start_time = Instant::now();

    let files = sample_every(collect_graph_files(&args.inputs), args.every);
    info!("Analyzing {} graph files", files.len());

    let mut report = StatsReport::new().with_largest_component(args.largest_component);
    let mut summary = AnalyzeSummary::default();

    for file in &files {
        info!("> reading {}", file.display());

        match analyze_file(file, args.reverse) {
            Ok(row) => {
                debug!("{}: {}", row.version, row.metrics.summary());
                report.push(row);
                summary.analyzed += 1;
            }
            Err(e) if args.fail_fast => {
                return Err(e.context(format!("Analysis aborted at {}", file.display())));
            }
            Err(e) => {
                error!("Skipping {}: {:#}", file.display(), e);
                summary.failed.push(file.clone());
            }
        }
    }

    report
        .write_tsv(&args.output)
        .context("Failed to write report")?;

    if let Some(json) = &args.json {
        report.write_json(json).context("Failed to write JSON report")?;
    }

    info!(
        "Analysis completed in {:.2}s: {} graphs, {} failed",
        start_time.elapsed().as_secs_f64(),
        summary.analyzed,
        summary.failed.len()
    );

    Ok(summary)
}

/// Load one graph and compute its report row
///
/// **Public** - single unit of work of the analyze command
pub fn analyze_file(path: &Path, reverse: bool) -> Result<ReportRow> {
    let mut digraph = read_pajek(path)
        .with_context(|| format!("Failed to load graph {}", path.display()))?;

    if reverse {
        digraph = digraph.reverse();
    }

    let scc = compute_scc(&digraph);
    let version = extract_version(path, digraph.label());

    Ok(ReportRow::from_analysis(version, &digraph, &scc))
}

/// Version tag of a graph file
///
/// Taken from file names like `linux-2.6.11.net`; falls back to the graph
/// label, then to the bare file stem.
pub fn extract_version(path: &Path, label: Option<&str>) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(version) = version_from_name(&stem) {
        return version;
    }
    if let Some(version) = label.and_then(version_from_name) {
        return version;
    }

    warn!("No version number found in {}, using file name", path.display());
    stem
}

/// Match `<name>-<version>` and return the version part
fn version_from_name(name: &str) -> Option<String> {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z][\w+.-]*?-v?(\d+(?:\.\d+)*(?:[-.]\w+)*)$")
            .expect("version pattern is valid")
    });

    re.captures(name).map(|caps| caps[1].to_string())
}

/// Expand directories into their graph files, keeping argument order
fn collect_graph_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    inputs
        .iter()
        .flat_map(|input| {
            if input.is_dir() {
                collect_files(input, GRAPH_FORMAT_EXTENSION)
            } else {
                vec![input.clone()]
            }
        })
        .collect()
}
