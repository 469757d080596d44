//! Callgraph Evolution CLI
//!
//! Builds call graphs from cflow traces and reports how their structure
//! (size, degree, strongly connected components) changes across releases.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::warn;
use std::path::PathBuf;

use callgraph_evolution::commands::{
    display_version, execute_analyze, execute_build, execute_inspect, validate_analyze_args,
    validate_build_args, AnalyzeArgs, BuildArgs, InspectArgs,
};
use callgraph_evolution::utils::config::{DEFAULT_DATA_DIR, DEFAULT_REPORT_FILE, TRACE_EXTENSION};

/// Callgraph Evolution - call-graph structure across releases
#[derive(Parser, Debug)]
#[command(name = "callgraph-evolution")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a call graph from cflow traces and save it as a Pajek file
    Build {
        /// Trace file, directory of traces, or source tree (with --sources)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the Pajek graph
        #[arg(short, long)]
        output: PathBuf,

        /// Graph label, usually the release name (defaults to the input name)
        #[arg(short, long)]
        label: Option<String>,

        /// Run cflow on every .c file under the input directory
        #[arg(long)]
        sources: bool,

        /// Extension of trace files when the input is a directory
        #[arg(long, default_value = TRACE_EXTENSION)]
        extension: String,

        /// Path to the cflow executable (searched on PATH by default)
        #[arg(long)]
        cflow: Option<PathBuf>,
    },

    /// Compute SCC and degree metrics for saved graphs
    Analyze {
        /// Graph files or directories of .net files
        #[arg(default_value = DEFAULT_DATA_DIR)]
        inputs: Vec<PathBuf>,

        /// Output path for the tab-separated report
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,

        /// Also write the report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Analyze only every N-th graph file
        #[arg(long, default_value = "1")]
        every: usize,

        /// Analyze reversed graphs (function usage instead of function calls)
        #[arg(long)]
        reverse: bool,

        /// Fill in the largest_component_size column
        #[arg(long)]
        largest: bool,

        /// Stop at the first graph that fails to load
        #[arg(long)]
        fail_fast: bool,
    },

    /// Print a summary of one saved graph
    Inspect {
        /// Path to the Pajek graph file
        #[arg(short, long)]
        file: PathBuf,

        /// Print the adjacency list of every vertex
        #[arg(long)]
        list: bool,

        /// Inspect the reversed graph
        #[arg(long)]
        reverse: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Build {
            input,
            output,
            label,
            sources,
            extension,
            cflow,
        } => {
            let args = BuildArgs {
                input,
                output,
                label,
                from_sources: sources,
                trace_extension: extension,
                cflow,
            };

            validate_build_args(&args)?;
            execute_build(args)?;
        }

        Commands::Analyze {
            inputs,
            output,
            json,
            every,
            reverse,
            largest,
            fail_fast,
        } => {
            let args = AnalyzeArgs {
                inputs,
                output,
                json,
                every,
                reverse,
                largest_component: largest,
                fail_fast,
            };

            validate_analyze_args(&args)?;
            let summary = execute_analyze(args)?;

            if !summary.failed.is_empty() {
                warn!("{} graph files could not be analyzed:", summary.failed.len());
                for path in &summary.failed {
                    warn!("  {}", path.display());
                }
            }
        }

        Commands::Inspect { file, list, reverse } => {
            execute_inspect(InspectArgs { file, list, reverse })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
