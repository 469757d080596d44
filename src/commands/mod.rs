//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod build;
pub mod inspect;
pub mod utils;

// Re-export main command functions
pub use analyze::{execute_analyze, validate_analyze_args, AnalyzeArgs, AnalyzeSummary};
pub use build::{build_graph_from_traces, execute_build, validate_build_args, BuildArgs, BuildSummary};
pub use inspect::{execute_inspect, InspectArgs};
pub use utils::display_version;
