//! Configuration and constants for the CLI.

/// File extension of persisted graphs (Pajek network)
pub const GRAPH_FORMAT_EXTENSION: &str = "net";

/// Human-readable name of the interchange format
pub const GRAPH_FORMAT_NAME: &str = "Pajek";

/// Default directory holding persisted graphs
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default file name of the tabular report
pub const DEFAULT_REPORT_FILE: &str = "scc.dat";

/// Column separator of the tabular report
pub const REPORT_SEPARATOR: &str = "\t";

/// Report header, in column order
pub const REPORT_COLUMNS: &[&str] = &[
    "version_number",
    "#vertices",
    "#arcs",
    "avg_degree",
    "std_dev",
    "#components",
    "largest_component_size",
];

/// Extension of C source files handed to cflow
pub const SOURCE_EXTENSION: &str = "c";

/// Default extension of pre-generated trace files
pub const TRACE_EXTENSION: &str = "cflow";

/// Name of the call-flow analyzer executable
pub const CFLOW_PROGRAM: &str = "cflow";

// Only caller (level 0) and direct callee (level 1) are consumed, so
// deeper nesting is not requested from cflow at all.
pub const CFLOW_ARGS: &[&str] = &["--depth", "2", "--omit-arguments", "--print-level"];
