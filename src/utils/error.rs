//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the digraph itself
///
/// Every variant is a data-integrity violation: the graph being built or
/// loaded cannot be trusted and its processing should be abandoned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex index {index} out of range (graph has {vertex_count} vertices)")]
    OutOfRange { index: usize, vertex_count: usize },

    #[error("Unknown vertex: \"{0}\"")]
    MissingName(String),

    #[error("Vertex {index} is already named \"{existing}\"")]
    AlreadyNamed { index: usize, existing: String },

    #[error("Name \"{name}\" already belongs to vertex {index}")]
    DuplicateName { name: String, index: usize },
}

/// Errors that can occur while reading or writing the Pajek interchange format
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing *Vertices header")]
    MissingHeader,

    #[error("Header declares {declared} vertices but {found} vertex lines were read")]
    VertexCountMismatch { declared: usize, found: usize },

    #[error("Line {line}: invalid {kind} line: {content:?}")]
    InvalidLine {
        line: usize,
        kind: &'static str,
        content: String,
    },

    #[error("Line {line}: index {index} outside 1..={vertex_count}")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("Line {line}: vertex {index} listed twice")]
    DuplicateVertex { line: usize, index: usize },

    #[error("Line {line}: unsupported section {section}")]
    UnsupportedSection { line: usize, section: String },

    #[error("Vertex name contains a quote or line break: {0:?}")]
    UnsupportedName(String),

    #[error("Graph label contains a line break: {0:?}")]
    UnsupportedLabel(String),

    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Errors that can occur while running the external cflow program
#[derive(Error, Debug)]
pub enum CflowError {
    #[error("cflow executable not found: {0}")]
    NotFound(String),

    #[error("Failed to spawn cflow: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("cflow failed on {path} ({status}): {stderr}")]
    Failed {
        path: String,
        status: String,
        stderr: String,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
