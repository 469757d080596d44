//! Helpers shared by the commands: file discovery and version display.

use crate::utils::config::GRAPH_FORMAT_NAME;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively list files under `root` with the given extension
///
/// Results are sorted so batches run in a stable order. Unreadable
/// directory entries are logged and skipped.
pub fn collect_files(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect();

    files.sort();
    debug!("Found {} .{} files under {}", files.len(), extension, root.display());
    files
}

/// Keep every `every`-th item, starting with the first
pub fn sample_every<T>(items: Vec<T>, every: usize) -> Vec<T> {
    if every <= 1 {
        return items;
    }
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % every == 0)
        .map(|(_, item)| item)
        .collect()
}

/// Display version information
pub fn display_version() {
    println!("Callgraph Evolution v{}", env!("CARGO_PKG_VERSION"));
    println!("Graph format: {} (.net)", GRAPH_FORMAT_NAME);
    println!();
    println!("Call-graph extraction and SCC metrics across software releases.");
}
