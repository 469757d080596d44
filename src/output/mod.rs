//! Output writers and readers.
//!
//! This module handles data on disk:
//! - Pajek `.net` graph files (read and write)
//! - The tab-separated evolution report and its JSON rendering

pub mod pajek;
pub mod paths;
pub mod report;

// Re-export main functions
pub use pajek::{parse_pajek, read_pajek, to_pajek_string, write_pajek, write_pajek_to};
pub use paths::{prepare_output_path, validate_path};
pub use report::{ReportDocument, ReportRow, StatsReport};
