//! Pajek `.net` reader and writer for call graphs.
//!
//! ```text
//! *Network linux-1.0
//! *Vertices 3
//! 1 "main"
//! 2 "parse"
//! 3 "printf"
//! *Arcs
//! 1 2
//! 1 3
//! ```
//!
//! Indices are 1-based on disk and 0-based in memory. Arcs are written once
//! per occurrence, in adjacency order, so a round trip restores the exact
//! adjacency lists.

use super::paths::{file_size, prepare_output_path};
use crate::graph::{Digraph, VertexId};
use crate::utils::error::FormatError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const LINE_BREAKS: [char; 2] = ['\n', '\r'];

/// Write a digraph to a Pajek file
///
/// **Public** - main entry point for graph persistence
///
/// # Errors
/// * `FormatError::Output` - Path is empty, a directory, or its parent cannot be created
/// * `FormatError::UnsupportedName` - A vertex name contains `"` or a line break
/// * `FormatError::UnsupportedLabel` - The label contains a line break
/// * `FormatError::Io` - I/O error during write
pub fn write_pajek(digraph: &Digraph, output_path: impl AsRef<Path>) -> Result<(), FormatError> {
    let output_path = output_path.as_ref();

    info!("Writing graph to: {}", output_path.display());
    prepare_output_path(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_pajek_to(digraph, &mut writer)?;
    writer.flush()?;

    info!(
        "Graph written successfully ({} vertices, {} arcs, {} bytes)",
        digraph.vertex_count(),
        digraph.arc_count(),
        file_size(output_path)
    );

    Ok(())
}

/// Write a digraph in Pajek format to any writer
///
/// Every record is one line, so names and labels that would break a line
/// (or, for names, the quoting) are refused before anything is written for them.
pub fn write_pajek_to<W: Write>(digraph: &Digraph, mut writer: W) -> Result<(), FormatError> {
    if let Some(label) = digraph.label() {
        if label.contains(LINE_BREAKS) {
            return Err(FormatError::UnsupportedLabel(label.to_string()));
        }
        writeln!(writer, "*Network {}", label)?;
    }

    writeln!(writer, "*Vertices {}", digraph.vertex_count())?;
    for v in digraph.vertices() {
        match digraph.vertex_name(v) {
            Some(name) if name.contains('"') || name.contains(LINE_BREAKS) => {
                return Err(FormatError::UnsupportedName(name.to_string()));
            }
            Some(name) => writeln!(writer, "{} \"{}\"", v + 1, name)?,
            None => writeln!(writer, "{}", v + 1)?,
        }
    }

    writeln!(writer, "*Arcs")?;
    for v in digraph.vertices() {
        for w in digraph.neighbors(v)? {
            writeln!(writer, "{} {}", v + 1, w + 1)?;
        }
    }

    Ok(())
}

/// Render a digraph as a Pajek string (for tests and in-memory use)
pub fn to_pajek_string(digraph: &Digraph) -> Result<String, FormatError> {
    let mut buffer = Vec::new();
    write_pajek_to(digraph, &mut buffer)?;
    // names are &str, so the buffer is valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Read a digraph from a Pajek file
///
/// **Public** - used by the analyze and inspect commands
///
/// # Errors
/// * `FormatError::Io` - File cannot be read
/// * any error of `parse_pajek`
pub fn read_pajek(input_path: impl AsRef<Path>) -> Result<Digraph, FormatError> {
    let input_path = input_path.as_ref();

    debug!("Reading graph from: {}", input_path.display());
    let text = std::fs::read_to_string(input_path)?;
    let digraph = parse_pajek(&text)?;

    debug!(
        "Graph loaded: {} vertices, {} arcs",
        digraph.vertex_count(),
        digraph.arc_count()
    );

    Ok(digraph)
}

/// Section of the file being read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Vertices,
    Arcs,
}

/// Parse Pajek text into a digraph
///
/// **Public** - in-memory counterpart of `read_pajek`
///
/// Blank lines and `%` comments are skipped; section keywords are
/// case-insensitive. Trailing tokens after a vertex name (coordinates) or an
/// arc (weight) are ignored.
///
/// # Errors
/// * `FormatError::MissingHeader` - No `*Vertices` line before data
/// * `FormatError::VertexCountMismatch` - Vertex lines differ from the declared count
/// * `FormatError::IndexOutOfRange` - Vertex or arc index outside `1..=V`
/// * `FormatError::InvalidLine` - Unparsable header, vertex or arc line
/// * `FormatError::Graph` - Two vertices share a name
pub fn parse_pajek(text: &str) -> Result<Digraph, FormatError> {
    let mut section = Section::Preamble;
    let mut label: Option<String> = None;
    let mut digraph: Option<Digraph> = None;
    let mut listed: Vec<bool> = Vec::new();
    let mut found = 0;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }

        if let Some(directive) = line.strip_prefix('*') {
            let (keyword, argument) = directive
                .split_once(char::is_whitespace)
                .map(|(k, a)| (k, a.trim()))
                .unwrap_or((directive, ""));

            match keyword.to_ascii_lowercase().as_str() {
                "network" if section == Section::Preamble => {
                    if !argument.is_empty() {
                        label = Some(argument.to_string());
                    }
                }
                "vertices" if section == Section::Preamble => {
                    let declared = argument
                        .split_whitespace()
                        .next()
                        .and_then(|n| n.parse::<usize>().ok())
                        .ok_or_else(|| invalid(line_no, "header", raw))?;

                    // each vertex takes a line, so the text bounds the count
                    let remaining = text.lines().skip(line_no).count();
                    if declared > remaining {
                        return Err(FormatError::VertexCountMismatch {
                            declared,
                            found: remaining,
                        });
                    }

                    let mut graph = Digraph::new(declared);
                    if let Some(label) = label.take() {
                        graph.set_label(label);
                    }
                    digraph = Some(graph);
                    listed = vec![false; declared];
                    section = Section::Vertices;
                }
                "arcs" if section == Section::Vertices => {
                    check_vertex_count(listed.len(), found)?;
                    section = Section::Arcs;
                }
                "arcs" if section == Section::Preamble => return Err(FormatError::MissingHeader),
                "network" | "vertices" | "arcs" => return Err(invalid(line_no, "header", raw)),
                other => {
                    return Err(FormatError::UnsupportedSection {
                        line: line_no,
                        section: other.to_string(),
                    })
                }
            }
            continue;
        }

        let Some(graph) = digraph.as_mut() else {
            return Err(FormatError::MissingHeader);
        };

        match section {
            Section::Preamble => return Err(FormatError::MissingHeader),
            Section::Vertices => {
                let declared = listed.len();
                if found == declared {
                    return Err(FormatError::VertexCountMismatch {
                        declared,
                        found: found + 1,
                    });
                }

                let (v, name) = parse_vertex_line(line, line_no, declared)?;
                if listed[v] {
                    return Err(FormatError::DuplicateVertex {
                        line: line_no,
                        index: v + 1,
                    });
                }
                listed[v] = true;
                found += 1;

                if let Some(name) = name {
                    graph.name_vertex(v, name)?;
                }
            }
            Section::Arcs => {
                let (v, w) = parse_arc_line(line, line_no, graph.vertex_count())?;
                graph.add_arc(v, w)?;
            }
        }
    }

    if section == Section::Vertices {
        check_vertex_count(listed.len(), found)?;
    }

    digraph.ok_or(FormatError::MissingHeader)
}

/// Parse `<index> ["<name>" | <name>] [...]`
///
/// **Private** - internal helper for parse_pajek
fn parse_vertex_line(
    line: &str,
    line_no: usize,
    vertex_count: usize,
) -> Result<(VertexId, Option<&str>), FormatError> {
    let (index, rest) = line
        .split_once(char::is_whitespace)
        .map(|(i, r)| (i, r.trim_start()))
        .unwrap_or((line, ""));

    let v = parse_index(index, line_no, vertex_count, "vertex", line)?;

    let name = if let Some(quoted) = rest.strip_prefix('"') {
        let end = quoted
            .find('"')
            .ok_or_else(|| invalid(line_no, "vertex", line))?;
        Some(&quoted[..end])
    } else {
        rest.split_whitespace().next()
    };

    Ok((v, name))
}

/// Parse `<from> <to> [weight]`
///
/// **Private** - internal helper for parse_pajek
fn parse_arc_line(
    line: &str,
    line_no: usize,
    vertex_count: usize,
) -> Result<(VertexId, VertexId), FormatError> {
    let mut tokens = line.split_whitespace();
    let (Some(from), Some(to)) = (tokens.next(), tokens.next()) else {
        return Err(invalid(line_no, "arc", line));
    };

    Ok((
        parse_index(from, line_no, vertex_count, "arc", line)?,
        parse_index(to, line_no, vertex_count, "arc", line)?,
    ))
}

/// Convert a 1-based index token to a 0-based vertex id
fn parse_index(
    token: &str,
    line_no: usize,
    vertex_count: usize,
    kind: &'static str,
    line: &str,
) -> Result<VertexId, FormatError> {
    let index: usize = token.parse().map_err(|_| invalid(line_no, kind, line))?;
    if index == 0 || index > vertex_count {
        return Err(FormatError::IndexOutOfRange {
            line: line_no,
            index,
            vertex_count,
        });
    }
    Ok(index - 1)
}

fn check_vertex_count(declared: usize, found: usize) -> Result<(), FormatError> {
    if declared == found {
        Ok(())
    } else {
        Err(FormatError::VertexCountMismatch { declared, found })
    }
}

fn invalid(line: usize, kind: &'static str, content: &str) -> FormatError {
    FormatError::InvalidLine {
        line,
        kind,
        content: content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_format() {
        let mut g = Digraph::new(3).with_label("demo-1.0");
        g.name_vertex(0, "main").unwrap();
        g.name_vertex(1, "parse").unwrap();
        g.add_arc(0, 1).unwrap();
        g.add_arc(0, 2).unwrap();

        let text = to_pajek_string(&g).unwrap();
        assert_eq!(
            text,
            "*Network demo-1.0\n*Vertices 3\n1 \"main\"\n2 \"parse\"\n3\n*Arcs\n1 2\n1 3\n"
        );
    }

    #[test]
    fn test_write_rejects_quoted_name() {
        let mut g = Digraph::new(1);
        g.name_vertex(0, "bad\"name").unwrap();
        assert!(matches!(to_pajek_string(&g), Err(FormatError::UnsupportedName(_))));
    }

    #[test]
    fn test_write_rejects_line_breaks() {
        let mut g = Digraph::new(2);
        g.name_vertex(0, "a\nb").unwrap();
        assert!(matches!(to_pajek_string(&g), Err(FormatError::UnsupportedName(_))));

        let mut g = Digraph::new(1);
        g.name_vertex(0, "a\rb").unwrap();
        assert!(matches!(to_pajek_string(&g), Err(FormatError::UnsupportedName(_))));

        let g = Digraph::new(1).with_label("x\n1 \"evil\"");
        assert!(matches!(to_pajek_string(&g), Err(FormatError::UnsupportedLabel(_))));
    }

    #[test]
    fn test_parse_tolerates_pajek_extras() {
        let text = "% generated\n*vertices 2\n1 \"a b\" 0.1 0.2 0.5\n2 plain\n\n*ARCS\n1 2 1.0\n2 2\n";
        let g = parse_pajek(text).unwrap();

        assert_eq!(g.vertex_name(0), Some("a b"));
        assert_eq!(g.vertex_name(1), Some("plain"));
        assert_eq!(g.arc_count(), 2);
        assert_eq!(g.label(), None);
    }

    #[test]
    fn test_parse_vertex_line_forms() {
        assert_eq!(parse_vertex_line("3", 1, 3).unwrap(), (2, None));
        assert_eq!(parse_vertex_line("1 \"f\"", 1, 3).unwrap(), (0, Some("f")));
        assert!(parse_vertex_line("1 \"open", 1, 3).is_err());
        assert!(matches!(
            parse_vertex_line("0 \"f\"", 7, 3),
            Err(FormatError::IndexOutOfRange { line: 7, index: 0, .. })
        ));
    }

    #[test]
    fn test_parse_arc_line_errors() {
        assert!(matches!(parse_arc_line("1", 4, 2), Err(FormatError::InvalidLine { line: 4, .. })));
        assert!(matches!(parse_arc_line("1 x", 4, 2), Err(FormatError::InvalidLine { .. })));
        assert!(matches!(
            parse_arc_line("1 3", 4, 2),
            Err(FormatError::IndexOutOfRange { index: 3, vertex_count: 2, .. })
        ));
    }
}
