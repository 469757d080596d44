//! Parser for cflow call-flow traces.
//!
//! Consumes the output of `cflow --depth 2 --omit-arguments --print-level`:
//!
//! ```text
//! {   0} main() <int main (void) at main.c:10>:
//! {   1}     parse_args() <...>
//! {   1}     printf()
//! {   0} parse_args() <...>
//! ```
//!
//! Level 0 names the caller, level 1 names a direct callee. Everything else
//! is ignored. Lines that do not fit are dropped, never fatal.

use log::debug;
use std::collections::HashSet;

/// Caller/callee data extracted from one trace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTrace {
    /// Every function seen, in discovery order, each listed once
    pub functions: Vec<String>,

    /// `(caller, callee)` pairs in discovery order, repeats included
    pub calls: Vec<(String, String)>,

    /// Lines dropped because they did not match their expected pattern
    pub skipped_lines: usize,
}

impl ParsedTrace {
    fn register(&mut self, seen: &mut HashSet<String>, name: &str) {
        if seen.insert(name.to_string()) {
            self.functions.push(name.to_string());
        }
    }
}

/// Classification of one trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceLine<'a> {
    /// Level 0: function whose calls follow
    Caller(&'a str),
    /// Level 1: function called by the current caller
    Callee(&'a str),
    /// Deeper nesting or blank line
    Ignored,
    /// Marker present (or expected) but the line does not parse
    Malformed { level: Option<usize> },
}

/// Parser state: the caller that level-1 lines attach to
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParserState {
    Idle,
    InCaller(String),
}

/// Parse the text of one call-flow trace
///
/// **Public** - main entry point for trace parsing
///
/// # Arguments
/// * `text` - Raw cflow output for a single source file
///
/// # Returns
/// Functions and caller/callee pairs, plus the number of skipped lines.
/// A level-1 line before any caller, or after a malformed level-0 line,
/// is dropped rather than attached to a stale caller.
pub fn parse_cflow_trace(text: &str) -> ParsedTrace {
    let mut parsed = ParsedTrace::default();
    let mut seen = HashSet::new();
    let mut state = ParserState::Idle;

    for line in text.lines() {
        match classify_line(line) {
            TraceLine::Caller(name) => {
                parsed.register(&mut seen, name);
                state = ParserState::InCaller(name.to_string());
            }
            TraceLine::Callee(name) => match &state {
                ParserState::InCaller(caller) => {
                    parsed.register(&mut seen, name);
                    parsed.calls.push((caller.clone(), name.to_string()));
                }
                ParserState::Idle => parsed.skipped_lines += 1,
            },
            TraceLine::Malformed { level } => {
                if level == Some(0) {
                    state = ParserState::Idle;
                }
                parsed.skipped_lines += 1;
            }
            TraceLine::Ignored => {}
        }
    }

    debug!(
        "Parsed trace: {} functions, {} calls, {} skipped lines",
        parsed.functions.len(),
        parsed.calls.len(),
        parsed.skipped_lines
    );

    parsed
}

/// Classify a line by its `{ N}` level marker
///
/// **Private** - internal helper for parse_cflow_trace
fn classify_line(line: &str) -> TraceLine<'_> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return TraceLine::Ignored;
    }

    let Some(body) = trimmed.strip_prefix('{') else {
        return TraceLine::Malformed { level: None };
    };
    let Some((marker, rest)) = body.split_once('}') else {
        return TraceLine::Malformed { level: None };
    };
    let Ok(level) = marker.trim().parse::<usize>() else {
        return TraceLine::Malformed { level: None };
    };

    if level > 1 {
        return TraceLine::Ignored;
    }

    match function_name(rest) {
        Some(name) if level == 0 => TraceLine::Caller(name),
        Some(name) => TraceLine::Callee(name),
        None => TraceLine::Malformed { level: Some(level) },
    }
}

/// Extract the identifier immediately followed by `()`
///
/// **Private** - internal helper for classify_line
fn function_name(rest: &str) -> Option<&str> {
    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());

    let (name, tail) = rest.split_at(end);
    if name.is_empty() || !tail.starts_with("()") {
        return None;
    }
    Some(name)
}
