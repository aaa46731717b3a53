//! Line classification — comment, candidate definition, or neither.
//!
//! Deliberately heuristic: prefix and substring tests only, no lexing.

use regex::Regex;
use std::sync::LazyLock;

/// Control-flow keywords that disqualify a line from being a definition.
///
/// Matched as substrings, so `format(...)` or `notify(...)` are rejected
/// as well.
const CONTROL_KEYWORDS: &[&str] = &["if", "while", "for", "switch"];

// Marker, optional whitespace, at most one `*`, optional whitespace.
static RE_COMMENT_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?://|/\*)\s*\*?\s*(.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Candidate,
    Other,
}

/// Classify an already-trimmed line.
pub fn classify(line: &str) -> LineKind {
    if is_comment(line) {
        LineKind::Comment
    } else if is_candidate(line) {
        LineKind::Candidate
    } else {
        LineKind::Other
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("/*")
}

fn is_candidate(line: &str) -> bool {
    line.contains('(')
        && line.contains(')')
        && !line.contains(';')
        && !CONTROL_KEYWORDS.iter().any(|kw| line.contains(kw))
}

/// A candidate only counts as a definition when its opening brace sits on
/// the same physical line.
pub fn is_definition(kind: LineKind, line: &str) -> bool {
    kind == LineKind::Candidate && line.contains('{')
}

/// Text of a comment line after its marker.
///
/// `/** foo */` yields `foo */`; the closing marker is kept.
pub fn comment_body(line: &str) -> Option<&str> {
    RE_COMMENT_BODY
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Directive lines (`#include`, `#define`, ...) leave pending comments alone.
pub fn is_directive(line: &str) -> bool {
    line.starts_with('#')
}
