//! Depth Tracking and Selection
//!
//! Consumes classified lines in order, maintaining a LIFO stack of open tag
//! names and the deepest text line seen so far. The stack must balance: a
//! closing marker must name the innermost open tag, and every tag must be
//! closed by the end of input. The first structural violation ends the
//! analysis immediately with [Outcome::MalformedHtml].
//!
//! Tie-break: a text line replaces the current candidate only at strictly
//! greater depth, so the first line at the maximal depth wins.

use std::fmt;

use serde::Serialize;

use crate::analyzer::classify::{classify_line, LineClass};

const OUT_MALFORMED: &str = "malformed HTML";
const OUT_URL_ERROR: &str = "URL connection error";

/// The outcome of one invocation. Exactly three shapes exist; every input,
/// however degenerate, resolves to one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum Outcome {
    /// Well-formed structure; carries the deepest text line.
    Text(String),
    /// Any structural violation, or no text content at all.
    MalformedHtml,
    /// The retrieval collaborator could not produce a line sequence.
    /// Never produced by [analyze] itself.
    UrlConnectionError,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Text(text) => write!(f, "{}", text),
            Outcome::MalformedHtml => write!(f, "{}", OUT_MALFORMED),
            Outcome::UrlConnectionError => write!(f, "{}", OUT_URL_ERROR),
        }
    }
}

/// Analyze a line sequence in one pass and select the deepest text line.
///
/// Pure function of its input: no I/O, and re-running on the same sequence
/// always yields the same outcome. Returns [Outcome::Text] or
/// [Outcome::MalformedHtml] only.
pub fn analyze<I, S>(lines: I) -> Outcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stack: Vec<String> = Vec::new();
    // Depth starts below zero so the first text line wins even at depth 0.
    let mut max_depth: i64 = -1;
    let mut best_text: Option<String> = None;

    for raw in lines {
        match classify_line(raw.as_ref()) {
            LineClass::Blank => continue,
            LineClass::OpenTag(tag) => stack.push(tag),
            LineClass::CloseTag(tag) => {
                match stack.last() {
                    Some(top) if *top == tag => {
                        stack.pop();
                    }
                    // Empty stack or name mismatch: unbalanced close.
                    _ => return Outcome::MalformedHtml,
                }
            }
            LineClass::BadMarkup => return Outcome::MalformedHtml,
            LineClass::Text(text) => {
                let depth = stack.len() as i64;
                if depth > max_depth {
                    max_depth = depth;
                    best_text = Some(text);
                }
            }
        }
    }

    if !stack.is_empty() {
        return Outcome::MalformedHtml;
    }

    match best_text {
        Some(text) => Outcome::Text(text),
        None => Outcome::MalformedHtml,
    }
}
