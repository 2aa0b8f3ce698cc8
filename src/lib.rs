//! # deepline
//!
//! Fetches a document over http(s) and reports its most deeply nested text
//! line, validating a strict toy markup grammar along the way.
//!
//! The grammar knows three kinds of non-blank lines: bare opening markers
//! (`<name>`), bare closing markers (`</name>`), and plain text. Anything
//! else that starts with `<` (attributes, self-closing tags, comments) makes
//! the whole document malformed.
//!
//! The analysis lives in [`analyzer`] and is a pure function over a line
//! sequence; retrieval lives in [`fetch`] and is the only part that does I/O.

pub mod analyzer;
pub mod fetch;

pub use analyzer::{analyze, Outcome};
