//! Single-pass analysis of a line sequence.
//!
//! Two stages run interleaved over one pass:
//! 1. Line classification ([classify]): trim a raw line and decide whether it
//!    is blank, an opening marker, a closing marker, bad markup, or text.
//! 2. Depth tracking and selection ([depth]): maintain the LIFO stack of open
//!    tag names, validate closing markers against it, and keep the deepest
//!    text line seen so far.
//!
//! There is no tokenizer artifact in between; the depth tracker consumes
//! classifications directly, line by line.

pub mod classify;
pub mod depth;

pub use classify::{classify_line, LineClass};
pub use depth::{analyze, Outcome};
