//! Skiff syntax tools.
//!
//! This crate is the front half of the toolchain: it turns source text into
//! an abstract syntax tree for a later compiler stage to consume. Parsing
//! happens directly over the characters - there is no separate token stream.
//! The [`Cursor`] tracks the scan position, the scanning primitives build
//! lexical atoms out of it, and the [`Parser`] composes those into [`Node`]s
//! with unbounded backtracking.

pub mod ast;
pub mod cursor;
pub mod error;
pub mod parser;
pub mod predicate;
mod scan;

pub use crate::{
    ast::Node,
    cursor::{Checkpoint, Cursor},
    error::ParseError,
    parser::Parser,
};

/// Parse a complete program, producing the [`Node::Program`] root.
///
/// # Examples
///
/// ```
/// let program = syntax::parse("let x = 1\n").unwrap();
/// assert!(matches!(program, syntax::Node::Program(_)));
/// ```
pub fn parse(input: &str) -> Result<Node, ParseError> {
    Parser::new(input)?.parse()
}
