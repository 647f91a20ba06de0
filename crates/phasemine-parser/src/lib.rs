//! # Phasemine Parser
//!
//! Parser for the path descriptions that outline phase-diagram regions.
//! A description is a whitespace-separated list of absolute commands:
//!
//! ```text
//! M 0,1084.6 L 100,1084.6 Q 60,1200 0,1084.6 Z
//! ```
//!
//! Malformed descriptions are reported through [`ParseError`], which carries
//! one [`Diagnostic`](error::Diagnostic) per problem found, each pointing at
//! the offending bytes with a [`Span`].
//!
//! ## Usage
//!
//! ```
//! # use phasemine_parser::{parse_path, ParseError};
//! # use phasemine_core::path::PathCommand;
//!
//! fn main() -> Result<(), ParseError> {
//!     let commands = parse_path("M 0,0 L 10,0 Z")?;
//!     assert_eq!(commands.len(), 2);
//!     assert_eq!(commands[0], PathCommand::Move { x: 0.0, y: 0.0 });
//!     Ok(())
//! }
//! ```

pub mod error;
mod lexer;
mod parser;
#[cfg(test)]
mod parser_tests;
mod span;

pub use error::ParseError;
pub use span::Span;

use phasemine_core::path::PathCommand;

/// Parse a path description into absolute drawing commands.
///
/// The trailing close command is not modeled: `Z` only returns the pen to
/// the start of the current subpath. An empty description parses to an
/// empty command list.
///
/// # Errors
///
/// Returns a [`ParseError`] listing every unknown command letter, malformed
/// coordinate pair, drawing command issued before a move, and command whose
/// coordinates are cut off by the end of the description.
pub fn parse_path(source: &str) -> Result<Vec<PathCommand>, ParseError> {
    parser::parse_commands(source)
}
