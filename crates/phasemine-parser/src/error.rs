//! Error and diagnostic system for the path parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans pointing into the path description
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with its error code, labeled source locations
//! and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from [`parse_path`](crate::parse_path).
//!
//! # Example
//!
//! ```
//! # use phasemine_parser::error::{Diagnostic, ErrorCode};
//! # use phasemine_parser::Span;
//!
//! let diag = Diagnostic::error(ErrorCode::E001, "unknown path command `A`")
//!     .at(Span::new(12..13), "not a path command")
//!     .with_help("supported commands are `M`, `L`, `C`, `Q` and `Z`");
//!
//! assert_eq!(diag.code(), Some(ErrorCode::E001));
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
