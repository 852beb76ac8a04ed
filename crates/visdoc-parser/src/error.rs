//! Error and diagnostic system for the Visdoc parser.
//!
//! A rejected element list yields a [`ParseError`] holding one
//! [`Diagnostic`] per problem. Each error carries an [`ErrorCode`] and
//! [`Label`]s pointing into the list, so the CLI can show source snippets.
//!
//! Only the element-list reader produces diagnostics. Section extraction
//! accepts any text and never fails.
//!
//! # Example
//!
//! ```
//! # use visdoc_parser::error::{Diagnostic, ErrorCode};
//! # use visdoc_parser::Span;
//!
//! let diag = Diagnostic::error(ErrorCode::E200, "malformed diagram element")
//!     .pointing_at(Span::new(12..40), "missing field `to`")
//!     .with_help("`edge` elements require: from, to");
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
pub use label::{Label, LabelRole};
pub use parse_error::ParseError;
pub use severity::Severity;
