//! # Visdoc Parser
//!
//! Reading side of the Visdoc pipeline:
//!
//! - [`extract`] classifies the lines of a plain technical write-up into a
//!   [`ParsedDocument`](visdoc_core::document::ParsedDocument). It accepts
//!   any text and cannot fail.
//! - [`parse_elements`] reads a caller-supplied JSON element list into typed
//!   [`DiagramElement`](visdoc_core::diagram::DiagramElement)s, reporting
//!   malformed elements as [`error::Diagnostic`]s.
//!
//! ## Usage
//!
//! ```
//! let doc = visdoc_parser::extract("# Plant Monitor\n```cpp\nsetup();\n```");
//! assert_eq!(doc.title(), "Plant Monitor");
//! assert_eq!(doc.code_blocks().len(), 1);
//! ```

pub mod error;

mod elements;
mod extract;
mod span;

pub use elements::parse_elements;
pub use extract::extract;
pub use span::Span;
