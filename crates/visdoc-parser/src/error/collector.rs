//! Collector for accumulating diagnostics while reading an element list.
//!
//! The [`DiagnosticCollector`] lets the reader report every malformed
//! element instead of failing on the first one.

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics and tracks whether any error was emitted.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// Returns the collected warnings if no error was emitted, otherwise a
    /// [`ParseError`] holding every diagnostic in emission order.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(self.diagnostics.into())
        } else {
            Ok(self.diagnostics)
        }
    }
}
