//! A single problem found while reading an element list.

use std::fmt;

use crate::{
    error::{
        Severity,
        error_code::ErrorCode,
        label::{Label, LabelRole},
    },
    span::Span,
};

/// An error or warning about an element list.
///
/// Errors always carry an [`ErrorCode`]. Rendered with source context it
/// reads like:
///
/// ```text
/// error[E200]: malformed diagram element
///   |
/// 3 |     {"type": "edge", "from": "A"},
///   |     ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ missing field `to`
///   |
///   = help: `edge` elements require: from, to
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// An error that rejects the list.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, Some(code), message.into())
    }

    /// An advisory problem. The list is still accepted.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, None, message.into())
    }

    /// Point at the offending value.
    pub fn pointing_at(self, span: Span, message: impl Into<String>) -> Self {
        self.with_label(Label::new(LabelRole::Culprit, span, message))
    }

    /// Point at input surrounding the offending value.
    pub fn within(self, span: Span, message: impl Into<String>) -> Self {
        self.with_label(Label::new(LabelRole::Context, span, message))
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Labels in the order they were attached.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    fn new(severity: Severity, code: Option<ErrorCode>, message: String) -> Self {
        Self {
            severity,
            code,
            message,
            labels: Vec::new(),
            help: None,
        }
    }

    fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{code}]: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}
