//! Messages pinned to a span of the element list.

use crate::span::Span;

/// What a [`Label`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    /// The offending value itself.
    Culprit,
    /// Surrounding input that helps place the culprit, such as the list
    /// holding a bad entry.
    Context,
}

/// A span of the element list with a short message.
#[derive(Debug, Clone)]
pub struct Label {
    role: LabelRole,
    span: Span,
    message: String,
}

impl Label {
    pub(crate) fn new(role: LabelRole, span: Span, message: impl Into<String>) -> Self {
        Self {
            role,
            span,
            message: message.into(),
        }
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
