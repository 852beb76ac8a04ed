//! Error types for Visdoc operations.
//!
//! This module provides the main error type [`VisdocError`]. Extraction and
//! template rendering never fail, so errors only come from file access,
//! configuration loading, and reading caller-supplied diagram elements.

use std::io;

use thiserror::Error;

use visdoc_parser::error::ParseError;

/// The main error type for Visdoc operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the diagnostics so that
/// their spans can be shown as snippets.
#[derive(Debug, Error)]
pub enum VisdocError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl VisdocError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
