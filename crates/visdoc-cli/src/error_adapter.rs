//! Error adapter for converting VisdocError to miette diagnostics.
//!
//! This module provides the bridge between the library's error types and
//! miette's rich diagnostic formatting used in the CLI.
//!
//! When a [`visdoc_parser::error::ParseError`] carries several diagnostics,
//! each one is rendered on its own.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, Severity as MietteSeverity, SourceSpan};

use visdoc::VisdocError;
use visdoc_parser::error::{Diagnostic, LabelRole, Severity};

/// Wraps a single [`Diagnostic`] together with the element list it points into.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            match label.role() {
                LabelRole::Culprit => LabeledSpan::new_primary_with_span(message, span),
                LabelRole::Context => LabeledSpan::new_with_span(message, span),
            }
        })))
    }
}

/// Adapter for [`VisdocError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a VisdocError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            VisdocError::Io(_) => "visdoc::io",
            VisdocError::Config(_) => "visdoc::config",
            VisdocError::Parse { .. } => return None,
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            VisdocError::Config(_) => Some(Box::new(
                "pass --config with a JSON or TOML file, or remove the broken file",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A plain error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn span_to_miette(span: visdoc_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`VisdocError`] into a list of reportable errors.
///
/// [`VisdocError::Parse`] yields one [`Reportable`] per diagnostic. Every
/// other variant yields exactly one.
pub fn to_reportables(err: &VisdocError) -> Vec<Reportable<'_>> {
    match err {
        VisdocError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use visdoc_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error(ErrorCode::E200, "malformed diagram element")
            .pointing_at(Span::new(1..22), "missing field `to`")
            .with_help("`edge` elements require: from, to");
        let err = VisdocError::new_parse_error(
            ParseError::from(diag),
            r#"[{"type":"edge","from":"A"}]"#,
        );

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "malformed diagram element");
                assert_eq!(d.code().unwrap().to_string(), "E200");
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error(ErrorCode::E201, "diagram element must be an object")
                .pointing_at(Span::new(1..3), "found a number"),
            Diagnostic::warning("diagram element has no usable `type` tag")
                .pointing_at(Span::new(5..7), "no `type` attribute; ignored by every diagram"),
            Diagnostic::error(ErrorCode::E200, "malformed diagram element")
                .pointing_at(Span::new(9..26), "missing field `id`"),
        ];
        let err = VisdocError::new_parse_error(
            ParseError::from(diags),
            r#"[42, {}, {"type":"node"}]"#,
        );

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 3);
        assert_eq!(reportables[0].to_string(), "diagram element must be an object");
        assert_eq!(reportables[1].severity(), Some(MietteSeverity::Warning));
        assert_eq!(reportables[2].to_string(), "malformed diagram element");
    }

    #[test]
    fn test_config_error() {
        let err = VisdocError::Config("bad palette".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad palette");
                assert_eq!(e.code().unwrap().to_string(), "visdoc::config");
                assert!(e.help().is_some());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_io_error_code() {
        let err = VisdocError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "guide.md",
        ));

        let reportables = to_reportables(&err);

        assert_eq!(reportables[0].code().unwrap().to_string(), "visdoc::io");
        assert!(reportables[0].help().is_none());
    }

    #[test]
    fn test_warning_severity_is_preserved() {
        let diag = Diagnostic::warning("unrecognized element tag `lane`");
        let adapter = DiagnosticAdapter::new(&diag, "[]");

        assert_eq!(adapter.severity(), Some(MietteSeverity::Warning));
    }

    #[test]
    fn test_list_context_is_a_secondary_label() {
        let source = r#"[true, {"type": "node", "id": "A"}]"#;
        let err = visdoc_parser::parse_elements(source).unwrap_err();
        let diag = &err.diagnostics()[0];

        let adapter = DiagnosticAdapter::new(diag, source);

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("found a boolean"));
        assert!(labels[0].primary());
        assert_eq!(labels[1].label(), Some("in this element list"));
        assert!(!labels[1].primary());
        assert_eq!(labels[1].offset(), 0);
        assert_eq!(labels[1].len(), source.len());
    }
}
