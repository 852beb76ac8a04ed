//! Reader for caller-supplied diagram element lists.
//!
//! Elements arrive as a JSON array of objects tagged by `"type"`. Each array
//! entry is checked on its own so that every malformed element is reported,
//! not just the first. Entries whose tag no diagram understands, including
//! entries with no usable tag at all, are kept as [`DiagramElement::Other`]
//! and reported as warnings.

use log::{debug, warn};
use serde_json::{Value, error::Category, value::RawValue};

use visdoc_core::diagram::DiagramElement;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

const KNOWN_TAGS: &str = "node, edge, participant, message, class, section, event";

/// Read a JSON element list into typed diagram elements.
///
/// # Errors
///
/// Returns a [`ParseError`] with one diagnostic for a list that is not valid
/// JSON or not an array, or one diagnostic per malformed element.
///
/// # Examples
///
/// ```
/// use visdoc_core::diagram::DiagramElement;
///
/// let elements = visdoc_parser::parse_elements(
///     r#"[{"type": "node", "id": "A", "label": "Start"}, {"type": "edge", "from": "A", "to": "B"}]"#,
/// )
/// .unwrap();
///
/// assert_eq!(elements[1], DiagramElement::edge("A", "B"));
/// ```
pub fn parse_elements(source: &str) -> Result<Vec<DiagramElement>, ParseError> {
    let raw_elements: Vec<&RawValue> =
        serde_json::from_str(source).map_err(|err| list_diagnostic(source, &err))?;
    debug!(count = raw_elements.len(); "Reading diagram elements");

    let list = list_span(source);
    let mut collector = DiagnosticCollector::new();
    let elements: Vec<DiagramElement> = raw_elements
        .into_iter()
        .filter_map(|raw| read_element(raw, raw_span(source, raw), list, &mut collector))
        .collect();

    for warning in collector.finish()? {
        warn!("{warning}");
    }

    Ok(elements)
}

/// Diagnostic for a list that could not be read as an array at all.
fn list_diagnostic(source: &str, err: &serde_json::Error) -> Diagnostic {
    let (code, message) = match err.classify() {
        Category::Eof => (ErrorCode::E101, "element list ends unexpectedly"),
        Category::Data => (ErrorCode::E102, "expected an array of diagram elements"),
        Category::Syntax | Category::Io => (ErrorCode::E100, "invalid JSON in element list"),
    };

    Diagnostic::error(code, message).pointing_at(
        Span::at_line_column(source, err.line(), err.column()),
        strip_position(err),
    )
}

fn read_element(
    raw: &RawValue,
    span: Span,
    list: Span,
    collector: &mut DiagnosticCollector,
) -> Option<DiagramElement> {
    let value: Value = match serde_json::from_str(raw.get()) {
        Ok(value) => value,
        Err(err) => {
            collector.emit(malformed(span, strip_position(&err), None));
            return None;
        }
    };

    let Some(object) = value.as_object() else {
        collector.emit(
            Diagnostic::error(ErrorCode::E201, "diagram element must be an object")
                .pointing_at(span, format!("found {}", json_kind(&value)))
                .within(list, "in this element list"),
        );
        return None;
    };

    let tag = match object.get("type") {
        Some(Value::String(tag)) => tag.as_str(),
        other => {
            let found = match other {
                Some(tag) => format!("`type` is {}", json_kind(tag)),
                None => "no `type` attribute".to_string(),
            };
            collector.emit(
                Diagnostic::warning("diagram element has no usable `type` tag")
                    .pointing_at(span, format!("{found}; ignored by every diagram"))
                    .with_help(format!("use one of: {KNOWN_TAGS}")),
            );
            return Some(DiagramElement::Other);
        }
    };

    if DiagramElement::required_fields(tag).is_none() {
        collector.emit(
            Diagnostic::warning(format!("unrecognized element tag `{tag}`"))
                .pointing_at(span, "this element is ignored by every diagram"),
        );
        return Some(DiagramElement::Other);
    }

    let tag = tag.to_string();
    match serde_json::from_value(value) {
        Ok(element) => Some(element),
        Err(err) => {
            collector.emit(malformed(span, strip_position(&err), Some(&tag)));
            None
        }
    }
}

fn malformed(span: Span, reason: String, tag: Option<&str>) -> Diagnostic {
    let diagnostic =
        Diagnostic::error(ErrorCode::E200, "malformed diagram element").pointing_at(span, reason);

    match tag.and_then(|tag| DiagramElement::required_fields(tag).map(|fields| (tag, fields))) {
        Some((tag, fields)) => {
            diagnostic.with_help(format!("`{tag}` elements require: {}", fields.join(", ")))
        }
        None => diagnostic,
    }
}

/// Byte range of a borrowed raw value inside `source`.
fn raw_span(source: &str, raw: &RawValue) -> Span {
    let text = raw.get();
    let start = (text.as_ptr() as usize)
        .checked_sub(source.as_ptr() as usize)
        .filter(|start| start + text.len() <= source.len())
        .unwrap_or(0);
    Span::new(start..start + text.len())
}

/// The whole list without surrounding whitespace.
fn list_span(source: &str) -> Span {
    let start = source.len() - source.trim_start().len();
    Span::new(start..source.trim_end().len())
}

/// The error message without serde_json's trailing position.
fn strip_position(err: &serde_json::Error) -> String {
    let message = err.to_string();
    let position = format!(" at line {} column {}", err.line(), err.column());
    message
        .strip_suffix(&position)
        .map(str::to_string)
        .unwrap_or(message)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
