//! Mermaid emission for diagram element lists.
//!
//! Each [`DiagramKind`] maps to one strategy. Kinds without a dedicated
//! strategy share the generic graph renderer.
//!
//! | Kind | Strategy | Reads |
//! |------|----------|-------|
//! | `flowchart` | [`flowchart`] | node, edge |
//! | `sequence` | [`sequence`] | participant, message |
//! | `class` | [`class`] | class |
//! | `timeline` | [`timeline`] | section, event |
//! | `state`, `er`, `network`, `journey` | [`generic`] | node, edge |
//!
//! Elements a strategy does not read are skipped without affecting the
//! lines emitted for their neighbours. Every strategy wraps its lines in a
//! `mermaid` code fence and returns them newline-joined.

mod class;
mod flowchart;
mod generic;
mod sequence;
mod timeline;

use log::debug;

use visdoc_core::diagram::{DiagramElement, DiagramKind};

const OPENING_FENCE: &str = "```mermaid";
const CLOSING_FENCE: &str = "```";
const INDENT: &str = "    ";

/// Render `elements` as a fenced Mermaid block of the given kind.
///
/// # Examples
///
/// ```
/// use visdoc::{DiagramElement, DiagramKind, diagram::render_diagram};
///
/// let text = render_diagram(
///     DiagramKind::Flowchart,
///     &[DiagramElement::node("A", "Start"), DiagramElement::edge("A", "B")],
/// );
///
/// assert_eq!(text, "```mermaid\nflowchart TD\n    A[Start]\n    A --> B\n```");
/// ```
pub fn render_diagram(kind: DiagramKind, elements: &[DiagramElement]) -> String {
    debug!(kind = kind.as_str(), elements = elements.len(); "Rendering diagram");

    let block = match kind {
        DiagramKind::Flowchart => flowchart::render(elements),
        DiagramKind::Sequence => sequence::render(elements),
        DiagramKind::Class => class::render(elements),
        DiagramKind::Timeline => timeline::render(elements),
        DiagramKind::State
        | DiagramKind::EntityRelation
        | DiagramKind::Network
        | DiagramKind::Journey => generic::render(kind, elements),
    };

    block.finish()
}

/// Line buffer for a single fenced Mermaid block.
#[derive(Debug)]
struct MermaidBlock {
    lines: Vec<String>,
}

impl MermaidBlock {
    /// Open a block whose first line inside the fence is `header`.
    fn new(header: impl Into<String>) -> Self {
        Self {
            lines: vec![OPENING_FENCE.to_string(), header.into()],
        }
    }

    /// Append `text` indented by `depth` levels.
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        self.lines
            .push(format!("{}{}", INDENT.repeat(depth), text.as_ref()));
    }

    /// Close the fence and join the lines.
    fn finish(mut self) -> String {
        self.lines.push(CLOSING_FENCE.to_string());
        self.lines.join("\n")
    }
}
