//! Top-down flowchart strategy.

use visdoc_core::diagram::DiagramElement;

use super::MermaidBlock;

/// Nodes and edges are emitted interleaved, in input order.
pub(super) fn render(elements: &[DiagramElement]) -> MermaidBlock {
    let mut block = MermaidBlock::new("flowchart TD");

    for element in elements {
        match element {
            DiagramElement::Node { id, label, style } => {
                block.line(1, format!("{id}[{label}]"));
                if let Some(style) = style.as_deref().filter(|style| !style.is_empty()) {
                    block.line(1, format!("style {id} {style}"));
                }
            }
            DiagramElement::Edge { from, to } => block.line(1, format!("{from} --> {to}")),
            _ => {}
        }
    }

    block
}
