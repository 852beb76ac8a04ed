//! Fallback graph strategy for kinds without a dedicated renderer.

use visdoc_core::diagram::{DiagramElement, DiagramKind};

use super::MermaidBlock;

/// Like the flowchart strategy, headed by the kind's literal name. Node
/// styles are not emitted.
pub(super) fn render(kind: DiagramKind, elements: &[DiagramElement]) -> MermaidBlock {
    let mut block = MermaidBlock::new(format!("{} TD", kind.as_str()));

    for element in elements {
        match element {
            DiagramElement::Node { id, label, .. } => block.line(1, format!("{id}[{label}]")),
            DiagramElement::Edge { from, to } => block.line(1, format!("{from} --> {to}")),
            _ => {}
        }
    }

    block
}
