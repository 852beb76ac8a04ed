//! Sequence diagram strategy.

use visdoc_core::diagram::DiagramElement;

use super::MermaidBlock;

/// All participants are declared first, then all messages, each pass in
/// input order.
pub(super) fn render(elements: &[DiagramElement]) -> MermaidBlock {
    let mut block = MermaidBlock::new("sequenceDiagram");

    for element in elements {
        if let DiagramElement::Participant { id, label } = element {
            let alias = label.as_deref().unwrap_or(id);
            block.line(1, format!("participant {id} as {alias}"));
        }
    }

    for element in elements {
        if let DiagramElement::Message { from, to, label } = element {
            block.line(1, format!("{from} ->> {to}: {label}"));
        }
    }

    block
}
