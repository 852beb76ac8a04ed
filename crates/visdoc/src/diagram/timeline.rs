//! Roadmap timeline strategy.

use visdoc_core::diagram::DiagramElement;

use super::MermaidBlock;

const TITLE: &str = "title Project Roadmap";

/// Events are indented under the most recent section header.
pub(super) fn render(elements: &[DiagramElement]) -> MermaidBlock {
    let mut block = MermaidBlock::new("timeline");
    block.line(1, TITLE);

    for element in elements {
        match element {
            DiagramElement::Section { name } => block.line(1, format!("section {name}")),
            DiagramElement::Event { name, description } => {
                block.line(2, format!("{name} : {description}"));
            }
            _ => {}
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_and_events() {
        let elements = [
            DiagramElement::section("Current"),
            DiagramElement::event("Basic Implementation", "Core functionality"),
            DiagramElement::section("Next"),
            DiagramElement::event("Add WiFi", "Cloud connectivity"),
            DiagramElement::event("Add OTA", ""),
        ];

        let expected = [
            "```mermaid",
            "timeline",
            "    title Project Roadmap",
            "    section Current",
            "        Basic Implementation : Core functionality",
            "    section Next",
            "        Add WiFi : Cloud connectivity",
            "        Add OTA : ",
            "```",
        ]
        .join("\n");
        assert_eq!(render(&elements).finish(), expected);
    }

    #[test]
    fn test_empty_timeline_keeps_title() {
        assert_eq!(
            render(&[]).finish(),
            "```mermaid\ntimeline\n    title Project Roadmap\n```"
        );
    }
}
