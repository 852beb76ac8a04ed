//! Class diagram strategy.

use visdoc_core::diagram::DiagramElement;

use super::MermaidBlock;

pub(super) fn render(elements: &[DiagramElement]) -> MermaidBlock {
    let mut block = MermaidBlock::new("classDiagram");

    for element in elements {
        if let DiagramElement::Class { name, attributes } = element {
            block.line(1, format!("class {name} {{"));
            for attribute in attributes {
                block.line(2, attribute);
            }
            block.line(1, "}");
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_blocks() {
        let elements = [
            DiagramElement::class("Sensor", ["+int pin", "+read() float"]),
            DiagramElement::node("ignored", "Ignored"),
            DiagramElement::class("Display", Vec::<String>::new()),
        ];

        let expected = [
            "```mermaid",
            "classDiagram",
            "    class Sensor {",
            "        +int pin",
            "        +read() float",
            "    }",
            "    class Display {",
            "    }",
            "```",
        ]
        .join("\n");
        assert_eq!(render(&elements).finish(), expected);
    }
}
