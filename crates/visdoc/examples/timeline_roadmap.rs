//! Example: Emitting a roadmap timeline from typed elements
//!
//! Builds the element list in code instead of reading JSON, then prints the
//! Mermaid block.

use visdoc::{DiagramElement, DiagramKind, DocumentBuilder};

fn main() {
    let elements = [
        DiagramElement::section("Current"),
        DiagramElement::event("Basic Implementation", "Core functionality"),
        DiagramElement::section("Next"),
        DiagramElement::event("Add WiFi", "Cloud connectivity"),
        DiagramElement::section("Future"),
        DiagramElement::event("Machine Learning", "Advanced features"),
    ];

    let builder = DocumentBuilder::default();
    println!("{}", builder.render_diagram(DiagramKind::Timeline, &elements));
}
