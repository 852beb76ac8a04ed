//! Template assembly for decorated documents.
//!
//! A rendered document is the ordered concatenation of fixed [`Block`]s.
//! Only two things vary: the profile decides whether the hardware blocks
//! appear, and the code section reproduces the extracted code blocks. Every
//! other block is static text from [`templates`].

mod templates;

use std::borrow::Cow;

use log::{debug, info};

use visdoc_core::{
    document::{CodeBlock, ParsedDocument},
    profile::Profile,
};

/// A top-level block of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Title, tagline, and rule.
    Hero,
    QuickOverview,
    TableOfContents,
    /// System architecture diagrams. IoT profile only.
    Architecture,
    ComponentsGallery,
    /// Wiring diagram and connection table. IoT profile only.
    CircuitDiagram,
    /// The extracted code blocks. Omitted when there are none.
    Code,
    Troubleshooting,
    NextSteps,
}

impl Block {
    /// All blocks in output order.
    pub const ORDER: [Block; 9] = [
        Block::Hero,
        Block::QuickOverview,
        Block::TableOfContents,
        Block::Architecture,
        Block::ComponentsGallery,
        Block::CircuitDiagram,
        Block::Code,
        Block::Troubleshooting,
        Block::NextSteps,
    ];

    /// Returns `true` if this block is part of the output for `doc` and `profile`.
    pub fn is_included(&self, doc: &ParsedDocument, profile: &Profile) -> bool {
        match self {
            Block::Architecture | Block::CircuitDiagram => profile.includes_hardware_blocks(),
            Block::Code => !doc.code_blocks().is_empty(),
            _ => true,
        }
    }

    fn render(&self, doc: &ParsedDocument) -> Cow<'static, str> {
        match self {
            Block::Hero => Cow::Owned(hero(doc.title())),
            Block::QuickOverview => Cow::Borrowed(templates::QUICK_OVERVIEW),
            Block::TableOfContents => Cow::Borrowed(templates::TABLE_OF_CONTENTS),
            Block::Architecture => Cow::Borrowed(templates::ARCHITECTURE),
            Block::ComponentsGallery => Cow::Borrowed(templates::COMPONENTS_GALLERY),
            Block::CircuitDiagram => Cow::Borrowed(templates::CIRCUIT_DIAGRAM),
            Block::Code => Cow::Owned(code_section(doc.code_blocks())),
            Block::Troubleshooting => Cow::Borrowed(templates::TROUBLESHOOTING),
            Block::NextSteps => Cow::Borrowed(templates::NEXT_STEPS),
        }
    }
}

/// Returns the blocks rendered for `doc` under `profile`, in output order.
pub fn blocks_for(doc: &ParsedDocument, profile: &Profile) -> Vec<Block> {
    Block::ORDER
        .into_iter()
        .filter(|block| block.is_included(doc, profile))
        .collect()
}

/// Render `doc` into the decorated document text for `profile`.
pub fn render(doc: &ParsedDocument, profile: &Profile) -> String {
    let blocks = blocks_for(doc, profile);
    info!(profile = profile.as_str(), blocks = blocks.len(); "Rendering document");

    blocks
        .iter()
        .map(|block| {
            debug!(block:? = block; "Emitting block");
            block.render(doc)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn hero(title: &str) -> String {
    [format!("# {title}\n").as_str(), templates::TAGLINE, templates::RULE].join("\n")
}

fn code_section(code_blocks: &[CodeBlock]) -> String {
    let mut parts: Vec<Cow<'_, str>> = templates::CODE_SECTION_HEADINGS
        .into_iter()
        .map(Cow::Borrowed)
        .collect();

    for block in code_blocks {
        parts.push(Cow::Owned(format!(
            "```{}\n{}\n```\n",
            block.language(),
            block.code()
        )));
        parts.extend(templates::CODE_ANNOTATIONS.into_iter().map(Cow::Borrowed));
    }

    parts.push(Cow::Borrowed(templates::RULE));
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_code(blocks: &[(&str, &str)]) -> ParsedDocument {
        let mut doc = ParsedDocument::new();
        doc.set_title("Greenhouse Monitor");
        for (language, code) in blocks {
            doc.push_code_block(CodeBlock::new(*language, *code));
        }
        doc
    }

    #[test]
    fn test_iot_block_order() {
        let doc = doc_with_code(&[("cpp", "setup();")]);

        assert_eq!(blocks_for(&doc, &Profile::Iot), Block::ORDER.to_vec());
    }

    #[test]
    fn test_non_iot_profiles_skip_hardware_blocks() {
        let doc = doc_with_code(&[("cpp", "setup();")]);
        let expected = vec![
            Block::Hero,
            Block::QuickOverview,
            Block::TableOfContents,
            Block::ComponentsGallery,
            Block::Code,
            Block::Troubleshooting,
            Block::NextSteps,
        ];

        assert_eq!(blocks_for(&doc, &Profile::Tutorial), expected);
        assert_eq!(blocks_for(&doc, &Profile::Api), expected);
        assert_eq!(blocks_for(&doc, &Profile::from("handbook")), expected);
    }

    #[test]
    fn test_code_block_gated_on_content() {
        let doc = doc_with_code(&[]);
        assert!(!blocks_for(&doc, &Profile::Iot).contains(&Block::Code));
    }

    #[test]
    fn test_hero() {
        assert_eq!(
            hero("Greenhouse Monitor"),
            "# Greenhouse Monitor\n\n*Transform your technical content into beautiful documentation*\n\n---\n"
        );
    }

    #[test]
    fn test_code_section_layout() {
        let section = code_section(&[CodeBlock::new("python", "a=1\nb=2")]);

        let expected = [
            "## 4. Software Setup\n",
            "### Complete Firmware Code\n",
            "```python\na=1\nb=2\n```\n",
            "**Code Annotations:**\n\n",
            "<details>\n",
            "<summary><strong>Line-by-Line Explanation</strong></summary>\n\n",
            "*Detailed explanations will be added here*\n\n",
            "</details>\n",
            "---\n",
        ]
        .join("\n");
        assert_eq!(section, expected);
    }

    #[test]
    fn test_code_blocks_in_order_once_each() {
        let doc = doc_with_code(&[("c", "first();"), ("python", "second()"), ("sh", "third")]);
        let output = render(&doc, &Profile::Iot);

        let first = output.find("```c\nfirst();\n```").unwrap();
        let second = output.find("```python\nsecond()\n```").unwrap();
        let third = output.find("```sh\nthird\n```").unwrap();
        assert!(first < second && second < third);
        assert_eq!(output.matches("first();").count(), 1);
        assert_eq!(output.matches("<details>").count(), 3);
    }

    #[test]
    fn test_profile_gating_in_output() {
        let doc = doc_with_code(&[("cpp", "loop();")]);

        let iot = render(&doc, &Profile::Iot);
        assert!(iot.contains("## 1. System Architecture"));
        assert!(iot.contains("## 3. Circuit Diagram"));

        let tutorial = render(&doc, &Profile::Tutorial);
        assert!(!tutorial.contains("## 1. System Architecture"));
        assert!(!tutorial.contains("## 3. Circuit Diagram"));
        assert!(tutorial.contains("## 2. Hardware Components"));
        assert!(tutorial.contains("## 4. Software Setup"));
        assert!(tutorial.contains("## 5. Testing & Troubleshooting"));
        assert!(tutorial.contains("## 6. Next Steps"));
    }

    #[test]
    fn test_empty_code_omits_section() {
        let output = render(&doc_with_code(&[]), &Profile::Iot);

        assert!(!output.contains("Software Setup\n"));
        assert!(!output.contains("Complete Firmware Code"));
        assert!(!output.contains("**Code Annotations:**"));
    }

    #[test]
    fn test_static_tables_ignore_document_hardware() {
        let mut doc = doc_with_code(&[]);
        doc.push_component(visdoc_core::document::Component {
            name: "Relay".to_string(),
            ..Default::default()
        });
        doc.push_connection(visdoc_core::document::Connection {
            from_pin: "GPIO 27".to_string(),
            wire_color: "Purple".to_string(),
            ..Default::default()
        });

        let output = render(&doc, &Profile::Iot);
        assert!(output.contains("| Microcontroller | ESP32 | 1 |"));
        assert!(output.contains("| GPIO 4 | DHT22 | Data | Yellow |"));
        assert!(!output.contains("Relay"));
        assert!(!output.contains("GPIO 27"));
    }

    #[test]
    fn test_full_output_starts_and_ends() {
        let output = render(&doc_with_code(&[]), &Profile::Tutorial);

        assert!(output.starts_with("# Greenhouse Monitor\n\n*Transform"));
        assert!(output.ends_with("**Did you find this helpful?** [Rate Guide] | [Report Issue]\n"));
    }
}
