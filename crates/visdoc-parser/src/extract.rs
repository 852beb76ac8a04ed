//! Line classifier that buckets raw text into document sections.
//!
//! Every input line is matched against a fixed, ordered rule list and the
//! first match wins:
//!
//! 1. A line starting with `"# "` sets the title (last one wins).
//! 2. A line mentioning "Parts needed" or "Components" enters the components section.
//! 3. A line mentioning "Wiring" or "Pinout" enters the connections section.
//! 4. A fence outside a code block opens a new code block.
//! 5. A fence inside a code block closes it.
//! 6. Any other line inside a code block is appended to it.
//!
//! Lines matching no rule are dropped. Rules 1-3 apply inside code blocks
//! too, so a body line such as `# comment` retitles the document instead of
//! being kept as code.

use log::{debug, trace};

use visdoc_core::document::{CodeBlock, ParsedDocument};

const TITLE_MARKER: &str = "# ";
const COMPONENT_MARKERS: [&str; 2] = ["Parts needed", "Components"];
const CONNECTION_MARKERS: [&str; 2] = ["Wiring", "Pinout"];
const FENCE: &str = "```";

/// Section the classifier is currently in.
///
/// Only the code state owns data: the body lines of the open block.
#[derive(Debug)]
enum Section<'src> {
    None,
    Components,
    Connections,
    Code(Vec<&'src str>),
}

impl Section<'_> {
    fn name(&self) -> &'static str {
        match self {
            Section::None => "none",
            Section::Components => "components",
            Section::Connections => "connections",
            Section::Code(_) => "code",
        }
    }

    fn is_code(&self) -> bool {
        matches!(self, Section::Code(_))
    }
}

/// Extract a [`ParsedDocument`] from raw text.
///
/// Never fails: empty or unstructured text yields a mostly empty document.
/// A code block left open at end of input keeps every line after its fence.
///
/// # Examples
///
/// ```
/// let doc = visdoc_parser::extract("# Weather Station\n```python\na=1\nb=2\n```");
///
/// assert_eq!(doc.title(), "Weather Station");
/// assert_eq!(doc.code_blocks()[0].language(), "python");
/// assert_eq!(doc.code_blocks()[0].code(), "a=1\nb=2");
/// ```
pub fn extract(source: &str) -> ParsedDocument {
    let mut extractor = Extractor::new();

    for (index, line) in source.split('\n').enumerate() {
        extractor.classify(index + 1, line);
    }

    extractor.finish()
}

struct Extractor<'src> {
    doc: ParsedDocument,
    section: Section<'src>,
}

impl<'src> Extractor<'src> {
    fn new() -> Self {
        Self {
            doc: ParsedDocument::new(),
            section: Section::None,
        }
    }

    fn classify(&mut self, line_number: usize, line: &'src str) {
        let trimmed = line.trim();

        if let Some(title) = line.strip_prefix(TITLE_MARKER) {
            trace!(line_number, title; "Title line");
            self.doc.set_title(title.trim());
        } else if COMPONENT_MARKERS.iter().any(|marker| line.contains(marker)) {
            // Components are never collected from the lines that follow;
            // only the section state changes.
            self.enter(line_number, Section::Components);
        } else if CONNECTION_MARKERS.iter().any(|marker| line.contains(marker)) {
            // Same as above: no `Connection` records are produced.
            self.enter(line_number, Section::Connections);
        } else if trimmed.starts_with(FENCE) && !self.section.is_code() {
            let info = trimmed.replace(FENCE, "");
            let block = CodeBlock::new(info.trim(), "");
            debug!(line_number, language = block.language(); "Opening code block");
            self.doc.push_code_block(block);
            self.enter(line_number, Section::Code(Vec::new()));
        } else if trimmed.starts_with(FENCE) {
            self.enter(line_number, Section::None);
        } else if let Section::Code(lines) = &mut self.section {
            lines.push(line);
        }
    }

    /// Switch to `next`, storing the body of a code block being left.
    fn enter(&mut self, line_number: usize, next: Section<'src>) {
        let previous = std::mem::replace(&mut self.section, next);
        debug!(
            line_number,
            from = previous.name(),
            to = self.section.name();
            "Section transition"
        );
        self.store_code(previous);
    }

    fn store_code(&mut self, section: Section<'src>) {
        if let Section::Code(lines) = section {
            if let Some(block) = self.doc.last_code_block_mut() {
                block.set_code(lines.join("\n"));
            }
        }
    }

    fn finish(mut self) -> ParsedDocument {
        let section = std::mem::replace(&mut self.section, Section::None);
        if section.is_code() {
            debug!("Input ended inside a code block");
        }
        self.store_code(section);
        self.doc
    }
}
