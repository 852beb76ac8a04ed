//! Structured document model produced by extraction.
//!
//! A [`ParsedDocument`] is built once per transform call from the complete
//! input text, consumed once by the renderer, and then dropped.
//!
//! # Pipeline Position
//!
//! ```text
//! Raw Text
//!     ↓ extract (visdoc-parser)
//! ParsedDocument (these types)
//!     ↓ render (visdoc)
//! Decorated Text
//! ```

/// Language recorded for a code fence that carries no language tag.
pub const DEFAULT_CODE_LANGUAGE: &str = "cpp";

/// The flat record extracted from a plain technical write-up.
///
/// Only `title` and `code_blocks` are populated by extraction today. The
/// remaining collections are part of the model so that renderers and callers
/// can rely on their presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    title: String,
    overview: String,
    components: Vec<Component>,
    connections: Vec<Connection>,
    code_blocks: Vec<CodeBlock>,
    sections: Vec<String>,
}

impl ParsedDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the document title, empty when the input had none.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the overview paragraph. Extraction never fills this in.
    pub fn overview(&self) -> &str {
        &self.overview
    }

    /// Returns the declared hardware components.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns the declared wiring connections.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Returns the code blocks in the order their fences appeared.
    pub fn code_blocks(&self) -> &[CodeBlock] {
        &self.code_blocks
    }

    /// Returns the named sections.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Append a code block after all existing ones.
    pub fn push_code_block(&mut self, block: CodeBlock) {
        self.code_blocks.push(block);
    }

    /// Returns the most recently opened code block, if any.
    pub fn last_code_block_mut(&mut self) -> Option<&mut CodeBlock> {
        self.code_blocks.last_mut()
    }

    /// Append a component to the declared component list.
    pub fn push_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Append a connection to the declared connection list.
    pub fn push_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }
}

/// A fenced code block lifted verbatim from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    language: String,
    code: String,
}

impl CodeBlock {
    /// Create a code block.
    ///
    /// An empty `language` is replaced by [`DEFAULT_CODE_LANGUAGE`].
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        let language = language.into();
        let language = if language.is_empty() {
            DEFAULT_CODE_LANGUAGE.to_string()
        } else {
            language
        };

        Self {
            language,
            code: code.into(),
        }
    }

    /// Returns the language tag of the fence.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the lines between the fences, newline-joined.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Replace the stored code text.
    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }
}

/// A hardware or software component listed in a write-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub model: String,
    pub quantity: u32,
    pub purpose: String,
    pub specs: String,
    pub cost: String,
    pub alternatives: Vec<String>,
}

/// A single wire between two pins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    pub from_pin: String,
    pub to_pin: String,
    pub component: String,
    pub signal: String,
    pub wire_color: String,
}
