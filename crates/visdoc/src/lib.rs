//! Visdoc - turn plain technical write-ups into templated documentation.
//!
//! The pipeline runs one way:
//!
//! ```text
//! Raw Text
//!     ↓ extract (visdoc-parser)
//! ParsedDocument
//!     ↓ render (templates + extracted code)
//! Decorated Markdown
//! ```
//!
//! The [`diagram`] emitter is independent of that pipeline and turns typed
//! element lists into Mermaid blocks.

pub mod config;
pub mod diagram;
pub mod render;

mod error;

pub use visdoc_core::{
    color,
    diagram::{DiagramElement, DiagramKind, UnknownDiagramKind},
    document, profile,
};

pub use error::VisdocError;

use log::{debug, info, trace};

use config::AppConfig;
use document::ParsedDocument;
use profile::Profile;

/// Builder for extracting and rendering Visdoc documents.
///
/// The configuration is fixed at construction. Every call builds its own
/// intermediate state, so one builder can serve any number of documents.
///
/// # Examples
///
/// ```rust
/// use visdoc::{DocumentBuilder, config::AppConfig, profile::Profile};
///
/// let source = "# Soil Sensor\n```cpp\nvoid setup() {}\n```";
///
/// let builder = DocumentBuilder::new(AppConfig::default());
///
/// // Extract the structured record
/// let doc = builder.parse(source);
/// assert_eq!(doc.title(), "Soil Sensor");
///
/// // Render it with the IoT profile
/// let output = builder.render(&doc, &Profile::Iot);
/// assert!(output.contains("```cpp\nvoid setup() {}\n```"));
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    config: AppConfig,
}

impl DocumentBuilder {
    /// Create a new document builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Extract a structured document from raw text.
    ///
    /// Extraction accepts any input. Unrecognized lines are dropped.
    pub fn parse(&self, source: &str) -> ParsedDocument {
        info!(bytes = source.len(); "Extracting document");

        let doc = visdoc_parser::extract(source);

        debug!(
            title = doc.title(),
            code_blocks = doc.code_blocks().len();
            "Document extracted"
        );
        trace!(doc:?; "Extracted document");

        doc
    }

    /// Render an extracted document with the given profile.
    pub fn render(&self, doc: &ParsedDocument, profile: &Profile) -> String {
        render::render(doc, profile)
    }

    /// Extract and render in one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visdoc::{DocumentBuilder, profile::Profile};
    ///
    /// let output = DocumentBuilder::default().transform("# Rover", &Profile::Tutorial);
    /// assert!(output.starts_with("# Rover\n"));
    /// assert!(!output.contains("## 3. Circuit Diagram"));
    /// ```
    pub fn transform(&self, source: &str, profile: &Profile) -> String {
        let doc = self.parse(source);
        self.render(&doc, profile)
    }

    /// Render typed diagram elements as a Mermaid block.
    pub fn render_diagram(&self, kind: DiagramKind, elements: &[DiagramElement]) -> String {
        diagram::render_diagram(kind, elements)
    }

    /// Read a JSON element list and render it as a Mermaid block.
    ///
    /// # Errors
    ///
    /// Returns [`VisdocError::Parse`] if the list is not valid JSON, is not
    /// an array, or contains a malformed element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visdoc::{DocumentBuilder, DiagramKind};
    ///
    /// let builder = DocumentBuilder::default();
    /// let text = builder
    ///     .render_diagram_json(DiagramKind::Flowchart, r#"[{"type": "edge", "from": "A", "to": "B"}]"#)
    ///     .unwrap();
    /// assert_eq!(text, "```mermaid\nflowchart TD\n    A --> B\n```");
    ///
    /// let err = builder.render_diagram_json(DiagramKind::Flowchart, r#"[{"type": "edge"}]"#);
    /// assert!(err.is_err());
    /// ```
    pub fn render_diagram_json(
        &self,
        kind: DiagramKind,
        source: &str,
    ) -> Result<String, VisdocError> {
        info!(kind = kind.as_str(); "Reading diagram elements");

        let elements = visdoc_parser::parse_elements(source)
            .map_err(|err| VisdocError::new_parse_error(err, source))?;

        Ok(self.render_diagram(kind, &elements))
    }
}
