//! Diagram kinds and typed diagram elements.
//!
//! Elements are a tagged variant keyed by a `"type"` discriminator. Each
//! variant carries exactly the attributes its diagram strategies read, so a
//! constructed element can never be missing a required attribute. Elements
//! read from JSON with an unknown tag become [`DiagramElement::Other`], which
//! every strategy skips.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The shape of diagram to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    EntityRelation,
    Network,
    Timeline,
    Journey,
}

impl DiagramKind {
    /// All diagram kinds in declaration order.
    pub const ALL: [DiagramKind; 8] = [
        DiagramKind::Flowchart,
        DiagramKind::Sequence,
        DiagramKind::Class,
        DiagramKind::State,
        DiagramKind::EntityRelation,
        DiagramKind::Network,
        DiagramKind::Timeline,
        DiagramKind::Journey,
    ];

    /// Returns the literal name of the kind.
    ///
    /// Kinds without a dedicated strategy use this name in their header line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::State => "state",
            Self::EntityRelation => "er",
            Self::Network => "network",
            Self::Timeline => "timeline",
            Self::Journey => "journey",
        }
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a diagram kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown diagram kind `{0}`")]
pub struct UnknownDiagramKind(pub String);

impl FromStr for DiagramKind {
    type Err = UnknownDiagramKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flowchart" => Ok(Self::Flowchart),
            "sequence" | "sequenceDiagram" => Ok(Self::Sequence),
            "class" | "classDiagram" => Ok(Self::Class),
            "state" => Ok(Self::State),
            "er" | "entityRelation" => Ok(Self::EntityRelation),
            "network" => Ok(Self::Network),
            "timeline" => Ok(Self::Timeline),
            "journey" => Ok(Self::Journey),
            other => Err(UnknownDiagramKind(other.to_string())),
        }
    }
}

/// A single element of a diagram description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiagramElement {
    /// A flowchart or generic graph node.
    Node {
        id: String,
        #[serde(default)]
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<String>,
    },
    /// A directed edge between two node ids.
    Edge { from: String, to: String },
    /// A sequence-diagram participant. Displays `id` when no label is set.
    Participant {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// A sequence-diagram message arrow.
    Message {
        from: String,
        to: String,
        #[serde(default)]
        label: String,
    },
    /// A class with its attribute lines.
    Class {
        name: String,
        #[serde(default)]
        attributes: Vec<String>,
    },
    /// A timeline section header.
    Section { name: String },
    /// A timeline event under the current section.
    Event {
        name: String,
        #[serde(default)]
        description: String,
    },
    /// An element with an unrecognized tag.
    #[serde(other)]
    Other,
}

impl DiagramElement {
    /// Create a node without a style.
    pub fn node(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Node {
            id: id.into(),
            label: label.into(),
            style: None,
        }
    }

    /// Create a node with a style assignment.
    pub fn styled_node(
        id: impl Into<String>,
        label: impl Into<String>,
        style: impl Into<String>,
    ) -> Self {
        Self::Node {
            id: id.into(),
            label: label.into(),
            style: Some(style.into()),
        }
    }

    /// Create a directed edge.
    pub fn edge(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::Edge {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a participant displayed under its own id.
    pub fn participant(id: impl Into<String>) -> Self {
        Self::Participant {
            id: id.into(),
            label: None,
        }
    }

    /// Create a participant with a display alias.
    pub fn aliased_participant(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Participant {
            id: id.into(),
            label: Some(label.into()),
        }
    }

    /// Create a message arrow.
    pub fn message(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::Message {
            from: from.into(),
            to: to.into(),
            label: label.into(),
        }
    }

    /// Create a class with the given attribute lines.
    pub fn class<I, S>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Class {
            name: name.into(),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a timeline section.
    pub fn section(name: impl Into<String>) -> Self {
        Self::Section { name: name.into() }
    }

    /// Create a timeline event.
    pub fn event(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Event {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns the `"type"` tag of this element.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Node { .. } => "node",
            Self::Edge { .. } => "edge",
            Self::Participant { .. } => "participant",
            Self::Message { .. } => "message",
            Self::Class { .. } => "class",
            Self::Section { .. } => "section",
            Self::Event { .. } => "event",
            Self::Other => "other",
        }
    }

    /// Returns the attributes that must be present for a tag, or `None` for
    /// tags that are not recognized.
    pub fn required_fields(tag: &str) -> Option<&'static [&'static str]> {
        match tag {
            "node" => Some(&["id"]),
            "edge" => Some(&["from", "to"]),
            "participant" => Some(&["id"]),
            "message" => Some(&["from", "to"]),
            "class" => Some(&["name"]),
            "section" => Some(&["name"]),
            "event" => Some(&["name"]),
            _ => None,
        }
    }
}
