//! Configuration types for Visdoc documents.
//!
//! This module provides the configuration read by a [`DocumentBuilder`]. All
//! types implement [`serde::Deserialize`] so they can be loaded from JSON or
//! TOML files by the CLI.
//!
//! Both sections are kept as read, including keys and value types that no
//! accessor understands, so a config written for a newer release still
//! loads. Accessors fall back to the built-in defaults when a value is
//! missing or has an unexpected type. No template reads these tokens yet.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining colors and typography.
//! - [`Palette`] - Named color tokens in declaration order.
//! - [`Typography`] - Font stacks, line height, and any extra keys.
//!
//! # Example
//!
//! ```
//! # use visdoc::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.colors().get("primary"), Some("#2196F3"));
//! assert_eq!(config.typography().line_height(), 1.6);
//! ```
//!
//! [`DocumentBuilder`]: crate::DocumentBuilder

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use visdoc_core::color::Color;

const DEFAULT_HEADING_FONT: &str = "Inter, Roboto, system-ui";
const DEFAULT_CODE_FONT: &str = "Fira Code, JetBrains Mono";
const DEFAULT_LINE_HEIGHT: f64 = 1.6;

/// Top-level configuration combining colors and typography.
///
/// A section missing from the file takes its built-in default. A section
/// that is present replaces the default as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Color palette section.
    #[serde(default)]
    colors: Palette,

    /// Typography section.
    #[serde(default)]
    typography: Typography,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from a palette and typography settings.
    pub fn new(colors: Palette, typography: Typography) -> Self {
        Self { colors, typography }
    }

    /// Returns the color palette.
    pub fn colors(&self) -> &Palette {
        &self.colors
    }

    /// Returns the typography settings.
    pub fn typography(&self) -> &Typography {
        &self.typography
    }
}

/// Named color tokens, kept in the order they were declared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(IndexMap<String, Value>);

impl Palette {
    /// Creates a palette from `(name, token)` pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            entries
                .into_iter()
                .map(|(name, token)| (name.into(), Value::String(token.into())))
                .collect(),
        )
    }

    /// Returns the token for `name` if it is a string.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(Value::as_str)
    }

    /// Returns the value for `name` as it appeared in the file.
    pub fn raw(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the parsed [`Color`] for `name`, or `None` if it is not defined.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string or cannot be parsed as a
    /// CSS color.
    pub fn color(&self, name: &str) -> Result<Option<Color>, String> {
        let Some(value) = self.raw(name) else {
            return Ok(None);
        };
        let token = value
            .as_str()
            .ok_or_else(|| format!("Invalid color `{name}` in config: expected a string, found {value}"))?;
        Color::new(token)
            .map(Some)
            .map_err(|err| format!("Invalid color `{name}` in config: {err}"))
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of named colors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the palette defines no colors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new([
            ("primary", "#2196F3"),
            ("secondary", "#4CAF50"),
            ("accent", "#FF9800"),
            ("error", "#f44336"),
            ("neutral", "#607D8B"),
        ])
    }
}

/// Font stacks and line height.
///
/// Every key of the section is kept. The typed accessors return the default
/// for a key that is missing or holds a value of another type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Typography(IndexMap<String, Value>);

impl Typography {
    /// Creates typography settings with the three known keys.
    pub fn new(
        heading_font: impl Into<String>,
        code_font: impl Into<String>,
        line_height: f64,
    ) -> Self {
        Self(IndexMap::from([
            ("heading_font".to_string(), Value::String(heading_font.into())),
            ("code_font".to_string(), Value::String(code_font.into())),
            ("line_height".to_string(), Value::from(line_height)),
        ]))
    }

    /// Returns the heading font stack.
    pub fn heading_font(&self) -> &str {
        self.string_or("heading_font", DEFAULT_HEADING_FONT)
    }

    /// Returns the code font stack.
    pub fn code_font(&self) -> &str {
        self.string_or("code_font", DEFAULT_CODE_FONT)
    }

    /// Returns the line height multiplier.
    pub fn line_height(&self) -> f64 {
        self.0
            .get("line_height")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_LINE_HEIGHT)
    }

    /// Returns any key of the section as it appeared in the file.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).and_then(Value::as_str).unwrap_or(default)
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self::new(DEFAULT_HEADING_FONT, DEFAULT_CODE_FONT, DEFAULT_LINE_HEIGHT)
    }
}
