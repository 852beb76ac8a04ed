//! Palette color tokens.
//!
//! Configuration keeps palette entries as raw tokens. A [`Color`] is only
//! parsed when a caller asks the palette for one, so an invalid token never
//! stops a config from loading.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A CSS color parsed from a palette token.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color(DynamicColor);

impl Color {
    /// Parse a CSS color token such as `"#2196F3"`, `"rgb(33, 150, 243)"` or `"slategray"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use visdoc_core::color::Color;
    ///
    /// assert!(Color::new("#2196F3").is_ok());
    /// assert!(Color::new("brand-blue").is_err());
    /// ```
    pub fn new(token: &str) -> Result<Self, String> {
        DynamicColor::from_str(token)
            .map(Self)
            .map_err(|err| format!("invalid color `{token}`: {err}"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
