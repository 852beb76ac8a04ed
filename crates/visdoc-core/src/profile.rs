//! Documentation profiles.
//!
//! A [`Profile`] names the documentation style requested by the caller. It
//! only controls which optional static blocks the renderer includes.

use std::{convert::Infallible, fmt, str::FromStr};

/// The documentation style controlling optional template blocks.
///
/// Unrecognized names are kept as [`Profile::Other`] and render like the
/// non-hardware profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Hardware/IoT write-up. Includes the architecture and circuit blocks.
    #[default]
    Iot,
    /// API reference style.
    Api,
    /// Step-by-step tutorial style.
    Tutorial,
    /// Any other profile name.
    Other(String),
}

impl Profile {
    /// Returns the profile name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Iot => "iot",
            Self::Api => "api",
            Self::Tutorial => "tutorial",
            Self::Other(name) => name,
        }
    }

    /// Returns `true` if the architecture and circuit-diagram blocks are rendered.
    pub fn includes_hardware_blocks(&self) -> bool {
        matches!(self, Self::Iot)
    }
}

impl From<&str> for Profile {
    fn from(name: &str) -> Self {
        match name {
            "iot" => Self::Iot,
            "api" => Self::Api,
            "tutorial" => Self::Tutorial,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for Profile {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
