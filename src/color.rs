use crate::util::equals_ignore_case;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color tag taken verbatim from the marker header.
///
/// The rewriters never interpret it; hosts that render highlights can call
/// [`Highlight::color`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Highlight(String);

impl Highlight {
    /// Returns `None` for blank values.
    pub fn new(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn color(&self) -> Result<HighlightColor, ColorError> {
        self.0.parse()
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Palette understood by intercepting-proxy history views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    None,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Pink,
    Magenta,
    Gray,
}

impl HighlightColor {
    pub const ALL: [HighlightColor; 10] = [
        HighlightColor::None,
        HighlightColor::Red,
        HighlightColor::Orange,
        HighlightColor::Yellow,
        HighlightColor::Green,
        HighlightColor::Cyan,
        HighlightColor::Blue,
        HighlightColor::Pink,
        HighlightColor::Magenta,
        HighlightColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HighlightColor::None => "none",
            HighlightColor::Red => "red",
            HighlightColor::Orange => "orange",
            HighlightColor::Yellow => "yellow",
            HighlightColor::Green => "green",
            HighlightColor::Cyan => "cyan",
            HighlightColor::Blue => "blue",
            HighlightColor::Pink => "pink",
            HighlightColor::Magenta => "magenta",
            HighlightColor::Gray => "gray",
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HighlightColor {
    type Err = ColorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if equals_ignore_case(value, "grey") {
            return Ok(HighlightColor::Gray);
        }
        HighlightColor::ALL
            .into_iter()
            .find(|color| equals_ignore_case(color.name(), value))
            .ok_or_else(|| ColorError::Unknown(value.to_string()))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("'{0}' is not a known highlight color")]
    Unknown(String),
}

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;
