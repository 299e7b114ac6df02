//! Title parsing: a human-authored title like `"Examples/Button"` becomes
//! the ordered breadcrumb the catalog tree is organized by.

use std::fmt;

use serde::Serialize;

use crate::error::{Result, StoryError};

/// Separator between title segments.
pub const SEPARATOR: char = '/';

/// Ordered, non-empty sequence of title segments.
///
/// Segments are split on [`SEPARATOR`] with empty segments discarded.
/// There is no escaping mechanism, so a segment that itself contains the
/// separator is not representable. Known limitation of the title format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TitlePath {
    segments: Vec<String>,
}

impl TitlePath {
    /// Parse a title string. Fails with [`StoryError::InvalidTitle`] when
    /// the title is empty or whitespace-only.
    pub fn parse(title: &str) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(StoryError::InvalidTitle);
        }

        let segments: Vec<String> = title
            .split(SEPARATOR)
            .filter(|segment| !segment.trim().is_empty())
            .map(str::to_owned)
            .collect();

        // A title made only of separators has no usable segments.
        if segments.is_empty() {
            return Err(StoryError::InvalidTitle);
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First segment: the top-level catalog category this story sits under.
    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    /// Last segment: the display name of the story itself.
    pub fn leaf(&self) -> &str {
        self.segments.last().expect("TitlePath is never empty")
    }
}

impl fmt::Display for TitlePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
