//! Stable identifier derivation for story variants.
//!
//! Identifiers double as lookup keys and URL/anchor fragments, so they
//! are case-folded and restricted to a safe alphabet. Non-ASCII letters
//! are kept as-is rather than transliterated: `默认` and `禁用` must
//! never collapse to the same identifier.

use std::fmt;

use serde::Serialize;

use crate::title::TitlePath;

/// Joiner between the sanitized title path and the variant name.
const VARIANT_JOINER: &str = "--";

/// Joiner between sanitized title segments.
const SEGMENT_JOINER: char = '-';

/// A derived, URL-safe story variant identifier, e.g.
/// `examples-button--default`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    /// Derive the identifier for `variant_name` under `path`.
    ///
    /// Deterministic and pure. Sanitization is lossy (punctuation
    /// collapses to `-`), so derivation alone cannot guarantee
    /// uniqueness; registration detects collisions and rejects them
    /// rather than overwriting.
    pub fn derive(path: &TitlePath, variant_name: &str) -> Self {
        let kind = path
            .segments()
            .iter()
            .map(|segment| sanitize(segment))
            .collect::<Vec<_>>()
            .join(&SEGMENT_JOINER.to_string());

        Self(format!("{kind}{VARIANT_JOINER}{}", sanitize(variant_name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for StoryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for StoryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StoryId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Case-fold and restrict `input` to the safe identifier alphabet:
/// Unicode alphanumerics, `-` and `_`. Everything else becomes `-`,
/// runs of `-` collapse, and leading/trailing `-` are trimmed.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_dash && !out.is_empty() {
                out.push(SEGMENT_JOINER);
            }
            pending_dash = false;
            out.push(ch);
        } else {
            pending_dash = true;
        }
    }

    out
}
