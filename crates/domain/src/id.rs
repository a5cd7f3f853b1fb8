//! Unit identity — the `"<block> | <number>"` identifier of the persisted form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`Unit`](crate::unit::Unit), e.g. `"A | 12"`.
///
/// The `" | "` separator is part of the persisted identity: existing
/// datasets and URLs key on the exact string, so the raw form is kept
/// rather than splitting it back into parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    /// Build the identifier from its block and number parts.
    #[must_use]
    pub fn from_parts(block: &str, number: &str) -> Self {
        Self(format!("{block} | {number}"))
    }

    /// View the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for UnitId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for UnitId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
