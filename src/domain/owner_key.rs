use std::fmt;

use serde::{Deserialize, Serialize};

/// Owner of an uploaded document, taken from the `uploads/{owner}/...` key layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerKey(String);

impl OwnerKey {
    pub const UNKNOWN: &'static str = "unknown";

    /// Second `/`-separated segment of the object key, or `unknown` when the key
    /// has fewer than two segments or the segment is empty.
    pub fn from_object_key(key: &str) -> Self {
        match key.split('/').nth(1) {
            Some(owner) if !owner.is_empty() => Self(owner.to_string()),
            _ => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
