use std::fmt;

use super::DocumentId;

pub const RESULT_FILENAME: &str = "result.json";

/// A bucket/key pair in the object store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Deterministic location of the extraction result for `document_id`.
    pub fn for_result(bucket: impl Into<String>, prefix: &str, document_id: &DocumentId) -> Self {
        let prefix = prefix.trim_matches('/');
        let key = if prefix.is_empty() {
            format!("{}/{}", document_id.as_uuid(), RESULT_FILENAME)
        } else {
            format!("{}/{}/{}", prefix, document_id.as_uuid(), RESULT_FILENAME)
        };
        Self::new(bucket, key)
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}
