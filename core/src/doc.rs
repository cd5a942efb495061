use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;

/// Identifier of one saved document: `depth{D}_{sha1(locator)}`.
///
/// The fingerprint is the lowercase hex SHA-1 of the normalized locator
/// string, so the same locator at the same depth always maps to the same id,
/// across runs and processes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn for_locator(depth: usize, locator: &str) -> Self {
        Self(format!("depth{depth}_{}", fingerprint(locator)))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    /// File name used by the document store for this id.
    pub fn file_name(&self) -> String { format!("{}.txt", self.0) }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self { Self(s) }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

pub fn fingerprint(locator: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(locator.as_bytes());
    format!("{:x}", hasher.finalize())
}
