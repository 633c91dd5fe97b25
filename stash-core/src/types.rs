//! Core types for stash archives

use bytes::Bytes;

/// A named blob stored inside an archive
///
/// Names are not unique; two entries with the same name are kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Name supplied when the entry was added
    pub name: String,

    /// Raw content bytes
    pub content: Bytes,
}

impl Entry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Size of the content in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<N: Into<String>, C: Into<Bytes>> From<(N, C)> for Entry {
    fn from((name, content): (N, C)) -> Self {
        Entry::new(name, content)
    }
}
