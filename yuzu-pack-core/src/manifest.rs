//! Archive manifest: ordered byte-copy instructions

use std::fmt;

/// Where the bytes of a manifest entry come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// An asset key in the asset store
    Asset(String),
    /// The generated sound document
    SoundDocument,
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asset(key) => f.write_str(key),
            Self::SoundDocument => f.write_str("<sounds.json>"),
        }
    }
}

/// One `(source, destination)` copy instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub source: ManifestSource,
    /// Path inside the archive
    pub dest: String,
}

impl ManifestEntry {
    pub fn asset(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: ManifestSource::Asset(source.into()),
            dest: dest.into(),
        }
    }

    pub fn sound_document(dest: impl Into<String>) -> Self {
        Self {
            source: ManifestSource::SoundDocument,
            dest: dest.into(),
        }
    }
}

/// Ordered list of manifest entries; archive order equals insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Destination paths in archive order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.dest.as_str())
    }

    /// Whether some entry reads the given asset key.
    pub fn has_source(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(&entry.source, ManifestSource::Asset(k) if k == key))
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
