//! Read-only asset store abstraction
//!
//! Assets are addressed by hierarchical `/`-separated keys such as
//! `sounds/2mako/mako_load.ogg`. The TUI ships an embedded implementation;
//! [`DirAssetStore`] serves an unpacked asset tree from disk and
//! [`MemoryAssetStore`] backs the tests.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Source of asset bytes.
pub trait AssetStore {
    /// Read the asset at `key`, or `None` when it does not exist.
    fn read(&self, key: &str) -> Option<Cow<'_, [u8]>>;

    /// Whether an asset exists at `key`.
    fn contains(&self, key: &str) -> bool {
        self.read(key).is_some()
    }
}

impl<T: AssetStore + ?Sized> AssetStore for &T {
    fn read(&self, key: &str) -> Option<Cow<'_, [u8]>> {
        (**self).read(key)
    }
}

impl<T: AssetStore + ?Sized> AssetStore for Box<T> {
    fn read(&self, key: &str) -> Option<Cow<'_, [u8]>> {
        (**self).read(key)
    }
}

/// In-memory asset store.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetStore {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) an asset.
    pub fn insert(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(key.into(), bytes.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(key, bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetStore for MemoryAssetStore {
    fn read(&self, key: &str) -> Option<Cow<'_, [u8]>> {
        self.files.get(key).map(|bytes| Cow::Borrowed(bytes.as_slice()))
    }
}

/// Asset store rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DirAssetStore {
    root: PathBuf,
}

impl DirAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to a path below the root; keys that would escape it are
    /// rejected.
    fn resolve(&self, key: &str) -> Option<PathBuf> {
        let relative = Path::new(key);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl AssetStore for DirAssetStore {
    fn read(&self, key: &str) -> Option<Cow<'_, [u8]>> {
        let path = self.resolve(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Some(Cow::Owned(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Asset {key} not found at {}", path.display());
                None
            }
            Err(e) => {
                log::warn!("Asset {key} unreadable at {}: {e}", path.display());
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_read() {
        let store = MemoryAssetStore::new().with("a/b.txt", b"hello".to_vec());
        assert_eq!(store.read("a/b.txt").as_deref(), Some(&b"hello"[..]));
        assert!(store.read("a/c.txt").is_none());
        assert!(store.contains("a/b.txt"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_dir_store_reads_nested_keys() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("sounds/others")).unwrap();
        std::fs::write(dir.path().join("sounds/others/pack.mcmeta"), b"{}").unwrap();

        let store = DirAssetStore::new(dir.path());
        assert_eq!(
            store.read("sounds/others/pack.mcmeta").as_deref(),
            Some(&b"{}"[..])
        );
        assert!(store.read("sounds/others/pack.png").is_none());
    }

    #[test]
    fn test_dir_store_unreadable_entry_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where a file is expected: not NotFound, still absent
        std::fs::create_dir_all(dir.path().join("sounds/others/pack.png")).unwrap();

        let store = DirAssetStore::new(dir.path());
        assert!(store.read("sounds/others/pack.png").is_none());
        assert!(!store.contains("sounds/others/pack.png"));
    }

    #[test]
    fn test_dir_store_rejects_escaping_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirAssetStore::new(dir.path().join("inner"));
        assert!(store.read("../secret").is_none());
        assert!(store.read("/etc/passwd").is_none());
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryAssetStore::new().with("k", vec![1, 2]);
        let by_ref: &dyn AssetStore = &store;
        assert!(by_ref.contains("k"));
    }
}
