//! YuZu Pack Core Library
//!
//! Turns a finished wizard selection into a resource-pack archive:
//! - Catalog of characters, locales, sound categories and GUI textures
//! - Document patcher for the `sounds.json` sound-definition document
//! - Read-only asset store abstraction
//! - Archive assembly (output naming, manifest planning, zip writing)
//!
//! The library has no terminal dependencies; the TUI drives it once the
//! selection session has ended normally.

pub mod assembly;
pub mod assets;
pub mod catalog;
pub mod document;
pub mod error;
pub mod manifest;
pub mod selection;

// Re-export common types
pub use assembly::{
    assemble, build_archive, write_archive, AssemblyPlan, AssemblyReport, MissingSourcePolicy,
};
pub use assets::{AssetStore, DirAssetStore, MemoryAssetStore};
pub use document::SoundDocument;
pub use error::{PackError, PackResult};
pub use manifest::{Manifest, ManifestEntry, ManifestSource};
pub use selection::FinalSelection;
