//! 资源服务
//!
//! 默认使用编译进程序的资源（`assets/` 目录），
//! 配置了 `assetDir` 时改为读取磁盘目录。

use std::borrow::Cow;

use rust_embed::RustEmbed;
use yuzu_pack_core::{AssetStore, DirAssetStore};

use super::AppConfig;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct EmbeddedAssets;

/// 内嵌资源
pub struct EmbeddedAssetStore;

impl AssetStore for EmbeddedAssetStore {
    fn read(&self, key: &str) -> Option<Cow<'_, [u8]>> {
        EmbeddedAssets::get(key).map(|file| file.data)
    }
}

/// 按配置选择资源来源
pub fn open_asset_store(config: &AppConfig) -> Box<dyn AssetStore> {
    match &config.asset_dir {
        Some(dir) => {
            log::info!("Reading assets from {}", dir.display());
            Box::new(DirAssetStore::new(dir.clone()))
        }
        None => {
            log::info!("Reading embedded assets");
            Box::new(EmbeddedAssetStore)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use yuzu_pack_core::catalog::{PACK_METADATA, SOUND_CATEGORIES, SOUND_DOCUMENT_SOURCE};
    use yuzu_pack_core::SoundDocument;

    #[test]
    fn test_embedded_sound_document_has_every_event() {
        let bytes = EmbeddedAssetStore.read(SOUND_DOCUMENT_SOURCE).unwrap();
        let doc = SoundDocument::from_slice(&bytes).unwrap();
        for category in &SOUND_CATEGORIES {
            assert_eq!(doc.replace_flag(category.event), Some(false));
        }
    }

    #[test]
    fn test_embedded_pack_metadata() {
        assert!(EmbeddedAssetStore.contains(PACK_METADATA.0));
        assert!(!EmbeddedAssetStore.contains("sounds/none.ogg"));
    }

    #[test]
    fn test_asset_dir_overrides_embedded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("sounds/others")).unwrap();
        std::fs::write(dir.path().join(PACK_METADATA.0), b"{}").unwrap();

        let config = AppConfig {
            asset_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        let store = open_asset_store(&config);
        assert_eq!(store.read(PACK_METADATA.0).unwrap().as_ref(), b"{}");
        assert!(!store.contains(SOUND_DOCUMENT_SOURCE));
    }
}
