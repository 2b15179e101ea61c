//! 构建服务：把最终选择交给核心库生成资源包

use std::path::PathBuf;

use yuzu_pack_core::{
    build_archive, AssemblyReport, AssetStore, FinalSelection, MissingSourcePolicy, PackResult,
};

use super::{open_asset_store, AppConfig};

/// 一次构建的结果
#[derive(Debug)]
pub struct BuildOutcome {
    pub path: PathBuf,
    pub report: AssemblyReport,
}

/// 构建服务
pub struct BuildService {
    store: Box<dyn AssetStore>,
    output_dir: PathBuf,
    policy: MissingSourcePolicy,
}

impl BuildService {
    pub fn new(
        store: Box<dyn AssetStore>,
        output_dir: PathBuf,
        policy: MissingSourcePolicy,
    ) -> Self {
        Self {
            store,
            output_dir,
            policy,
        }
    }

    /// 按配置创建
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            open_asset_store(config),
            config.output_dir.clone(),
            config.missing_source,
        )
    }

    /// 生成资源包，覆盖同名旧文件
    pub fn build(&self, selection: &FinalSelection) -> PackResult<BuildOutcome> {
        log::info!(
            "Building pack: characters={:?} locale={}",
            selection.characters,
            selection.locale
        );
        let (path, report) =
            build_archive(selection, self.store.as_ref(), &self.output_dir, self.policy)?;
        for key in &report.skipped {
            log::warn!("Skipped missing asset {key}");
        }
        Ok(BuildOutcome { path, report })
    }
}
