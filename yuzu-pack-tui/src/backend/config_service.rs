//! 配置服务

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use yuzu_pack_core::MissingSourcePolicy;

use crate::util::APP_DIR_NAME;
use crate::view::theme::Theme;

/// 覆盖配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "YUZU_PACK_CONFIG";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 界面语言（BCP 47），为空时跟随系统
    pub language: Option<String>,
    pub theme: Theme,
    /// 资源包输出目录
    pub output_dir: PathBuf,
    /// 磁盘上的资源目录，设置后代替内嵌资源
    pub asset_dir: Option<PathBuf>,
    /// 资源缺失时的处理方式
    pub missing_source: MissingSourcePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme: Theme::Dark,
            output_dir: PathBuf::from("."),
            asset_dir: None,
            missing_source: MissingSourcePolicy::default(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地配置服务，读写 JSON 配置文件
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 默认路径：`$YUZU_PACK_CONFIG`，否则 `<config_dir>/yuzu-pack/config.json`
    pub fn new() -> Self {
        let path = env::var_os(CONFIG_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map_or_else(default_config_file, PathBuf::from);
        Self::with_path(path)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// 获取默认配置文件路径
fn default_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("config.json")
}

impl ConfigService for LocalConfigService {
    /// 文件不存在时写入默认配置；内容无法解析时记录警告并使用默认配置
    fn load(&self) -> Result<AppConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = AppConfig::default();
                match self.save(&config) {
                    Ok(()) => log::info!("Wrote default config to {}", self.path.display()),
                    Err(e) => log::warn!("Could not write default config: {e:#}"),
                }
                return Ok(config);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Ignoring malformed config {}: {e}; using defaults",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("nested/config.json"));

        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(service.path().exists());
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"language": "en-US", "theme": "light", "missingSource": "failFast"}"#,
        )
        .unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config.language.as_deref(), Some("en-US"));
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.missing_source, MissingSourcePolicy::FailFast);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.asset_dir.is_none());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();
        assert_eq!(config, AppConfig::default());
        // 不覆盖用户的文件
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_save_uses_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::with_path(dir.path().join("config.json"));
        let config = AppConfig {
            asset_dir: Some(PathBuf::from("/srv/yuzu")),
            ..AppConfig::default()
        };
        service.save(&config).unwrap();

        let raw = fs::read_to_string(service.path()).unwrap();
        assert!(raw.contains("\"assetDir\""));
        assert!(raw.contains("\"outputDir\""));
        assert!(raw.contains("\"missingSource\": \"skip\""));
        assert_eq!(service.load().unwrap(), config);
    }
}
