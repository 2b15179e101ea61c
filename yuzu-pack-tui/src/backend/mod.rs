//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! 界面之外的所有事情都在这里：配置文件、资源来源、资源包构建。
//! 构建本身由 yuzu-pack-core 完成，这里只负责按配置组装参数。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/yuzu-pack/config.json
//!                   （可用环境变量 YUZU_PACK_CONFIG 覆盖）
//!
//!         {
//!           "language": null,             // 界面语言，null 跟随系统
//!           "theme": "dark",              // dark / light
//!           "outputDir": ".",             // 资源包输出目录
//!           "assetDir": null,             // 磁盘资源目录，null 使用内嵌资源
//!           "missingSource": "skip"       // skip / failFast
//!         }
//!
//!         首次运行时写入默认配置。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、资源服务（asset_service）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     EmbeddedAssetStore：编译期内嵌的 assets/ 目录
//!     DirAssetStore（核心库）：assetDir 指向的磁盘目录
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、构建服务（BuildService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     主循环正常结束
//!         ↓
//!     app.wizard.snapshot() 得到 FinalSelection
//!         ↓
//!     BuildService::build 调用 yuzu_pack_core::build_archive
//!         ↓
//!     返回输出路径与写入报告，由 main.rs 打印
//!

mod asset_service;
mod build_service;
mod config_service;

pub use asset_service::open_asset_store;
pub use build_service::{BuildOutcome, BuildService};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
