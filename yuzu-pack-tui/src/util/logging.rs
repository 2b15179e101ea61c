//! 日志初始化

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::APP_DIR_NAME;

const LOG_FILE_NAME: &str = "yuzu-pack.log";

/// 初始化日志，输出到缓存目录下的日志文件
///
/// 返回日志文件路径；没有缓存目录或文件无法打开时不记录日志
pub fn init_logging() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join(APP_DIR_NAME);
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .ok()?;

    Some(path)
}
