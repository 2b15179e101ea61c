//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复、日志文件、系统语言检测。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod locale;             // 系统语言检测
//!         mod logging;            // 日志文件
//!         mod terminal;           // 终端初始化与恢复
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、终端
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     初始化终端（init_terminal）：
//!         · enable_raw_mode()
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!         · EnterAlternateScreen
//!             - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!         · EnableMouseCapture
//!             - 接收鼠标点击，用于按钮与列表项
//!
//!     恢复终端（restore_terminal）按相反顺序撤销以上设置。
//!
//!     注意：无论正常退出、Ctrl+C 中断还是发生错误，都必须调用恢复函数！
//!           否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、日志
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端被界面占用，日志写入缓存目录下的 yuzu-pack.log。
//!     默认级别 info，可通过 RUST_LOG 覆盖。
//!     核心库通过 log 门面输出，同样会写入该文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、系统语言
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     依次读取 LC_ALL、LC_MESSAGES、LANG，只用于决定界面语言，
//!     与资源包贴图的语言无关。
//!

mod locale;
mod logging;
mod terminal;

pub use locale::{pick_language, system_locale};
pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};

/// 配置、缓存目录下使用的应用目录名
pub const APP_DIR_NAME: &str = "yuzu-pack";
