//! YuZu Pack TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置、资源与构建 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入缓存目录，终端留给界面
//!     config.load()           // 读取配置，首次运行写入默认值
//!     set_language()          // 配置 > 系统 locale > 简体中文
//!     init_terminal()         // 原始模式 + 备用屏幕 + 鼠标捕获
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!     build()                 // 正常退出时构建资源包
//!
//! }
//!
//!
//! 退出码：
//!     0       正常退出且构建成功
//!     130     Ctrl+C 中断（打印 KeyboardInterrupt）
//!     1       终端错误、写入失败或 failFast 策略下资源缺失

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::process::ExitCode;

use anyhow::Result;

use app::SessionOutcome;
use backend::{AppConfig, BuildOutcome, BuildService, ConfigService, LocalConfigService};
use util::{init_terminal, restore_terminal};

/// 中断退出码（128 + SIGINT）
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Fatal: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // 1. 日志
    let log_file = util::init_logging();
    tracing::info!("Starting YuZu Pack v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &log_file {
        tracing::debug!("Logging to {}", path.display());
    }

    // 2. 配置
    let config_service = LocalConfigService::new();
    tracing::info!("Config file: {}", config_service.path().display());
    let config = config_service.load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {e:#}");
        AppConfig::default()
    });

    // 3. 语言与主题（创建 App 之前，列表文本在创建时翻译）
    let system = util::system_locale();
    let language = util::pick_language(config.language.as_deref(), system.as_deref());
    i18n::set_language(language);
    view::theme::set_theme(config.theme);
    tracing::info!("UI language: {}", language.code());

    let builder = BuildService::from_config(&config);

    // 4. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 6. 根据会话结果构建或退出
    match result? {
        SessionOutcome::Interrupted => {
            tracing::info!("Session interrupted");
            println!("KeyboardInterrupt");
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
        SessionOutcome::Confirmed(selection) => match builder.build(&selection) {
            Ok(outcome) => {
                print_summary(&outcome);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                tracing::error!("Build failed: {e}");
                eprintln!("{}{e}", i18n::t().summary.failed);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

/// 打印构建结果
fn print_summary(outcome: &BuildOutcome) {
    let texts = &i18n::t().summary;
    println!("{}{}", texts.output, outcome.path.display());
    println!("{}{}", texts.written, outcome.report.written.len());

    if !outcome.report.skipped.is_empty() {
        println!("{}", texts.skipped);
        for key in &outcome.report.skipped {
            println!("  - {key}");
        }
    }
}
