//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     exit: None,                                     // 退出请求
//!     wizard: WizardState {
//!         pages: [角色页（多选，默认选中丛雨）, 语言页（单选，默认第一项）],
//!         active: 0,                                      // 当前页
//!     },
//!     zones: ZoneMap::new(),                          // 点击区域，首次渲染后才有内容
//!
//! }
//!
//!
//! 主循环没有超时，阻塞等待下一个事件：
//! loop {
//!
//!     terminal.draw(|f| zones = view::render(&app , f))   // 渲染 UI，同时登记点击区域
//!     app.install_zones(zones)                            // 新区域替换旧区域
//!     if app.exit.is_some() { break }                     // 检查 APP 是否应该退出
//!     let event = read_event()?;                          // 阻塞读取事件
//!     let msg = handle_event(event , &app);               // 接收原始事件并分发消息
//!     update::update(&mut app , msg)                      // 更新状态
//! }
//!
//! 正常退出时汇总选择（snapshot），中断时直接返回。

use anyhow::Result;
use yuzu_pack_core::FinalSelection;

use crate::event;
use crate::model::{App, ExitRequest, ZoneMap};
use crate::update;
use crate::util::Term;
use crate::view;

/// 会话结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 正常退出，携带最终选择
    Confirmed(FinalSelection),
    /// Ctrl+C 中断
    Interrupted,
}

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<SessionOutcome> {
    loop {
        // 1. 渲染 UI，登记本轮点击区域
        let mut zones = ZoneMap::new();
        terminal.draw(|frame| {
            zones = view::render(app, frame);
        })?;
        app.install_zones(zones);
        tracing::trace!(
            "render pass {} marked {} zones",
            app.zones.generation(),
            app.zones.len()
        );

        // 2. 检查是否应该退出
        if let Some(request) = app.exit {
            return Ok(outcome(app, request));
        }

        // 3. 阻塞等待事件
        let event = event::read_event()?;

        // 4. 处理事件，获取消息
        let msg = event::handle_event(event, app);

        // 5. 更新状态
        update::update(app, msg);
    }
}

/// 根据退出方式生成会话结果，只有正常退出才汇总选择
fn outcome(app: &App, request: ExitRequest) -> SessionOutcome {
    match request {
        ExitRequest::Confirm => SessionOutcome::Confirmed(app.wizard.snapshot()),
        ExitRequest::Interrupt => SessionOutcome::Interrupted,
    }
}
