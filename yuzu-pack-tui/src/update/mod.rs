//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod wizard;             // 向导子消息处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!     使用 match 进行穷举，每个 Message 变体都对应一个状态变更。
//!     向导子消息委托给 wizard.rs，它只操作当前页面。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod wizard;

use crate::message::AppMessage;
use crate::model::{App, ExitRequest};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.exit = Some(ExitRequest::Confirm);
        }

        AppMessage::Interrupt => {
            app.exit = Some(ExitRequest::Interrupt);
        }

        AppMessage::Wizard(wizard_msg) => {
            wizard::update(app, wizard_msg);
        }

        AppMessage::Noop => {}
    }
}
