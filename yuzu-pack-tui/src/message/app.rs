//! 应用主消息枚举

use super::WizardMessage;

/// 应用主消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMessage {
    /// 正常退出（随后构建资源包）
    Quit,

    /// 中断退出（Ctrl+C）
    Interrupt,

    /// 向导相关消息
    Wizard(WizardMessage),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
