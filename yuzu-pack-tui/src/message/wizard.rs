//! 向导子消息

/// 作用于当前页面的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMessage {
    /// 光标上移
    CursorUp,
    /// 光标下移
    CursorDown,
    /// 切换光标所在项
    Toggle,
    /// 点击某一项（切换并移动光标）
    Click(usize),
    /// 下一页
    NextPage,
    /// 上一页
    PrevPage,
}
