//! 应用主状态结构

use super::{WizardState, ZoneMap};

/// 会话结束方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRequest {
    /// 正常退出：汇总选择并构建资源包
    Confirm,
    /// 中断：不汇总、不构建
    Interrupt,
}

/// 应用主状态
#[derive(Debug, Default)]
pub struct App {
    /// 退出请求，`Some` 时主循环结束
    pub exit: Option<ExitRequest>,

    /// 向导状态（所有页面 + 当前页）
    pub wizard: WizardState,

    /// 最近一次渲染产生的点击区域
    pub zones: ZoneMap,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 安装新一轮渲染的点击区域，旧区域全部作废
    pub fn install_zones(&mut self, zones: ZoneMap) {
        self.zones.replace_with(zones);
    }
}
