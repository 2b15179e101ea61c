//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **跨组件复用归 `common.*`**
//! 3. **目录条目归 `names`**：角色与语言名称按 ID 查找，见 [`super::tr`]

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 向导页面文本
    pub wizard: WizardTexts,
    /// 按钮文本
    pub buttons: ButtonTexts,
    /// 构建结果（退出界面后打印到终端）
    pub summary: SummaryTexts,
    /// 目录条目名称：(ID, 显示文本)
    ///
    /// ID 形如 `char.1yoshino`、`lang.zh-CN`
    pub names: &'static [(&'static str, &'static str)],
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
}

// ============================================================================
// 向导页面
// ============================================================================

/// 向导页面文本
pub struct WizardTexts {
    /// 多选页顶部说明
    pub multi_help_head: &'static str,
    /// 单选页顶部说明
    pub single_help_head: &'static str,
    /// 底部按键提示
    pub help_foot: &'static str,
}

// ============================================================================
// 按钮
// ============================================================================

/// 按钮文本
pub struct ButtonTexts {
    pub prev: &'static str,
    pub next: &'static str,
    pub ok: &'static str,
}

// ============================================================================
// 构建结果
// ============================================================================

/// 构建结果文本
pub struct SummaryTexts {
    /// 输出文件路径前缀
    pub output: &'static str,
    /// 写入条目数前缀
    pub written: &'static str,
    /// 缺失资源列表标题
    pub skipped: &'static str,
    /// 构建失败前缀
    pub failed: &'static str,
}
