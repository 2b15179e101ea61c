//! 中文翻译 (zh-CN)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "柚子社 UI 资源包生成器",
    },

    // ========================================================================
    // 向导页面
    // ========================================================================
    wizard: WizardTexts {
        multi_help_head: "选择要加入的角色语音（可多选，选中丛雨表示保留原版语音）：",
        single_help_head: "选择标题界面贴图的语言：",
        help_foot: "↑↓/jk 移动 • ←→/hl 翻页 • 空格/回车 选择 • q 完成 • Ctrl+C 中断",
    },

    // ========================================================================
    // 按钮
    // ========================================================================
    buttons: ButtonTexts {
        prev: "上一页",
        next: "下一页",
        ok: "完成",
    },

    // ========================================================================
    // 构建结果
    // ========================================================================
    summary: SummaryTexts {
        output: "已生成资源包：",
        written: "写入条目数：",
        skipped: "以下资源缺失，已跳过：",
        failed: "构建失败：",
    },

    // ========================================================================
    // 目录条目
    // ========================================================================
    names: &[
        ("char.1yoshino", "朝武芳乃"),
        ("char.2mako", "常陆茉子"),
        ("char.3murasame", "丛雨（保留原版语音）"),
        ("char.4lena", "蕾娜·列支敦瑙尔"),
        ("char.5koharu", "鞍马小春"),
        ("char.6roka", "马庭芦花"),
        ("char.7mizuha", "朝武秋穗"),
        ("char.8rentarou", "鞍马廉太郎"),
        ("char.9genjurou", "鞍马玄十郎"),
        ("char.$yasuharu", "朝武安晴"),
        ("lang.zh-CN", "简体中文"),
        ("lang.zh-TW", "繁體中文"),
        ("lang.en-US", "English"),
    ],
};
