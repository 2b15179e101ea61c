//! 繁體中文翻譯 (zh-TW)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "柚子社 UI 資源包產生器",
    },

    // ========================================================================
    // 向導頁面
    // ========================================================================
    wizard: WizardTexts {
        multi_help_head: "選擇要加入的角色語音（可多選，選中叢雨表示保留原版語音）：",
        single_help_head: "選擇標題畫面貼圖的語言：",
        help_foot: "↑↓/jk 移動 • ←→/hl 翻頁 • 空白/Enter 選擇 • q 完成 • Ctrl+C 中斷",
    },

    // ========================================================================
    // 按鈕
    // ========================================================================
    buttons: ButtonTexts {
        prev: "上一頁",
        next: "下一頁",
        ok: "完成",
    },

    // ========================================================================
    // 建置結果
    // ========================================================================
    summary: SummaryTexts {
        output: "已產生資源包：",
        written: "寫入項目數：",
        skipped: "以下資源缺失，已略過：",
        failed: "建置失敗：",
    },

    // ========================================================================
    // 目錄項目
    // ========================================================================
    names: &[
        ("char.1yoshino", "朝武芳乃"),
        ("char.2mako", "常陸茉子"),
        ("char.3murasame", "叢雨（保留原版語音）"),
        ("char.4lena", "蕾娜·列支敦瑙爾"),
        ("char.5koharu", "鞍馬小春"),
        ("char.6roka", "馬庭蘆花"),
        ("char.7mizuha", "朝武秋穗"),
        ("char.8rentarou", "鞍馬廉太郎"),
        ("char.9genjurou", "鞍馬玄十郎"),
        ("char.$yasuharu", "朝武安晴"),
        ("lang.zh-CN", "簡體中文"),
        ("lang.zh-TW", "繁體中文"),
        ("lang.en-US", "English"),
    ],
};
