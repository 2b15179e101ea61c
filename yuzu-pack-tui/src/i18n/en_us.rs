//! English translations (en-US)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // Common
    // ========================================================================
    common: CommonTexts {
        app_name: "YuZu UI Pack Builder",
    },

    // ========================================================================
    // Wizard
    // ========================================================================
    wizard: WizardTexts {
        multi_help_head: "Pick the character voices to include (multi-select; Murasame keeps the stock voice):",
        single_help_head: "Pick the language of the title-screen textures:",
        help_foot: "↑↓/jk move • ←→/hl page • space/enter select • q done • ctrl+c abort",
    },

    // ========================================================================
    // Buttons
    // ========================================================================
    buttons: ButtonTexts {
        prev: "Prev",
        next: "Next",
        ok: "OK",
    },

    // ========================================================================
    // Build summary
    // ========================================================================
    summary: SummaryTexts {
        output: "Resource pack written: ",
        written: "Entries written: ",
        skipped: "Missing assets skipped:",
        failed: "Build failed: ",
    },

    // ========================================================================
    // Catalog names
    // ========================================================================
    names: &[
        ("char.1yoshino", "Tomotake Yoshino"),
        ("char.2mako", "Hitachi Mako"),
        ("char.3murasame", "Murasame (keep stock voice)"),
        ("char.4lena", "Lena Liechtenauer"),
        ("char.5koharu", "Kurama Koharu"),
        ("char.6roka", "Mabase Roka"),
        ("char.7mizuha", "Tomotake Mizuha"),
        ("char.8rentarou", "Kurama Rentarou"),
        ("char.9genjurou", "Kurama Genjurou"),
        ("char.$yasuharu", "Tomotake Yasuharu"),
        ("lang.zh-CN", "简体中文"),
        ("lang.zh-TW", "繁體中文"),
        ("lang.en-US", "English"),
    ],
};
