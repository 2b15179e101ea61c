//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 目录条目（角色、语言）按字符串 ID 查找，查不到时原样返回 ID。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;
mod zh_tw;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 简体中文（中国）
    #[default]
    ZhCn,
    /// 繁体中文（台湾）
    ZhTw,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::ZhCn => "zh-CN",
            Language::ZhTw => "zh-TW",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码或系统 locale 解析
    ///
    /// 接受 `zh-CN`、`zh_TW.UTF-8`、`en_US@euro`、`zh-Hant` 等写法
    pub fn from_locale(locale: &str) -> Option<Language> {
        let tag = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('_', "-")
            .to_ascii_lowercase();

        match tag.as_str() {
            "zh-tw" | "zh-hk" | "zh-mo" => Some(Language::ZhTw),
            other if other.starts_with("zh-hant") => Some(Language::ZhTw),
            other if other == "zh" || other.starts_with("zh-") => Some(Language::ZhCn),
            other if other == "en" || other.starts_with("en-") => Some(Language::EnUs),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::ZhCn => 0,
            Language::ZhTw => 1,
            Language::EnUs => 2,
        }
    }

    fn translations(self) -> &'static Translations {
        match self {
            Language::ZhCn => &zh_cn::TRANSLATIONS,
            Language::ZhTw => &zh_tw::TRANSLATIONS,
            Language::EnUs => &en_us::TRANSLATIONS,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = ZhCn

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    current_language().translations()
}

/// 按 ID 查找目录条目的显示文本，查不到时返回 ID 本身
pub fn tr(id: &str) -> &str {
    lookup(t(), id).unwrap_or(id)
}

fn lookup(texts: &'static Translations, id: &str) -> Option<&'static str> {
    texts
        .names
        .iter()
        .find_map(|(key, text)| (*key == id).then_some(*text))
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::ZhTw,
        2 => Language::EnUs,
        _ => Language::ZhCn,
    }
}
