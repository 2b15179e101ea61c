//! 系统语言检测

use std::env;

use crate::i18n::Language;

/// 按 POSIX 优先级读取系统 locale
pub fn system_locale() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .find_map(|name| env::var(name).ok().filter(|value| !value.is_empty()))
}

/// 决定界面语言：配置 > 系统 locale > 简体中文
pub fn pick_language(configured: Option<&str>, system: Option<&str>) -> Language {
    configured
        .and_then(Language::from_locale)
        .or_else(|| system.and_then(Language::from_locale))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_language_precedence() {
        assert_eq!(pick_language(Some("en-US"), Some("zh_TW.UTF-8")), Language::EnUs);
        assert_eq!(pick_language(None, Some("zh_TW.UTF-8")), Language::ZhTw);
        // 无法识别的配置值退回系统 locale
        assert_eq!(pick_language(Some("klingon"), Some("en_GB.UTF-8")), Language::EnUs);
        assert_eq!(pick_language(None, Some("C")), Language::ZhCn);
        assert_eq!(pick_language(None, None), Language::ZhCn);
    }
}
