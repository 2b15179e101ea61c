//! 快捷键配置
//!
//! 每个动作可以绑定多个按键（方向键 + vim 风格 + WASD）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift，以兼容大写锁定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 是否匹配任一绑定
pub fn matches_any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
    bindings.iter().any(|binding| binding.matches(key))
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: &'static [KeyBinding] = &[KeyBinding::char('q')];
    pub const INTERRUPT: &'static [KeyBinding] = &[KeyBinding::ctrl(KeyCode::Char('c'))];

    // 光标
    pub const CURSOR_UP: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Up),
        KeyBinding::char('k'),
        KeyBinding::char('w'),
    ];
    pub const CURSOR_DOWN: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Down),
        KeyBinding::char('j'),
        KeyBinding::char('s'),
    ];

    // 翻页
    pub const PREV_PAGE: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Left),
        KeyBinding::char('h'),
        KeyBinding::key(KeyCode::PageUp),
        KeyBinding::char('a'),
    ];
    pub const NEXT_PAGE: &'static [KeyBinding] = &[
        KeyBinding::key(KeyCode::Right),
        KeyBinding::char('l'),
        KeyBinding::key(KeyCode::PageDown),
        KeyBinding::char('d'),
    ];

    // 选择
    pub const TOGGLE: &'static [KeyBinding] =
        &[KeyBinding::char(' '), KeyBinding::key(KeyCode::Enter)];
}
