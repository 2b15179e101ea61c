//! 事件处理器

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::event::keymap::{matches_any, DefaultKeymap};
use crate::message::{AppMessage, WizardMessage};
use crate::model::{App, ControlId};

/// 阻塞等待下一个事件
pub fn read_event() -> Result<Event> {
    Ok(event::read()?)
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),               // 键盘事件
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),  // 鼠标事件
        Event::Resize(_, _) => AppMessage::Noop,                            // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if matches_any(DefaultKeymap::INTERRUPT, &key) {
        return AppMessage::Interrupt;
    }
    if matches_any(DefaultKeymap::QUIT, &key) {
        return AppMessage::Quit;
    }

    let msg = if matches_any(DefaultKeymap::CURSOR_UP, &key) {
        WizardMessage::CursorUp
    } else if matches_any(DefaultKeymap::CURSOR_DOWN, &key) {
        WizardMessage::CursorDown
    } else if matches_any(DefaultKeymap::PREV_PAGE, &key) {
        WizardMessage::PrevPage
    } else if matches_any(DefaultKeymap::NEXT_PAGE, &key) {
        WizardMessage::NextPage
    } else if matches_any(DefaultKeymap::TOGGLE, &key) {
        WizardMessage::Toggle
    } else {
        return AppMessage::Noop;
    };

    AppMessage::Wizard(msg)
}

/// 处理鼠标事件
///
/// 只响应左键按下，与最近一次渲染的区域比对，每次按下最多产生一条消息
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return AppMessage::Noop;
    }
    // 尚未渲染过
    if app.zones.is_empty() {
        return AppMessage::Noop;
    }
    let (column, row) = (mouse.column, mouse.row);
    let wizard = &app.wizard;
    let hit = |id| app.zones.get(id).is_some_and(|zone| zone.contains(column, row));

    if wizard.has_prev() && hit(ControlId::PrevButton) {
        return AppMessage::Wizard(WizardMessage::PrevPage);
    }
    if wizard.has_next() && hit(ControlId::NextButton) {
        return AppMessage::Wizard(WizardMessage::NextPage);
    }
    if hit(ControlId::ConfirmButton) {
        return AppMessage::Quit;
    }

    // 列表项：落在区域内，且与记录的起始行一致
    let page = wizard.active_page();
    page.items
        .iter()
        .find(|item| {
            let id = ControlId::Item {
                page: page.id,
                index: item.index,
            };
            app.zones
                .get(id)
                .is_some_and(|zone| zone.contains(column, row) && zone.row() == row)
        })
        .map_or(AppMessage::Noop, |item| {
            AppMessage::Wizard(WizardMessage::Click(item.index))
        })
}
