//! 向导更新逻辑

use crate::message::WizardMessage;
use crate::model::App;

/// 处理向导消息
pub fn update(app: &mut App, msg: WizardMessage) {
    let wizard = &mut app.wizard;
    match msg {
        WizardMessage::CursorUp => wizard.move_cursor(-1),
        WizardMessage::CursorDown => wizard.move_cursor(1),
        WizardMessage::Toggle => wizard.toggle_at_cursor(),
        WizardMessage::Click(index) => wizard.click_item(index),
        WizardMessage::NextPage => {
            if !wizard.next_page() {
                log::debug!("already on the last page");
            }
        }
        WizardMessage::PrevPage => {
            if !wizard.prev_page() {
                log::debug!("already on the first page");
            }
        }
    }
}
