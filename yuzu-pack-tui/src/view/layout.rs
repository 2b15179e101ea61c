//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, PageKind, ZoneMap};

use super::components;
use super::theme::Styles;

/// 渲染整个界面，返回本次渲染登记的点击区域
pub fn render(app: &App, frame: &mut Frame) -> ZoneMap {
    let mut zones = ZoneMap::new();
    let texts = t();
    let size = frame.area();

    let block = Block::default()
        .title(format!(" {} ", texts.common.app_name))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1), // 帮助说明
            Constraint::Length(1),
            Constraint::Min(1),    // 列表
            Constraint::Length(1),
            Constraint::Length(1), // 页码
            Constraint::Length(1),
            Constraint::Length(1), // 按钮栏
            Constraint::Length(1),
            Constraint::Length(1), // 按键提示
        ])
        .split(inner);

    let page = app.wizard.active_page();
    render_help_head(page.kind(), frame, chunks[0]);
    components::item_list::render(page, frame, chunks[2], &mut zones);
    components::paginator::render(&app.wizard, frame, chunks[4]);
    components::button_bar::render(&app.wizard, frame, chunks[6], &mut zones);
    components::statusbar::render(frame, chunks[8]);

    zones
}

/// 渲染页面顶部说明，多选与单选文案不同
fn render_help_head(kind: PageKind, frame: &mut Frame, area: Rect) {
    let texts = t();
    let head = match kind {
        PageKind::Multi => texts.wizard.multi_help_head,
        PageKind::Single => texts.wizard.single_help_head,
    };
    frame.render_widget(Paragraph::new(head).style(Styles::title()), area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Position, Terminal};

    use crate::model::{ControlId, PageId};

    fn draw(app: &App, width: u16, height: u16) -> (ZoneMap, Buffer) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let mut zones = ZoneMap::new();
        terminal.draw(|frame| zones = render(app, frame)).unwrap();
        (zones, terminal.backend().buffer().clone())
    }

    fn row_text(buffer: &Buffer, row: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol())
            .collect()
    }

    #[test]
    fn test_render_marks_items_and_buttons() {
        let app = App::new();
        let (zones, buffer) = draw(&app, 100, 24);

        assert_eq!(zones.len(), 10 + 3);
        let rows: Vec<u16> = (0..10)
            .map(|index| {
                let id = ControlId::Item {
                    page: PageId::Characters,
                    index,
                };
                zones.get(id).unwrap().row()
            })
            .collect();
        assert!(rows.windows(2).all(|w| w[1] == w[0] + 1));

        // 光标在第 0 行，哨兵项默认选中
        assert!(row_text(&buffer, rows[0]).contains("> [ ]"));
        assert!(row_text(&buffer, rows[2]).contains("  [x]"));

        let ok = zones.get(ControlId::ConfirmButton).unwrap();
        assert_eq!(buffer[(ok.area.x, ok.area.y)].symbol(), "[");
        assert!(zones.get(ControlId::PrevButton).unwrap().area.x < ok.area.x);
    }

    #[test]
    fn test_render_locale_page() {
        let mut app = App::new();
        app.wizard.next_page();
        let (zones, buffer) = draw(&app, 100, 24);

        assert_eq!(zones.len(), 3 + 3);
        let first = ControlId::Item {
            page: PageId::Locale,
            index: 0,
        };
        assert!(row_text(&buffer, zones.get(first).unwrap().row()).contains("> [x]"));
    }

    #[test]
    fn test_small_terminal_keeps_cursor_visible() {
        let mut app = App::new();
        app.wizard.move_cursor(9);
        let area = Rect::new(0, 0, 30, 12);
        let (zones, _) = draw(&app, area.width, area.height);

        let cursor = ControlId::Item {
            page: PageId::Characters,
            index: 9,
        };
        assert!(zones.get(cursor).is_some());
        let hidden = ControlId::Item {
            page: PageId::Characters,
            index: 0,
        };
        assert!(zones.get(hidden).is_none());
        for index in 0..10 {
            let id = ControlId::Item {
                page: PageId::Characters,
                index,
            };
            if let Some(zone) = zones.get(id) {
                assert!(area.contains(Position::new(zone.area.x, zone.area.y)));
            }
        }
    }
}
