//! 选项列表组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{ControlId, PageState, ZoneMap};
use crate::view::theme::colors;

/// 渲染当前页面的列表，并登记每个可见行的点击区域
///
/// 列表超出可用高度时滚动，保证光标所在行可见
pub fn render(page: &PageState, frame: &mut Frame, area: Rect, zones: &mut ZoneMap) {
    let c = colors();
    let height = usize::from(area.height);
    if height == 0 {
        return;
    }
    let offset = (page.cursor + 1).saturating_sub(height);
    let visible = || page.items.iter().skip(offset).take(height);

    let lines: Vec<Line> = visible()
        .map(|item| {
            let is_cursor = item.index == page.cursor;
            let is_selected = page.is_selected(item.index);

            let prefix = if is_cursor { ">" } else { " " };
            let (checkbox, mut label_style) = if is_selected {
                ("[x]", Style::default().fg(c.checked))
            } else {
                ("[ ]", Style::default().fg(c.muted))
            };
            if is_cursor {
                label_style = label_style.add_modifier(Modifier::BOLD);
            }

            Line::from(vec![
                Span::styled(prefix, Style::default().fg(c.cursor).add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(checkbox, label_style),
                Span::raw(" "),
                Span::styled(item.label.as_str(), label_style),
            ])
        })
        .collect();

    for (item, row) in visible().zip(area.y..) {
        let id = ControlId::Item {
            page: page.id,
            index: item.index,
        };
        zones.mark(id, Rect::new(area.x, row, area.width, 1));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
