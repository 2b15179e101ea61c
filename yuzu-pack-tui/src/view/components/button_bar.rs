//! 按钮栏：[ 上一页 ]  [ 下一页 ]  [ 完成 ]

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{ControlId, WizardState, ZoneMap};
use crate::view::theme::colors;

const GAP: &str = "  ";

/// 渲染按钮栏，并登记每个按钮的点击区域
///
/// 不可用的按钮置灰，但区域照常登记，是否响应由事件层判断
pub fn render(wizard: &WizardState, frame: &mut Frame, area: Rect, zones: &mut ZoneMap) {
    let texts = t();
    let c = colors();
    let buttons = [
        (ControlId::PrevButton, texts.buttons.prev, wizard.has_prev()),
        (ControlId::NextButton, texts.buttons.next, wizard.has_next()),
        (ControlId::ConfirmButton, texts.buttons.ok, true),
    ];

    let mut spans = Vec::new();
    let mut x = area.x;
    for (i, (id, label, enabled)) in buttons.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(GAP));
            x = x.saturating_add(display_width(GAP));
        }

        let text = format!("[ {label} ]");
        // 按显示宽度计算，中文按钮每个字占两列
        let width = display_width(&text);
        let clipped = width.min(area.right().saturating_sub(x));
        zones.mark(id, Rect::new(x, area.y, clipped, area.height.min(1)));
        x = x.saturating_add(width);

        let style = if enabled {
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };
        spans.push(Span::styled(text, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_counts_wide_chars() {
        assert_eq!(display_width("[ OK ]"), 6);
        assert_eq!(display_width("[ 完成 ]"), 8);
    }
}
