//! 底部按键提示

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

const SEPARATOR: &str = " • ";

/// 渲染按键提示
///
/// 提示文本形如 "键 说明 • 键 说明"，键与说明分别着色
pub fn render(frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = Vec::new();

    for (i, hint) in t().wizard.help_foot.split(SEPARATOR).enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(c.border)));
        }
        match hint.split_once(' ') {
            Some((key, desc)) => {
                spans.push(Span::styled(key, Styles::hint_key()));
                spans.push(Span::raw(" "));
                spans.push(Span::styled(desc, Styles::hint_desc()));
            }
            None => spans.push(Span::styled(hint, Styles::hint_desc())),
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
