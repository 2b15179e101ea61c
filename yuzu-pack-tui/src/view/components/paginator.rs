//! 页码圆点

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::WizardState;
use crate::view::theme::colors;

/// 渲染页码，当前页高亮
pub fn render(wizard: &WizardState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![Span::raw("  ")];
    spans.extend((0..wizard.page_count()).map(|i| {
        let color = if i == wizard.active_index() { c.fg } else { c.border };
        Span::styled("•", Style::default().fg(color))
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
