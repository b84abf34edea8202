//! 文章页：提交成功后的落地页

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::view::theme::{Styles, colors};

pub fn render(slug: &str, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = &t().post;

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  ✓ {}", texts.published),
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(format!("  /post/{slug}"), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(format!("  {}", texts.back_hint), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}
