//! 弹窗组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{Styles, colors};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    match &app.modal.active {
        Some(Modal::Help) => render_help(frame),
        Some(Modal::Error { title, message }) => render_error(frame, title, message),
        None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// 快捷键帮助
fn render_help(frame: &mut Frame) {
    let c = colors();
    let help = &t().help;

    let key_width = help
        .entries
        .iter()
        .map(|(key, _)| key.width())
        .max()
        .unwrap_or(0);
    let desc_width = help
        .entries
        .iter()
        .map(|(_, desc)| desc.width())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::from("")];
    for (key, desc) in help.entries {
        let pad = " ".repeat(key_width.saturating_sub(key.width()));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(*key, Styles::hint_key()),
            Span::raw(format!("{pad}   ")),
            Span::styled(*desc, Style::default().fg(c.fg)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(format!("  {}", t().modal.close_hint), Styles::muted()));

    // 左右各 2 格留白 + 3 格间隔 + 边框
    let width = to_u16(key_width + desc_width + 9);
    let height = to_u16(lines.len() + 2);
    let area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 错误提示
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(56, 9, frame.area());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(c.error).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(t().modal.close_hint, Styles::muted()),
    ];
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
