//! 底部状态栏组件

use blog_admin_core::types::Tab;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Styles::statusbar()), area);
}

/// 根据焦点和页面生成快捷键提示
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;
    let mut hints = vec![("Tab", h.switch_panels)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", h.navigate));
            hints.push(("Enter", h.select));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Dashboard => {
                let on_posts = app
                    .dashboard
                    .as_ref()
                    .is_some_and(|d| d.router.selected() == Some(Tab::Posts));
                if on_posts {
                    hints.push(("↑↓", h.select));
                    hints.push(("Enter", h.open));
                }
                hints.push(("Alt+r", h.refresh));
            }
            Page::UpdatePost => {
                hints.push(("↑↓", h.next_field));
                hints.push(("Alt+u", h.upload));
                hints.push(("Alt+s", h.submit));
                if app
                    .editor
                    .as_ref()
                    .is_some_and(|e| e.form.upload_status().error().is_some())
                {
                    hints.push(("Alt+x", h.dismiss));
                }
                hints.push(("Esc", h.back));
            }
            Page::Post { .. } => hints.push(("Esc", h.back)),
        },
    }

    hints.push(("Alt+h", h.help));
    hints.push(("Alt+q", h.quit));
    hints
}
