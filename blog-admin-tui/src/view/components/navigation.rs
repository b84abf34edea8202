//! 左侧标签页面板

use blog_admin_core::types::Tab;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::{Styles, colors};

/// 标签页的显示名称
pub fn tab_label(tab: Tab) -> &'static str {
    let tabs = &t().tabs;
    match tab {
        Tab::Dash => tabs.dash,
        Tab::Profile => tabs.profile,
        Tab::Posts => tabs.posts,
        Tab::Users => tabs.users,
        Tab::Creation => tabs.creation,
    }
}

/// 渲染侧边栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", t().pages.dashboard))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_navigation()));

    // 当前路由选中的标签页（与光标位置不一定相同）
    let active = match app.current_page {
        Page::Dashboard => app.dashboard.as_ref().and_then(|d| d.router.selected()),
        _ => None,
    };

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_cursor = i == app.navigation.selected;
            let prefix = if is_cursor { "▶ " } else { "  " };
            let marker = if active == Some(item.tab) { " •" } else { "" };
            let content = format!("{prefix}{} {}{marker}", item.icon, tab_label(item.tab));

            let style = if is_cursor && app.focus.is_navigation() {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
