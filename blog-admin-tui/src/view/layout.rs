//! 主布局渲染

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{Styles, colors};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    // 三层布局：标题栏 + 主内容区 + 状态栏
    let [title_area, content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    render_title_bar(app, frame, title_area);

    // 左侧标签页 20%，右侧内容 80%
    let [nav_area, page_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .areas(content_area);

    components::navigation::render(app, frame, nav_area);
    render_page_content(app, frame, page_area);
    components::statusbar::render(app, frame, status_area);

    // 弹窗在最上层
    components::modal::render(app, frame);
}

/// 标题栏：应用名 + 当前路由 + 当前用户
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = if app.actor.is_signed_in() {
        format!(" {}  {}  [{}]", t().common.app_name, app.route, app.actor.display_name())
    } else {
        format!(" {}  {}", t().common.app_name, app.route)
    };
    let bar = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(bar, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let page_title = match &app.current_page {
        Page::Dashboard => app
            .dashboard
            .as_ref()
            .and_then(|d| d.router.selected())
            .map_or(texts.pages.dashboard, components::navigation::tab_label),
        Page::UpdatePost => texts.pages.update_post,
        Page::Post { .. } => texts.pages.post,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Dashboard => pages::dashboard::render(app, frame, inner_area),
        Page::UpdatePost => pages::update_post::render(app, frame, inner_area),
        Page::Post { slug } => pages::post::render(slug, frame, inner_area),
    }
}
