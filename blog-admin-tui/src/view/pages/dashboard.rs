//! 仪表盘页面：按标签页路由渲染对应面板

use blog_admin_core::types::{Post, Tab};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, TableState, Wrap},
};

use crate::i18n::t;
use crate::model::{App, DashboardState};
use crate::view::theme::{Styles, colors};

/// 渲染仪表盘
///
/// 未知或缺失的标签页不渲染任何面板，只保留侧边栏。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(dashboard) = app.dashboard.as_ref() else {
        return;
    };

    match dashboard.router.selected() {
        Some(Tab::Dash) => render_dash(dashboard, frame, area),
        Some(Tab::Profile) => render_profile(app, frame, area),
        Some(Tab::Posts) => render_posts(dashboard, app.focus.is_content(), frame, area),
        Some(Tab::Users) => render_info(t().dashboard.users_info, frame, area),
        Some(Tab::Creation) => render_info(t().dashboard.creation_info, frame, area),
        None => {}
    }
}

fn post_title(post: &Post) -> &str {
    post.title
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(t().dashboard.untitled)
}

/// 加载中 / 错误的提示行；没有时返回 `None`
fn load_state_line(dashboard: &DashboardState) -> Option<Line<'static>> {
    if let Some(error) = &dashboard.error {
        return Some(Line::styled(format!("  {error}"), Styles::error()));
    }
    dashboard
        .loading
        .then(|| Line::styled(format!("  {}", t().common.loading), Styles::muted()))
}

/// 概览：文章统计 + 最近的文章
fn render_dash(dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = &t().dashboard;

    let mut lines = vec![Line::from("")];
    if let Some(line) = load_state_line(dashboard) {
        lines.push(line);
        lines.push(Line::from(""));
    }

    let stat = |label: &str, value: u64| {
        Line::from(vec![
            Span::styled(format!("  {label:<16}"), Styles::muted()),
            Span::styled(
                value.to_string(),
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    lines.push(stat(texts.total_posts, dashboard.total_posts));
    lines.push(stat(texts.last_month_posts, dashboard.last_month_posts));
    lines.push(Line::from(""));

    for post in dashboard.posts.iter().take(5) {
        lines.push(Line::from(vec![
            Span::styled("  • ", Styles::muted()),
            Span::styled(post_title(post).to_string(), Style::default().fg(c.fg)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// 个人资料
fn render_profile(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = &t().dashboard;

    if !app.actor.is_signed_in() {
        render_info(texts.not_signed_in, frame, area);
        return;
    }

    let role = if app.actor.is_admin {
        texts.role_admin
    } else {
        texts.role_user
    };
    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("  {label:<10}"), Styles::muted()),
            Span::styled(value.to_string(), Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::from(""),
        field(texts.profile_id, &app.actor.id),
        field(texts.profile_username, &app.actor.username),
        field(texts.profile_email, &app.actor.email),
        field(texts.profile_role, role),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// 当前用户的文章列表
fn render_posts(dashboard: &DashboardState, focused: bool, frame: &mut Frame, area: Rect) {
    let texts = &t().dashboard;

    if dashboard.posts.is_empty() {
        let line = load_state_line(dashboard)
            .unwrap_or_else(|| Line::styled(format!("  {}", texts.no_posts), Styles::muted()));
        frame.render_widget(Paragraph::new(vec![Line::from(""), line]), area);
        return;
    }

    let header = Row::new(vec![texts.col_title, texts.col_category, texts.col_updated])
        .style(Styles::title())
        .bottom_margin(1);

    let rows: Vec<Row> = dashboard
        .posts
        .iter()
        .map(|post| {
            let updated = post
                .updated_at
                .map(|at| at.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            Row::new(vec![
                post_title(post).to_string(),
                post.category.clone().unwrap_or_default(),
                updated,
            ])
        })
        .collect();

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(60),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .row_highlight_style(highlight)
    .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(dashboard.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// 只有说明文字的面板
fn render_info(text: &str, frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from(""), Line::styled(format!("  {text}"), Styles::muted())];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
