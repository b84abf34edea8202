//! 编辑文章表单

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use blog_admin_core::types::UploadStatus;

use crate::i18n::t;
use crate::model::{App, EditorField, EditorState};
use crate::view::theme::{Styles, colors};

/// 输入光标
const CURSOR: &str = "▎";

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };
    let focused = app.focus.is_content();

    let [title_area, content_area, image_area, upload_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(2),
        ])
        .areas(area);

    let texts = &t().editor;
    let draft = editor.form.draft();

    render_field(
        frame,
        title_area,
        texts.title_label,
        draft.title(),
        focused && editor.field == EditorField::Title,
    );
    render_field(
        frame,
        content_area,
        texts.content_label,
        draft.content(),
        focused && editor.field == EditorField::Content,
    );
    render_image_field(frame, image_area, editor, focused && editor.field == EditorField::Image);
    render_upload_status(frame, upload_area, editor.form.upload_status());
    render_footer(frame, footer_area, editor);
}

/// 带边框的文本输入框
fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(active));

    let mut text = value.to_string();
    if active {
        text.push_str(CURSOR);
    }
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(c.fg))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 图片路径输入框，右侧显示当前图片地址
fn render_image_field(frame: &mut Frame, area: Rect, editor: &EditorState, active: bool) {
    let c = colors();
    let texts = &t().editor;

    let [input_area, current_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(area);

    let block = Block::default()
        .title(format!(" {} ", texts.image_label))
        .borders(Borders::ALL)
        .border_style(Styles::border(active));
    let input = if editor.image_path.is_empty() && !active {
        Line::styled(texts.image_placeholder, Styles::muted())
    } else if active {
        Line::styled(format!("{}{CURSOR}", editor.image_path), Style::default().fg(c.fg))
    } else {
        Line::styled(editor.image_path.clone(), Style::default().fg(c.fg))
    };
    frame.render_widget(Paragraph::new(input).block(block), input_area);

    let current = editor.form.draft().image().map_or_else(
        || Line::styled(texts.no_image, Styles::muted()),
        |url| Line::styled(url.to_string(), Style::default().fg(c.highlight)),
    );
    let block = Block::default()
        .title(format!(" {} ", texts.current_image))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));
    frame.render_widget(Paragraph::new(current).block(block), current_area);
}

/// 上传进度条或上传错误
fn render_upload_status(frame: &mut Frame, area: Rect, status: &UploadStatus) {
    let c = colors();
    match status {
        UploadStatus::Idle => {}
        UploadStatus::InProgress { percent } => {
            let percent = percent.unwrap_or(0);
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(c.highlight))
                .label(format!("{} {percent}%", t().editor.uploading))
                .percent(u16::from(percent));
            frame.render_widget(gauge, Rect { height: 1, ..area });
        }
        UploadStatus::Failed { message } => {
            let line = Line::from(vec![
                Span::styled(format!(" ✗ {message}"), Styles::error()),
                Span::styled("  (Alt+x)", Styles::muted()),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

/// 加载 / 提交状态与提交错误
fn render_footer(frame: &mut Frame, area: Rect, editor: &EditorState) {
    let c = colors();
    let texts = &t().editor;

    let line = if let Some(error) = editor.form.publish_error() {
        Line::styled(
            format!(" {error}"),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        )
    } else if editor.submitting {
        Line::styled(format!(" {}", texts.submitting), Style::default().fg(c.warning))
    } else if !editor.form.is_loaded() {
        Line::styled(format!(" {}", texts.loading_post), Styles::muted())
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}
