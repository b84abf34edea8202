//! 内容面板消息处理

use blog_admin_core::CoreError;
use blog_admin_core::types::{Route, Tab};

use super::route::navigate;
use crate::i18n::t;
use crate::message::{Command, ContentMessage, ScopeHandle};
use crate::model::{App, EditorField, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match app.current_page {
        Page::Dashboard => update_dashboard(app, msg),
        Page::UpdatePost => update_editor(app, msg),
        Page::Post { .. } => None,
    }
}

// ========== 仪表盘 ==========

fn update_dashboard(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let dashboard = app.dashboard.as_mut()?;

    // 只有文章面板有可选择的内容
    if dashboard.router.selected() != Some(Tab::Posts) {
        return None;
    }

    match msg {
        ContentMessage::SelectPrevious => dashboard.select_previous(),
        ContentMessage::SelectNext => dashboard.select_next(),
        ContentMessage::SelectFirst => dashboard.select_first(),
        ContentMessage::SelectLast => dashboard.select_last(),
        ContentMessage::Confirm => {
            let post_id = dashboard.selected_post().map(|p| p.id.clone())?;
            return navigate(app, Route::UpdatePost { post_id });
        }
        _ => {}
    }
    None
}

// ========== 编辑表单 ==========

fn update_editor(app: &mut App, msg: ContentMessage) -> Option<Command> {
    let editor = app.editor.as_mut()?;

    match msg {
        ContentMessage::NextField | ContentMessage::SelectNext => editor.field = editor.field.next(),
        ContentMessage::PrevField | ContentMessage::SelectPrevious => editor.field = editor.field.prev(),
        ContentMessage::Input(c) => editor.input(c),
        ContentMessage::Backspace => editor.backspace(),
        ContentMessage::DismissError => editor.form.clear_upload_error(),
        ContentMessage::Confirm => match editor.field {
            EditorField::Title => editor.field = EditorField::Content,
            EditorField::Content => editor.input('\n'),
            EditorField::Image => return start_upload(app),
        },
        ContentMessage::Upload => return start_upload(app),
        ContentMessage::Submit => return submit(app),
        ContentMessage::SelectFirst | ContentMessage::SelectLast => {}
    }
    None
}

/// 发起上传
///
/// 未选择文件时表单显示校验错误；已有上传进行中时不发起新的上传。
fn start_upload(app: &mut App) -> Option<Command> {
    let editor = app.editor.as_mut()?;
    let file = editor.selected_file();

    match editor
        .form
        .begin_upload(file.as_deref(), chrono::Utc::now().timestamp_millis())
    {
        Ok(pending) => {
            log::info!("Uploading {} as {}", pending.path.display(), pending.key);
            let command = Command::Upload {
                scope: ScopeHandle::of(editor.scope()),
                pending,
            };
            app.set_status(t().status.upload_started);
            Some(command)
        }
        Err(CoreError::UploadInProgress) => {
            app.set_status(t().status.upload_busy);
            None
        }
        Err(e) => {
            log::debug!("Upload not started: {e}");
            None
        }
    }
}

/// 提交草稿
fn submit(app: &mut App) -> Option<Command> {
    if !app.actor.is_signed_in() {
        let texts = &t().modal;
        app.modal
            .show_error(texts.not_signed_in_title, texts.not_signed_in_message);
        return None;
    }

    let actor = app.actor.clone();
    let editor = app.editor.as_mut()?;

    if editor.submitting {
        return None;
    }
    // 未加载完成时提交会用空草稿覆盖服务端文章
    if !editor.form.is_loaded() {
        app.set_status(t().status.post_not_ready);
        return None;
    }

    editor.submitting = true;
    let command = Command::Submit {
        scope: ScopeHandle::of(editor.scope()),
        post_id: editor.form.post_id().to_string(),
        actor,
        draft: editor.form.draft().clone(),
    };
    app.set_status(t().status.submitting);
    Some(command)
}
