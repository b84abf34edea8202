//! 异步结果处理
//!
//! 结果只写入发起它的那个界面实例；作用域已关闭或界面已替换时丢弃。

use crate::i18n::t;
use crate::message::{BackendMessage, Command};
use crate::model::{App, DashboardState, EditorState};

use super::route::navigate;

pub fn update(app: &mut App, msg: BackendMessage) -> Option<Command> {
    let scope_id = msg.scope_id();

    match msg {
        BackendMessage::PostLoaded { result, .. } => {
            let editor = live_editor(app, scope_id)?;
            editor.form.apply_loaded(result);
        }

        BackendMessage::PostsListed { result, .. } => {
            let dashboard = live_dashboard(app, scope_id)?;
            match result {
                Ok(page) => dashboard.set_page(page),
                Err(e) => dashboard.set_error(e.display_message()),
            }
        }

        BackendMessage::UploadProgress { snapshot, .. } => {
            let editor = live_editor(app, scope_id)?;
            editor.form.track_progress(snapshot);
        }

        BackendMessage::UploadFinished { outcome, .. } => {
            let editor = live_editor(app, scope_id)?;
            editor.form.finish_upload(outcome);
            if editor.form.upload_status().error().is_none() {
                app.set_status(t().status.upload_done);
            } else {
                app.clear_status();
            }
        }

        BackendMessage::Submitted { result, .. } => {
            let editor = live_editor(app, scope_id)?;
            editor.submitting = false;
            let next = editor.form.apply_submitted(result);
            app.clear_status();
            if let Some(route) = next {
                return navigate(app, route);
            }
        }
    }
    None
}

fn live_editor(app: &mut App, scope_id: u64) -> Option<&mut EditorState> {
    let editor = app.editor.as_mut().filter(|e| e.scope().accepts(scope_id));
    if editor.is_none() {
        log::debug!("Discarding result for closed scope {scope_id}");
    }
    editor
}

fn live_dashboard(app: &mut App, scope_id: u64) -> Option<&mut DashboardState> {
    let dashboard = app.dashboard.as_mut().filter(|d| d.scope().accepts(scope_id));
    if dashboard.is_none() {
        log::debug!("Discarding result for closed scope {scope_id}");
    }
    dashboard
}
