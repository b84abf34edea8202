//! 路由切换：挂载 / 卸载界面
//!
//! 替换界面状态即卸载旧界面：旧 State 被 drop，其作用域取消，
//! 仍在进行的请求停止，之后到达的结果也会被丢弃。

use blog_admin_core::types::Route;

use crate::i18n::t;
use crate::message::{Command, ScopeHandle};
use crate::model::{App, DashboardState, EditorState, FocusPanel, Page};

/// 跳转到路由，返回挂载新界面需要执行的命令
pub fn navigate(app: &mut App, route: Route) -> Option<Command> {
    log::debug!("Navigate {} -> {route}", app.route);

    let page = Page::from_route(&route);
    let command = match &route {
        Route::Dashboard { query } => {
            app.editor = None;

            // 仪表盘已挂载时只是查询串变化，标签页路由自己决定是否保留旧值
            let remount = app.current_page != Page::Dashboard || app.dashboard.is_none();
            if remount {
                app.dashboard = Some(DashboardState::mount(query));
            } else if let Some(dashboard) = app.dashboard.as_mut() {
                dashboard.router.on_query(query);
            }

            if let Some(tab) = app.dashboard.as_ref().and_then(|d| d.router.selected()) {
                app.navigation.sync_to(tab);
            }

            if remount { list_posts(app) } else { None }
        }
        Route::UpdatePost { post_id } => {
            app.dashboard = None;
            let editor = EditorState::new(post_id.clone());
            let command = Command::LoadPost {
                scope: ScopeHandle::of(editor.scope()),
                post_id: post_id.clone(),
            };
            app.editor = Some(editor);
            app.focus = FocusPanel::Content;
            Some(command)
        }
        Route::Post { .. } => {
            app.dashboard = None;
            app.editor = None;
            None
        }
    };

    app.route = route;
    app.current_page = page;
    command
}

/// 为当前仪表盘加载文章列表
pub fn list_posts(app: &mut App) -> Option<Command> {
    let dashboard = app.dashboard.as_mut()?;

    if !app.actor.is_signed_in() {
        dashboard.set_error(t().dashboard.not_signed_in);
        return None;
    }

    dashboard.begin_loading();
    Some(Command::ListPosts {
        scope: ScopeHandle::of(dashboard.scope()),
        actor: app.actor.clone(),
    })
}
