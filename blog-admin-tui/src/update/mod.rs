//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//! 需要异步执行的操作不在这里运行，而是以 `Command` 的形式返回给主循环，
//! 由 Backend 层执行，结果再以 `BackendMessage` 回到这里。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod backend;            // 异步结果处理（按 scope_id 过滤）
//!         mod content;            // 内容面板子消息处理（仪表盘列表 / 编辑表单）
//!         mod modal;              // 弹窗子消息处理
//!         mod navigation;         // 侧边栏子消息处理
//!         mod route;              // 路由切换，挂载与卸载界面
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}

mod backend;
mod content;
mod modal;
mod navigation;
mod route;

use blog_admin_core::types::{Route, Tab};

use crate::i18n::t;
use crate::message::{AppMessage, Command, ScopeHandle};
use crate::model::{App, Page};

pub use route::navigate;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => return navigation::update(app, nav_msg),

        AppMessage::Content(content_msg) => return content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Navigate(route) => {
            app.clear_status();
            return navigate(app, route);
        }

        AppMessage::GoBack => {
            // 如果有弹窗打开，先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else if app.current_page.is_detail_page() {
                app.clear_status();
                return navigate(app, Route::dashboard(Tab::Posts));
            }
        }

        AppMessage::Refresh => return refresh(app),

        AppMessage::ShowHelp => app.modal.show_help(),

        AppMessage::ClearStatus => app.clear_status(),

        AppMessage::Backend(backend_msg) => return backend::update(app, backend_msg),

        AppMessage::Noop => {}
    }
    None
}

/// 重新加载当前界面的数据
///
/// 编辑界面只在文章尚未加载成功时重新加载，避免覆盖正在编辑的草稿。
fn refresh(app: &mut App) -> Option<Command> {
    let command = match app.current_page {
        Page::Dashboard => route::list_posts(app),
        Page::UpdatePost => app
            .editor
            .as_ref()
            .filter(|e| !e.form.is_loaded())
            .map(|e| Command::LoadPost {
                scope: ScopeHandle::of(e.scope()),
                post_id: e.form.post_id().to_string(),
            }),
        Page::Post { .. } => None,
    };
    if command.is_some() {
        app.set_status(t().status.refreshing);
    }
    command
}
