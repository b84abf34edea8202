//! 侧边栏消息处理

use blog_admin_core::types::Route;

use super::route::navigate;
use crate::message::{Command, NavigationMessage};
use crate::model::App;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) -> Option<Command> {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),

        NavigationMessage::Confirm => {
            if let Some(tab) = app.navigation.current_tab() {
                app.clear_status(); // 切换页面时清除状态消息
                return navigate(app, Route::dashboard(tab));
            }
        }
    }
    None
}
