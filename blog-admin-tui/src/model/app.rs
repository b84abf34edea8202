//! 主应用状态

use blog_admin_core::types::{Actor, Route};

use super::{DashboardState, EditorState, FocusPanel, ModalState, NavigationState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 侧边栏状态
    pub navigation: NavigationState,

    /// 当前路由
    pub route: Route,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前用户
    pub actor: Actor,

    // === 各界面状态，离开界面时置为 None ===
    /// 仪表盘
    pub dashboard: Option<DashboardState>,
    /// 文章编辑表单
    pub editor: Option<EditorState>,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    ///
    /// 还没有挂载任何界面；由启动路由决定第一个界面。
    pub fn new(actor: Actor) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            route: Route::Dashboard {
                query: String::new(),
            },
            current_page: Page::Dashboard,
            status_message: None,
            actor,
            dashboard: None,
            editor: None,
            modal: ModalState::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
