//! 翻译文本结构定义
//!
//! 每种语言提供一个 `Translations` 常量，字段缺失在编译期就会报错。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 侧边栏标签页
    pub tabs: TabTexts,
    /// 页面标题
    pub pages: PageTexts,
    /// 仪表盘文本
    pub dashboard: DashboardTexts,
    /// 编辑表单文本
    pub editor: EditorTexts,
    /// 文章页文本
    pub post: PostTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub error: &'static str,
}

/// 状态栏快捷键提示的动作词
pub struct HintTexts {
    pub switch_panels: &'static str,
    pub navigate: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub refresh: &'static str,
    pub next_field: &'static str,
    pub upload: &'static str,
    pub submit: &'static str,
    pub dismiss: &'static str,
    pub back: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 仪表盘标签页名称
pub struct TabTexts {
    pub dash: &'static str,
    pub profile: &'static str,
    pub posts: &'static str,
    pub users: &'static str,
    pub creation: &'static str,
}

/// 页面标题
pub struct PageTexts {
    pub dashboard: &'static str,
    pub update_post: &'static str,
    pub post: &'static str,
}

/// 仪表盘文本
pub struct DashboardTexts {
    pub total_posts: &'static str,
    pub last_month_posts: &'static str,
    pub no_posts: &'static str,
    pub not_signed_in: &'static str,
    pub col_title: &'static str,
    pub col_category: &'static str,
    pub col_updated: &'static str,
    pub untitled: &'static str,
    pub profile_id: &'static str,
    pub profile_username: &'static str,
    pub profile_email: &'static str,
    pub profile_role: &'static str,
    pub role_admin: &'static str,
    pub role_user: &'static str,
    pub users_info: &'static str,
    pub creation_info: &'static str,
}

/// 编辑表单文本
pub struct EditorTexts {
    pub title_label: &'static str,
    pub content_label: &'static str,
    pub image_label: &'static str,
    pub image_placeholder: &'static str,
    pub current_image: &'static str,
    pub no_image: &'static str,
    pub uploading: &'static str,
    pub submitting: &'static str,
    pub loading_post: &'static str,
}

/// 文章页文本
pub struct PostTexts {
    pub published: &'static str,
    pub back_hint: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    pub refreshing: &'static str,
    pub upload_started: &'static str,
    pub upload_done: &'static str,
    pub upload_busy: &'static str,
    pub submitting: &'static str,
    pub post_not_ready: &'static str,
}

/// 弹窗文本
pub struct ModalTexts {
    pub not_signed_in_title: &'static str,
    pub not_signed_in_message: &'static str,
    pub close_hint: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub entries: &'static [(&'static str, &'static str)],
}
