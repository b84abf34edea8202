//! 页面枚举

use blog_admin_core::types::Route;

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 仪表盘（具体面板由标签页路由决定）
    #[default]
    Dashboard,
    /// 编辑文章
    UpdatePost,
    /// 文章页（提交成功后跳转到这里）
    Post { slug: String },
}

impl Page {
    pub fn from_route(route: &Route) -> Self {
        match route {
            Route::Dashboard { .. } => Self::Dashboard,
            Route::UpdatePost { .. } => Self::UpdatePost,
            Route::Post { slug } => Self::Post { slug: slug.clone() },
        }
    }

    /// 是否是详情页面（Esc 返回仪表盘）
    pub fn is_detail_page(&self) -> bool {
        !matches!(self, Self::Dashboard)
    }
}
