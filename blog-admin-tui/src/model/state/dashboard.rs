//! 仪表盘状态

use blog_admin_core::ScreenScope;
use blog_admin_core::types::{Post, PostsPage, TabRouter};

/// 仪表盘界面状态
///
/// 每次挂载创建一个新实例；旧实例被 drop 时作用域取消，未完成的列表请求结果被丢弃。
#[derive(Debug, Default)]
pub struct DashboardState {
    /// 标签页路由
    pub router: TabRouter,
    /// 当前用户的文章
    pub posts: Vec<Post>,
    /// 文章总数
    pub total_posts: u64,
    /// 最近一个月新增的文章数
    pub last_month_posts: u64,
    /// 文章列表中选中的索引
    pub selected: usize,
    /// 是否正在加载
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
    scope: ScreenScope,
}

impl DashboardState {
    /// 挂载仪表盘，并按查询串选择标签页
    pub fn mount(query: &str) -> Self {
        let mut state = Self::default();
        state.router.on_query(query);
        state
    }

    pub fn scope(&self) -> &ScreenScope {
        &self.scope
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if !self.posts.is_empty() && self.selected < self.posts.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.posts.len().saturating_sub(1);
    }

    /// 当前选中的文章
    pub fn selected_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// 设置文章列表
    pub fn set_page(&mut self, page: PostsPage) {
        self.total_posts = page.total_posts;
        self.last_month_posts = page.last_month_posts;
        self.posts = page.posts;
        self.selected = self.selected.min(self.posts.len().saturating_sub(1));
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_admin_core::types::Tab;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            ..Post::default()
        }
    }

    #[test]
    fn mount_reads_tab_from_query() {
        assert_eq!(DashboardState::mount("tab=posts").router.selected(), Some(Tab::Posts));
        assert_eq!(DashboardState::mount("").router.selected(), None);
    }

    #[test]
    fn each_mount_has_its_own_scope() {
        let a = DashboardState::mount("");
        let b = DashboardState::mount("");
        assert_ne!(a.scope().id(), b.scope().id());
    }

    #[test]
    fn selection_is_clamped_after_reload() {
        let mut state = DashboardState::default();
        state.set_page(PostsPage {
            posts: vec![post("a"), post("b"), post("c")],
            total_posts: 3,
            last_month_posts: 1,
        });
        state.select_last();
        assert_eq!(state.selected_post().map(|p| p.id.as_str()), Some("c"));

        state.set_page(PostsPage {
            posts: vec![post("a")],
            ..PostsPage::default()
        });
        assert_eq!(state.selected, 0);
        assert_eq!(state.total_posts, 0);
    }

    #[test]
    fn error_stops_loading() {
        let mut state = DashboardState::default();
        state.begin_loading();
        assert!(state.loading);
        state.set_error("Something went wrong");
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Something went wrong"));
    }
}
