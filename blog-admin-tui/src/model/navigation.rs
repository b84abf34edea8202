//! 侧边栏状态
//!
//! 侧边栏即仪表盘的标签页列表，顺序与 `Tab::ALL` 一致。

use blog_admin_core::types::Tab;

/// 焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧侧边栏
    #[default]
    Navigation,
    /// 右侧内容面板
    Content,
}

impl FocusPanel {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Navigation => Self::Content,
            Self::Content => Self::Navigation,
        }
    }

    pub fn is_navigation(self) -> bool {
        self == Self::Navigation
    }

    pub fn is_content(self) -> bool {
        self == Self::Content
    }
}

/// 侧边栏项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub tab: Tab,
    pub icon: &'static str,
}

/// 侧边栏状态
pub struct NavigationState {
    pub items: Vec<NavItem>,
    /// 光标所在的索引
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: Tab::ALL
                .into_iter()
                .map(|tab| NavItem {
                    tab,
                    icon: icon_for(tab),
                })
                .collect(),
            selected: 0,
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 光标所在的标签页
    pub fn current_tab(&self) -> Option<Tab> {
        self.items.get(self.selected).map(|item| item.tab)
    }

    /// 把光标移到某个标签页（路由变化时同步）
    pub fn sync_to(&mut self, tab: Tab) {
        if let Some(i) = self.items.iter().position(|item| item.tab == tab) {
            self.selected = i;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

fn icon_for(tab: Tab) -> &'static str {
    match tab {
        Tab::Dash => "⌂",
        Tab::Profile => "@",
        Tab::Posts => "≡",
        Tab::Users => "●",
        Tab::Creation => "+",
    }
}
