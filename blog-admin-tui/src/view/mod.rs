//! src/view/mod.rs
//! View 层：只读 App 状态并渲染，不产生任何消息
//!
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 侧边栏 / 内容 + 状态栏 + 弹窗
//!         mod components;     // 侧边栏、状态栏、弹窗
//!         mod pages;          // 仪表盘、编辑表单、文章页
//!         pub mod theme;      // 颜色与样式

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
