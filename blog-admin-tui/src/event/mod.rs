//! src/event/mod.rs
//! Event 层：终端事件处理
//!
//! 把 crossterm 的原始事件翻译成 Message，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;    // 事件轮询与按键翻译
//!         mod keymap;     // 快捷键定义
//!
//!     按键优先级：
//!         1. 弹窗打开时只处理关闭
//!         2. 全局快捷键（Alt+q / Ctrl+c 退出，Alt+h 帮助，Alt+r 刷新，Esc 返回，Tab 切换焦点）
//!         3. 编辑表单获得焦点时，普通字符全部作为输入，动作键带 Alt
//!         4. 其他情况按焦点分发到侧边栏或内容面板

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
