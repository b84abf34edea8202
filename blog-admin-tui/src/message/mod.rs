//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │ AppMessage│          └────┬─────┘         │   │
//！│  │        ▲               │ BackendMsg│               │ 修改 / Command │   │
//！│  │        │               └───────────┘               ▼               │   │
//！│  │   ┌─────────┐                ▲               ┌──────────┐         │   │
//！│  │   │  View   │ ◀──── 读取 ────┼────────────── │  Model   │         │   │
//！│  │   └─────────┘                │               └──────────┘         │   │
//！│  └──────────────────────────────│────────────────────────────────────┘   │
//！│                                 │ BackendMessage（带 scope_id）           │
//！│                           ┌──────────┐                                    │
//！│                           │ Backend  │ ──▶ blog-admin-core                │
//！│                           └──────────┘                                    │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，同时承载 Backend —→ Update 的异步结果。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;          // AppMessage 主消息
//!         mod backend;      // 异步任务结果（BackendMessage）
//!         mod command;      // Update 层发给 Backend 的命令（Command）
//!         mod content;      // 内容面板消息
//!         mod modal;        // 弹窗消息
//!         mod navigation;   // 侧边栏消息
//!
//! 异步结果都带着发起时界面作用域的 `scope_id`，界面已离开时 Update 层直接丢弃。

mod app;
mod backend;
mod command;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::BackendMessage;
pub use command::{Command, ScopeHandle};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
