//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod navigation;     // 侧边栏状态与焦点
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 各界面的数据状态（仪表盘 / 编辑表单 / 弹窗）
//!
//!     Page 与 state/ 的区别：
//!         - Page 只标识当前处于哪个界面，由 Route 推导；
//!         - State 存储界面的业务数据，以及界面的作用域（ScreenScope）。
//!           界面被替换时 State 被 drop，作用域内的异步任务随之取消。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub struct App {
//!         pub should_quit: bool,              // 退出标志
//!         pub focus: FocusPanel,              // 当前焦点
//!         pub navigation: NavigationState,    // 侧边栏（仪表盘标签页）
//!         pub route: Route,                   // 当前路由
//!         pub current_page: Page,             // 当前页面
//!         pub status_message: Option<String>, // 状态栏消息
//!         pub actor: Actor,                   // 当前用户（显式传给提交操作）
//!         pub dashboard: Option<DashboardState>,
//!         pub editor: Option<EditorState>,
//!         pub modal: ModalState,
//!     }

mod app;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use navigation::{FocusPanel, NavigationState};
pub use page::Page;
pub use state::{DashboardState, EditorField, EditorState, Modal, ModalState};
