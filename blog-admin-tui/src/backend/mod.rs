//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有的远端调用。
//! 通过 blog-admin-core 库实现文章加载、图片上传与更新提交。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件 + 环境变量覆盖
//!         mod core_service;       // 核心服务入口，执行 Command
//!         mod session_store;      // 会话令牌（keyring）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     创建流程：
//!         1. 按配置创建 RestPostApi（带会话令牌）
//!         2. 按配置创建 FirebaseStorage（分片大小）
//!         3. 组装 ServiceContext
//!         4. 基于 ServiceContext 创建 PostService / UploadService
//!
//!     execute(command) 为每个命令 spawn 一个任务：
//!         - 任务在命令携带的子 token 下运行（run_scoped），界面离开即取消
//!         - 结果包装成 BackendMessage，带 scope_id 发回 UI 循环
//!         - 上传进度走单独的 channel，由转发任务逐条转成 UploadProgress
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、会话令牌（KeyringSessionStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     查找顺序：BLOG_ADMIN_SESSION_TOKEN → 系统钥匙串（service = "blog-admin"，
//!     user = 用户 ID）→ 无。令牌以 `access_token` cookie 发送给博客 API。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 Alt+s
//!         ↓
//!     Update 层返回 Command::Submit
//!         ↓
//!     主循环调用 CoreService::execute
//!         ↓
//!     PostService::submit → PUT /api/post/updatepost/<postId>/<actorId>
//!         ↓
//!     BackendMessage::Submitted 回到主循环
//!         ↓
//!     Update 层更新表单或跳转到 /post/<slug>

mod config_service;
mod core_service;
mod session_store;

pub use config_service::{AppConfig, ConfigService, ENV_SESSION_TOKEN, LocalConfigService, config_dir};
pub use core_service::CoreService;
pub use session_store::{KeyringSessionStore, resolve_session_token};
