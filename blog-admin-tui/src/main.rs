//! Blog Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 远端服务 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! fn `main()` {
//!
//!     init_logging()          // 日志写到配置目录下的 logs/，终端留给界面
//!     load config             // config.json + 环境变量覆盖
//!     resolve session token   // 环境变量 → 钥匙串
//!     tokio runtime           // 后台任务在这里运行，UI 循环留在主线程
//!     CoreService::new()      // 博客 API + 对象存储
//!     navigate(启动路由)       // 第一个参数，例如 `/update-post/<id>`；默认 `/dashboard?tab=dash`
//!     init_terminal()
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};
use blog_admin_core::types::{Route, Tab};
use tokio::sync::mpsc;

use backend::{
    ConfigService, CoreService, ENV_SESSION_TOKEN, KeyringSessionStore, LocalConfigService,
    config_dir, resolve_session_token,
};
use i18n::Language;
use message::AppMessage;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志（guard 需要活到程序结束）
    let _log_guard = init_logging(&config_dir().join("logs"))?;

    // 2. 配置
    let config_service = LocalConfigService::new();
    let mut config = config_service.load()?;
    if !config_service.exists() {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Could not write default config: {e}");
        }
    }
    config.apply_overrides(|name| std::env::var(name).ok());

    i18n::set_language(Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unsupported language {:?}, using en-US", config.language);
        Language::default()
    }));
    view::theme::set_theme(config.theme);

    // 3. 会话令牌
    let mut actor = config.actor.clone();
    let session_token = resolve_session_token(
        std::env::var(ENV_SESSION_TOKEN).ok(),
        &actor.id,
        &KeyringSessionStore,
    );
    actor.session_token.clone_from(&session_token);

    // 4. 后台运行时与服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("blog-admin-worker")
        .build()
        .context("Failed to start async runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();
    let core = CoreService::new(&config, session_token, runtime.handle().clone(), tx)?;

    // 5. 应用实例与启动路由
    let route = std::env::args()
        .nth(1)
        .map_or_else(|| Route::dashboard(Tab::Dash), |arg| Route::parse(&arg));
    log::info!("Starting at {route} as {:?}", actor.display_name());

    let mut app = model::App::new(actor);
    app::dispatch(&mut app, &core, AppMessage::Navigate(route));

    // 6. 主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &core, &mut rx);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 离开所有界面，取消仍在进行的请求
    drop(app);
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));

    result
}
