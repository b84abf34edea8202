//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     if let Some(event) = poll_event() {             // 等待输入，最多 100ms
//!         let msg = handle_event(event, &app);            // 原始事件 → 消息
//!         dispatch(&mut app, core, msg)                   // 更新状态，执行返回的命令
//!     }
//!     while let Ok(msg) = rx.try_recv() {             // 后台任务的结果
//!         dispatch(&mut app, core, msg)
//!     }
//!     状态栏消息显示超过 4 秒后清除
//! }

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);
/// 状态栏消息显示时长
const STATUS_TTL: Duration = Duration::from_secs(4);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    core: &CoreService,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let mut status = StatusTimer::default();

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| view::render(app, frame))?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 终端事件
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            dispatch(app, core, msg);
        }

        // 4. 后台任务结果
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, core, msg);
        }

        // 5. 过期的状态消息
        if status.expired(app) {
            dispatch(app, core, AppMessage::ClearStatus);
        }
    }

    Ok(())
}

/// 更新状态，并把返回的命令交给后台执行
pub fn dispatch(app: &mut App, core: &CoreService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        core.execute(command);
    }
}

/// 记录当前状态消息第一次出现的时间
#[derive(Default)]
struct StatusTimer {
    shown: Option<(String, Instant)>,
}

impl StatusTimer {
    fn expired(&mut self, app: &App) -> bool {
        let Some(message) = app.status_message.as_ref() else {
            self.shown = None;
            return false;
        };
        if let Some((seen, since)) = &self.shown {
            if seen == message {
                return since.elapsed() >= STATUS_TTL;
            }
        }
        self.shown = Some((message.clone(), Instant::now()));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_admin_core::types::Actor;

    #[test]
    fn fresh_status_is_not_expired() {
        let mut app = App::new(Actor::default());
        let mut timer = StatusTimer::default();
        assert!(!timer.expired(&app));

        app.set_status("Uploading");
        assert!(!timer.expired(&app));
        assert!(!timer.expired(&app));

        // 消息变化后重新计时
        app.set_status("Done");
        assert!(!timer.expired(&app));
        assert_eq!(timer.shown.as_ref().map(|(m, _)| m.as_str()), Some("Done"));
    }

    #[test]
    fn old_status_expires() {
        let mut app = App::new(Actor::default());
        app.set_status("Uploading");
        let Some(since) = Instant::now().checked_sub(STATUS_TTL) else {
            return;
        };
        let mut timer = StatusTimer {
            shown: Some(("Uploading".to_string(), since)),
        };
        assert!(timer.expired(&app));
    }
}
