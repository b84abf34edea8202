//! 日志初始化
//!
//! 界面占用终端，日志只写文件：`<config dir>/blog-admin/logs/blog-admin.log.<日期>`。
//! 级别由 `RUST_LOG` 控制，默认 info。

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_PREFIX: &str = "blog-admin.log";

/// 初始化日志；返回的 guard 必须保持到程序退出，否则缓冲中的日志会丢失
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // try_init 同时接管 `log` 宏的输出（core / provider 使用 log）
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Logging to {}", log_dir.display());
    Ok(guard)
}
