//! 核心服务
//!
//! 封装 blog-admin-core 的各种服务，执行 Update 层返回的命令。
//! 每个命令在 tokio 运行时中作为独立任务运行，结果通过 channel 回到 UI 循环。

use std::sync::Arc;

use anyhow::{Context, Result};
use blog_admin_core::types::{UploadSnapshot, UploadOutcome};
use blog_admin_core::{PostService, ServiceContext, UploadService, run_scoped};
use blog_admin_provider::{FirebaseStorage, RestPostApi};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};

use super::config_service::AppConfig;
use crate::message::{AppMessage, BackendMessage, Command};

/// TUI 核心服务
///
/// 持有所有业务服务的实例，提供给主循环调用
pub struct CoreService {
    posts: Arc<PostService>,
    uploads: Arc<UploadService>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl CoreService {
    /// 按配置创建远端客户端并组装服务
    pub fn new(
        config: &AppConfig,
        session_token: Option<String>,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Result<Self> {
        // 1. 博客 API 客户端
        let post_api = RestPostApi::new(&config.api_base_url)
            .context("Failed to create blog API client")?
            .with_session_token(session_token);

        // 2. 对象存储客户端
        let storage = FirebaseStorage::new(config.firebase.clone())
            .context("Failed to create storage client")?
            .with_chunk_size(config.upload_chunk_size);

        // 3. 组装 ServiceContext
        let ctx = Arc::new(ServiceContext::new(Arc::new(post_api), Arc::new(storage)));

        Ok(Self::from_context(ctx, runtime, tx))
    }

    pub fn from_context(
        ctx: Arc<ServiceContext>,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            posts: Arc::new(PostService::new(ctx.clone())),
            uploads: Arc::new(UploadService::new(ctx)),
            runtime,
            tx,
        }
    }

    /// 在后台执行一个命令
    ///
    /// 作用域在结果产生前被取消时，不发送任何结果。
    pub fn execute(&self, command: Command) {
        log::debug!("Executing {} in scope {}", command.name(), command.scope().id);

        let tx = self.tx.clone();
        match command {
            Command::LoadPost { scope, post_id } => {
                let posts = self.posts.clone();
                self.runtime.spawn(async move {
                    if let Some(result) = run_scoped(&scope.token, posts.load_post(&post_id)).await {
                        send(&tx, BackendMessage::PostLoaded {
                            scope_id: scope.id,
                            result,
                        });
                    }
                });
            }

            Command::ListPosts { scope, actor } => {
                let posts = self.posts.clone();
                self.runtime.spawn(async move {
                    if let Some(result) = run_scoped(&scope.token, posts.list_posts(&actor)).await {
                        send(&tx, BackendMessage::PostsListed {
                            scope_id: scope.id,
                            result,
                        });
                    }
                });
            }

            Command::Upload { scope, pending } => {
                let uploads = self.uploads.clone();
                let (progress_tx, mut progress_rx) = mpsc::unbounded_channel::<UploadSnapshot>();

                // 进度转发：上传结束、发送端 drop 后自然退出
                let forward_tx = tx.clone();
                let scope_id = scope.id;
                let forwarder = self.runtime.spawn(async move {
                    while let Some(snapshot) = progress_rx.recv().await {
                        send(&forward_tx, BackendMessage::UploadProgress { scope_id, snapshot });
                    }
                });

                self.runtime.spawn(async move {
                    let outcome = uploads.upload(pending, progress_tx, scope.token.clone()).await;
                    // 保证最后一个进度快照先于结果到达
                    if let Err(e) = forwarder.await {
                        log::warn!("Progress forwarder for scope {scope_id} stopped: {e}");
                    }
                    if matches!(outcome, UploadOutcome::Cancelled) {
                        return;
                    }
                    send(&tx, BackendMessage::UploadFinished { scope_id, outcome });
                });
            }

            Command::Submit {
                scope,
                post_id,
                actor,
                draft,
            } => {
                let posts = self.posts.clone();
                self.runtime.spawn(async move {
                    let submit = posts.submit(&post_id, &actor, &draft);
                    if let Some(result) = run_scoped(&scope.token, submit).await {
                        send(&tx, BackendMessage::Submitted {
                            scope_id: scope.id,
                            result,
                        });
                    }
                });
            }
        }
    }
}

/// UI 循环已经退出时 channel 关闭，结果直接丢弃
fn send(tx: &UnboundedSender<AppMessage>, msg: BackendMessage) {
    if tx.send(AppMessage::Backend(msg)).is_err() {
        log::debug!("UI loop has stopped, dropping backend result");
    }
}
