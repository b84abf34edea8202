//! 图片上传服务

use std::sync::Arc;

use blog_admin_provider::{UploadRequest, UploadSnapshot};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{PendingUpload, UploadOutcome};

/// 图片上传服务
pub struct UploadService {
    ctx: Arc<ServiceContext>,
}

impl UploadService {
    /// 创建上传服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 执行一次上传并解析下载地址
    ///
    /// 进度快照发往 `progress`；`cancel` 被触发时停止发送分片并返回
    /// [`UploadOutcome::Cancelled`]。
    pub async fn upload(
        &self,
        pending: PendingUpload,
        progress: UnboundedSender<UploadSnapshot>,
        cancel: CancellationToken,
    ) -> UploadOutcome {
        let key = pending.key.to_string();
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                log::info!("Upload of {key} cancelled");
                UploadOutcome::Cancelled
            }
            result = self.transfer(pending, &progress) => match result {
                Ok(url) => {
                    log::info!("Upload of {key} completed");
                    UploadOutcome::Completed { url }
                }
                Err(e) => {
                    e.log(&format!("Upload of {key} failed"));
                    UploadOutcome::Failed(e)
                }
            },
        }
    }

    async fn transfer(
        &self,
        pending: PendingUpload,
        progress: &UnboundedSender<UploadSnapshot>,
    ) -> CoreResult<String> {
        let bytes = tokio::fs::read(&pending.path).await.map_err(|e| {
            CoreError::UploadFailed(format!("reading {}: {e}", pending.path.display()))
        })?;
        let request = UploadRequest::new(pending.key.as_str(), bytes);

        let object = self
            .ctx
            .storage
            .upload_resumable(&request, progress)
            .await
            .map_err(|e| CoreError::UploadFailed(e.to_string()))?;

        self.ctx
            .storage
            .download_url(&object)
            .await
            .map_err(|e| CoreError::DownloadUrlUnavailable(e.to_string()))
    }
}
