use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::error::{ProviderError, Result};
use crate::types::{Post, PostQuery, PostsPage, StoredObject, UploadRequest, UploadSnapshot};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码
    pub status: u16,
    /// 错误码（Firebase 为 `error.status`，博客 API 没有）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 远端错误映射 Trait（内部使用）
/// 各客户端实现此 trait 以将原始错误映射到统一错误类型
pub(crate) trait ServiceErrorMapper {
    /// 返回服务标识符
    fn service_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    ///
    /// `resource` 为请求涉及的资源（post id、存储 key 等）
    fn map_error(&self, raw: RawApiError, resource: &str) -> ProviderError;

    /// 快捷方法：序列化错误
    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            service: self.service_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            service: self.service_name().to_string(),
            raw_code: raw.code.or_else(|| Some(raw.status.to_string())),
            raw_message: raw.message,
        }
    }
}

/// 博客 REST API Trait
#[async_trait]
pub trait PostApi: Send + Sync {
    /// 服务标识符
    fn id(&self) -> &'static str;

    /// 按条件查询文章
    async fn get_posts(&self, query: &PostQuery) -> Result<PostsPage>;

    /// 获取单篇文章
    ///
    /// 默认实现调用 `get_posts(postId=...)` 并取第一条，结果为空时返回 `NotFound`。
    async fn get_post(&self, post_id: &str) -> Result<Post> {
        let page = self.get_posts(&PostQuery::by_id(post_id)).await?;
        page.posts
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NotFound {
                service: self.id().to_string(),
                resource: post_id.to_string(),
            })
    }

    /// 整体替换一篇文章
    ///
    /// `actor_id` 是发起更新的用户，服务端据此校验权限。
    /// 返回服务端保存后的文章（包含重新生成的 `slug`）。
    async fn update_post(&self, post_id: &str, actor_id: &str, post: &Post) -> Result<Post>;
}

/// 对象存储 Trait
///
/// `upload_resumable` 返回的 future 被丢弃时，上传会在下一个分片边界停止；
/// 调用方借此实现取消。
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// 服务标识符
    fn id(&self) -> &'static str;

    /// 以可恢复方式上传对象
    ///
    /// 每确认一个分片，向 `progress` 发送一次快照；开始时会先发送 `0/total`。
    /// 接收端被关闭不影响上传本身。
    async fn upload_resumable(
        &self,
        request: &UploadRequest,
        progress: &UnboundedSender<UploadSnapshot>,
    ) -> Result<StoredObject>;

    /// 解析已上传对象的公开下载地址
    async fn download_url(&self, object: &StoredObject) -> Result<String>;
}
