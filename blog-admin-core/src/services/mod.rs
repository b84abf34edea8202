//! 业务逻辑服务层

mod post_service;
mod scope;
mod upload_service;

pub use post_service::PostService;
pub use scope::{ScreenScope, run_scoped};
pub use upload_service::UploadService;

use std::sync::Arc;

use blog_admin_provider::{ObjectStorage, PostApi};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入具体的远端客户端。
pub struct ServiceContext {
    /// 博客 REST API
    pub post_api: Arc<dyn PostApi>,
    /// 对象存储
    pub storage: Arc<dyn ObjectStorage>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(post_api: Arc<dyn PostApi>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { post_api, storage }
    }
}
