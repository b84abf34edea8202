//! 文章服务：加载、列表与提交更新

use std::sync::Arc;

use blog_admin_provider::{Post, PostQuery, PostsPage, ProviderError};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Actor, DraftPost, Route};

/// 文章服务
pub struct PostService {
    ctx: Arc<ServiceContext>,
}

impl PostService {
    /// 创建文章服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 加载要编辑的文章
    pub async fn load_post(&self, post_id: &str) -> CoreResult<Post> {
        match self.ctx.post_api.get_post(post_id).await {
            Ok(post) => Ok(post),
            Err(ProviderError::NotFound { .. }) => {
                log::warn!("Post {post_id} not found");
                Err(CoreError::PostNotFound(post_id.to_string()))
            }
            Err(e) => {
                let err = CoreError::from(e);
                err.log(&format!("Loading post {post_id} failed"));
                Err(err)
            }
        }
    }

    /// 列出某位作者的文章
    pub async fn list_posts(&self, actor: &Actor) -> CoreResult<PostsPage> {
        self.ctx
            .post_api
            .get_posts(&PostQuery::by_author(&actor.id))
            .await
            .map_err(|e| {
                let err = CoreError::from(e);
                err.log("Listing posts failed");
                err
            })
    }

    /// 提交草稿，成功时返回要跳转的文章页
    ///
    /// 草稿整体发送；不自动重试。
    pub async fn submit(&self, post_id: &str, actor: &Actor, draft: &DraftPost) -> CoreResult<Route> {
        let saved = self
            .ctx
            .post_api
            .update_post(post_id, &actor.id, draft.as_post())
            .await
            .map_err(|e| {
                let err = CoreError::from(e);
                err.log(&format!("Updating post {post_id} failed"));
                err
            })?;

        let slug = saved
            .slug
            .filter(|s| !s.is_empty())
            .ok_or_else(|| CoreError::InvalidResponse("updated post has no slug".to_string()))?;

        log::info!("Post {post_id} updated, slug {slug}");
        Ok(Route::Post { slug })
    }
}
