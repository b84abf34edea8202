//! Blog API PostApi trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::encode_path;
use crate::traits::PostApi;
use crate::types::{Post, PostQuery, PostsPage};

use super::{RestPostApi, SERVICE_NAME};

/// 查询文章的路径
pub(crate) const GET_POSTS_PATH: &str = "/api/post/getposts";

/// 更新文章的路径：`/api/post/updatepost/<postId>/<actorId>`
pub(crate) fn update_post_path(post_id: &str, actor_id: &str) -> String {
    format!(
        "/api/post{}",
        encode_path(&["updatepost", post_id, actor_id])
    )
}

#[async_trait]
impl PostApi for RestPostApi {
    fn id(&self) -> &'static str {
        SERVICE_NAME
    }

    async fn get_posts(&self, query: &PostQuery) -> Result<PostsPage> {
        let resource = query.post_id.as_deref().unwrap_or("posts");
        self.get_json(GET_POSTS_PATH, &query.to_pairs(), resource)
            .await
    }

    async fn update_post(&self, post_id: &str, actor_id: &str, post: &Post) -> Result<Post> {
        log::info!("[{SERVICE_NAME}] Updating post {post_id}");
        self.put_json(&update_post_path(post_id, actor_id), post, post_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_path_encodes_ids() {
        assert_eq!(
            update_post_path("65f0", "u1"),
            "/api/post/updatepost/65f0/u1"
        );
        assert_eq!(
            update_post_path("a/b", "u 1"),
            "/api/post/updatepost/a%2Fb/u%201"
        );
    }

    #[test]
    fn session_token_is_optional() {
        let api = RestPostApi::new("http://localhost:3000/")
            .unwrap()
            .with_session_token(Some(String::new()));
        assert!(api.session_token.is_none());
        assert_eq!(api.base_url(), "http://localhost:3000");
    }
}
