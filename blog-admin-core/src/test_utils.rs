//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use blog_admin_provider::{
    ObjectStorage, Post, PostApi, PostQuery, PostsPage, ProviderError, Result, StoredObject,
    UploadRequest, UploadSnapshot,
};
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

use crate::services::ServiceContext;

// ===== MockPostApi =====

pub struct MockPostApi {
    posts: RwLock<BTreeMap<String, Post>>,
    /// 如果 Some，update_post 返回此错误
    update_error: RwLock<Option<ProviderError>>,
    last_update: RwLock<Option<(String, String, Post)>>,
}

impl MockPostApi {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            update_error: RwLock::new(None),
            last_update: RwLock::new(None),
        }
    }

    pub async fn insert(&self, post: Post) {
        self.posts.write().await.insert(post.id.clone(), post);
    }

    pub async fn fail_updates_with(&self, err: ProviderError) {
        *self.update_error.write().await = Some(err);
    }

    /// 最近一次 update_post 的 (post_id, actor_id, body)
    pub async fn last_update(&self) -> Option<(String, String, Post)> {
        self.last_update.read().await.clone()
    }
}

#[async_trait]
impl PostApi for MockPostApi {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn get_posts(&self, query: &PostQuery) -> Result<PostsPage> {
        let posts = self.posts.read().await;
        let matching = posts
            .values()
            .filter(|p| query.post_id.as_ref().is_none_or(|id| &p.id == id))
            .filter(|p| {
                query
                    .user_id
                    .as_ref()
                    .is_none_or(|uid| p.user_id.as_ref() == Some(uid))
            })
            .cloned()
            .collect();
        Ok(PostsPage {
            posts: matching,
            total_posts: posts.len() as u64,
            last_month_posts: 0,
        })
    }

    async fn update_post(&self, post_id: &str, actor_id: &str, post: &Post) -> Result<Post> {
        *self.last_update.write().await =
            Some((post_id.to_string(), actor_id.to_string(), post.clone()));

        if let Some(err) = self.update_error.read().await.clone() {
            return Err(err);
        }

        let mut posts = self.posts.write().await;
        let Some(stored) = posts.get_mut(post_id) else {
            return Err(ProviderError::NotFound {
                service: "mock".into(),
                resource: post_id.to_string(),
            });
        };
        let slug = stored.slug.clone();
        *stored = Post {
            slug,
            ..post.clone()
        };
        Ok(stored.clone())
    }
}

// ===== MockStorage =====

pub struct MockStorage {
    upload_error: RwLock<Option<ProviderError>>,
    url_fails: RwLock<bool>,
    hang: RwLock<bool>,
    uploaded: RwLock<Vec<String>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self {
            upload_error: RwLock::new(None),
            url_fails: RwLock::new(false),
            hang: RwLock::new(false),
            uploaded: RwLock::new(Vec::new()),
        }
    }

    pub async fn fail_uploads_with(&self, err: ProviderError) {
        *self.upload_error.write().await = Some(err);
    }

    pub async fn fail_download_urls(&self) {
        *self.url_fails.write().await = true;
    }

    /// 上传永不完成（用于取消测试）
    pub async fn hang_uploads(&self) {
        *self.hang.write().await = true;
    }

    pub async fn uploaded_keys(&self) -> Vec<String> {
        self.uploaded.read().await.clone()
    }
}

#[async_trait]
impl ObjectStorage for MockStorage {
    fn id(&self) -> &'static str {
        "mock-storage"
    }

    async fn upload_resumable(
        &self,
        request: &UploadRequest,
        progress: &UnboundedSender<UploadSnapshot>,
    ) -> Result<StoredObject> {
        let total = request.total_bytes();
        let _ = progress.send(UploadSnapshot {
            bytes_transferred: 0,
            total_bytes: total,
        });

        if *self.hang.read().await {
            std::future::pending::<()>().await;
        }
        if let Some(err) = self.upload_error.read().await.clone() {
            return Err(err);
        }

        for done in [total / 2, total] {
            let _ = progress.send(UploadSnapshot {
                bytes_transferred: done,
                total_bytes: total,
            });
        }
        self.uploaded.write().await.push(request.key.clone());
        Ok(StoredObject {
            bucket: "mock-bucket".into(),
            name: request.key.clone(),
            download_tokens: Some("tok".into()),
            ..StoredObject::default()
        })
    }

    async fn download_url(&self, object: &StoredObject) -> Result<String> {
        if *self.url_fails.read().await {
            return Err(ProviderError::NetworkError {
                service: "mock-storage".into(),
                detail: "metadata lookup failed".into(),
            });
        }
        Ok(format!("https://files.test/{}", object.name))
    }
}

// ===== 工厂方法 =====

/// 创建测试用 ServiceContext
pub fn create_test_context(
    post_api: Arc<MockPostApi>,
    storage: Option<Arc<MockStorage>>,
) -> Arc<ServiceContext> {
    let storage = storage.unwrap_or_else(|| Arc::new(MockStorage::new()));
    Arc::new(ServiceContext::new(post_api, storage))
}

pub fn sample_post(id: &str, slug: &str) -> Post {
    Post {
        id: id.to_string(),
        title: Some(format!("Title of {id}")),
        content: Some("<p>body</p>".to_string()),
        slug: Some(slug.to_string()),
        ..Post::default()
    }
}

/// 在独立临时目录中写入指定大小的文件，文件名保持不变
pub fn temp_image(name: &str, size: usize) -> PathBuf {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let dir = std::env::temp_dir().join(format!(
        "blog-admin-core-test-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, vec![0xAB_u8; size]).unwrap();
    path
}
