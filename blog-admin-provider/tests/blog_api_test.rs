//! Blog REST API 集成测试
//!
//! 运行方式:
//! ```bash
//! TEST_BLOG_API_URL=http://localhost:3000 TEST_SESSION_TOKEN=xxx TEST_ACTOR_ID=xxx TEST_POST_ID=xxx \
//!     cargo test -p blog-admin-provider --test blog_api_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use blog_admin_provider::{PostApi, PostQuery, ProviderError};
use common::BlogTestContext;

#[tokio::test]
#[ignore = "integration test: requires TEST_BLOG_API_URL, TEST_SESSION_TOKEN, TEST_ACTOR_ID and TEST_POST_ID"]
async fn test_get_post_by_id() {
    skip_if_no_env!("TEST_BLOG_API_URL", "TEST_SESSION_TOKEN", "TEST_ACTOR_ID", "TEST_POST_ID");

    let ctx = require_some!(BlogTestContext::from_env(), "创建测试上下文失败");
    let post = require_ok!(ctx.api.get_post(&ctx.post_id).await, "get_post 调用失败");
    assert_eq!(post.id, ctx.post_id);

    println!("✓ get_post 测试通过: {:?}", post.title);
}

#[tokio::test]
#[ignore = "integration test: requires TEST_BLOG_API_URL, TEST_SESSION_TOKEN, TEST_ACTOR_ID and TEST_POST_ID"]
async fn test_list_posts_by_author() {
    skip_if_no_env!("TEST_BLOG_API_URL", "TEST_SESSION_TOKEN", "TEST_ACTOR_ID", "TEST_POST_ID");

    let ctx = require_some!(BlogTestContext::from_env(), "创建测试上下文失败");
    let page = require_ok!(
        ctx.api.get_posts(&PostQuery::by_author(&ctx.actor_id)).await,
        "get_posts 调用失败"
    );
    assert!(
        page.posts
            .iter()
            .all(|p| p.user_id.as_deref() == Some(ctx.actor_id.as_str())),
        "只应返回该作者的文章"
    );

    println!("✓ get_posts 测试通过，共 {} 篇", page.total_posts);
}

#[tokio::test]
#[ignore = "integration test: requires TEST_BLOG_API_URL, TEST_SESSION_TOKEN, TEST_ACTOR_ID and TEST_POST_ID"]
async fn test_get_missing_post() {
    skip_if_no_env!("TEST_BLOG_API_URL", "TEST_SESSION_TOKEN", "TEST_ACTOR_ID", "TEST_POST_ID");

    let ctx = require_some!(BlogTestContext::from_env(), "创建测试上下文失败");
    let result = ctx.api.get_post("000000000000000000000000").await;
    assert!(
        matches!(result, Err(ProviderError::NotFound { .. })),
        "不存在的文章应返回 NotFound: {result:?}"
    );
}

#[tokio::test]
#[ignore = "integration test: requires TEST_BLOG_API_URL, TEST_SESSION_TOKEN, TEST_ACTOR_ID and TEST_POST_ID"]
async fn test_update_post_unchanged() {
    skip_if_no_env!("TEST_BLOG_API_URL", "TEST_SESSION_TOKEN", "TEST_ACTOR_ID", "TEST_POST_ID");

    let ctx = require_some!(BlogTestContext::from_env(), "创建测试上下文失败");
    let post = require_ok!(ctx.api.get_post(&ctx.post_id).await, "get_post 调用失败");
    let saved = require_ok!(
        ctx.api.update_post(&post.id, &ctx.actor_id, &post).await,
        "update_post 调用失败"
    );
    assert_eq!(saved.id, post.id);
    assert!(saved.slug.is_some(), "更新结果应包含 slug");

    println!("✓ update_post 测试通过: /post/{}", saved.slug.unwrap_or_default());
}

#[tokio::test]
#[ignore = "integration test: requires TEST_BLOG_API_URL, TEST_SESSION_TOKEN, TEST_ACTOR_ID and TEST_POST_ID"]
async fn test_update_post_as_wrong_actor_is_rejected() {
    skip_if_no_env!("TEST_BLOG_API_URL", "TEST_SESSION_TOKEN", "TEST_ACTOR_ID", "TEST_POST_ID");

    let ctx = require_some!(BlogTestContext::from_env(), "创建测试上下文失败");
    let post = require_ok!(ctx.api.get_post(&ctx.post_id).await, "get_post 调用失败");
    let result = ctx
        .api
        .update_post(&post.id, "000000000000000000000000", &post)
        .await;
    match result {
        Err(ProviderError::Rejected { message, .. }) => {
            assert!(!message.is_empty());
            println!("✓ 服务端拒绝: {message}");
        }
        other => panic!("应被服务端拒绝: {other:?}"),
    }
}
