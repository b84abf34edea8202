//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use blog_admin_provider::{FirebaseConfig, FirebaseStorage, RestPostApi};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的存储 key
pub fn unique_key(name: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("_test-{millis}-{name}")
}

/// 博客 API 测试上下文
pub struct BlogTestContext {
    pub api: RestPostApi,
    pub actor_id: String,
    pub post_id: String,
}

impl BlogTestContext {
    /// `TEST_BLOG_API_URL`、`TEST_SESSION_TOKEN`、`TEST_ACTOR_ID`、`TEST_POST_ID`
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("TEST_BLOG_API_URL").ok()?;
        let token = env::var("TEST_SESSION_TOKEN").ok()?;
        let actor_id = env::var("TEST_ACTOR_ID").ok()?;
        let post_id = env::var("TEST_POST_ID").ok()?;

        let api = RestPostApi::new(&base_url).ok()?.with_session_token(Some(token));
        Some(Self {
            api,
            actor_id,
            post_id,
        })
    }
}

/// 存储测试上下文
///
/// `TEST_FIREBASE_BUCKET` 必填；`TEST_FIREBASE_HOST` 可指向本地模拟器。
pub fn storage_from_env() -> Option<FirebaseStorage> {
    let bucket = env::var("TEST_FIREBASE_BUCKET").ok()?;
    let config = FirebaseConfig {
        storage_bucket: bucket,
        ..FirebaseConfig::default()
    };
    let storage = FirebaseStorage::new(config).ok()?;
    Some(match env::var("TEST_FIREBASE_HOST") {
        Ok(host) => storage.with_host(&host),
        Err(_) => storage,
    })
}
