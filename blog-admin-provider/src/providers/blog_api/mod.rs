//! Blog REST API client

mod error;
mod http;
mod provider;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{
    DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS, create_http_client, normalize_base_url,
};

/// 服务标识符
pub(crate) const SERVICE_NAME: &str = "blog-api";
/// 会话 cookie 名
pub(crate) const SESSION_COOKIE: &str = "access_token";

/// 博客 REST API 客户端
///
/// 会话令牌以 `access_token` cookie 的形式随每个请求发送，
/// 与浏览器登录后的行为一致。
pub struct RestPostApi {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) session_token: Option<String>,
    pub(crate) max_retries: u32,
}

impl RestPostApi {
    /// 创建客户端
    ///
    /// `base_url` 为服务端根地址（如 `http://localhost:3000`），末尾的 `/` 会被去掉。
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: create_http_client(
                SERVICE_NAME,
                Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            )?,
            base_url: normalize_base_url(base_url),
            session_token: None,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// 设置会话令牌
    #[must_use]
    pub fn with_session_token(mut self, token: Option<String>) -> Self {
        self.session_token = token.filter(|t| !t.is_empty());
        self
    }

    /// 设置 GET 请求的重试次数（0 表示不重试）
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// 服务端根地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
