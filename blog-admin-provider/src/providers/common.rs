//! 客户端公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};

// ============ HTTP Client ============

/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// 幂等请求（GET / 上传状态查询）的默认重试次数
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(service: &str, request_timeout: Duration) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .build()
        .map_err(|e| ProviderError::NetworkError {
            service: service.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URL 处理 ============

/// 去掉 base URL 末尾的 `/`，便于与以 `/` 开头的路径拼接
pub fn normalize_base_url(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

/// 拼接路径段，每段单独做百分号编码
/// 如: `["updatepost", "a b", "u1"]` -> `"/updatepost/a%20b/u1"`
pub fn encode_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| format!("/{}", urlencoding::encode(s)))
        .collect()
}

/// 构造查询字符串（含前导 `?`）；没有参数时返回空串
pub fn encode_query(pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("?{joined}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_removed() {
        assert_eq!(normalize_base_url("http://localhost:3000/"), "http://localhost:3000");
        assert_eq!(normalize_base_url("http://localhost:3000"), "http://localhost:3000");
    }

    #[test]
    fn path_segments_are_encoded() {
        assert_eq!(
            encode_path(&["api", "post", "updatepost", "a b", "u/1"]),
            "/api/post/updatepost/a%20b/u%2F1"
        );
    }

    #[test]
    fn query_encoding() {
        assert_eq!(encode_query(&[]), "");
        assert_eq!(
            encode_query(&[("postId", "65f0".to_string()), ("searchTerm", "a&b".to_string())]),
            "?postId=65f0&searchTerm=a%26b"
        );
    }
}
