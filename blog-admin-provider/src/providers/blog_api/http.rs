//! Blog API HTTP 请求方法

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::{HttpResponse, HttpUtils};
use crate::providers::common::encode_query;
use crate::traits::{RawApiError, ServiceErrorMapper};

use super::{RestPostApi, SERVICE_NAME, SESSION_COOKIE};

impl RestPostApi {
    /// 附加会话 cookie
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.session_token {
            Some(token) => builder.header("Cookie", format!("{SESSION_COOKIE}={token}")),
            None => builder,
        }
    }

    /// 非 2xx 响应转换为错误，2xx 解析为 `T`
    fn read_response<T: DeserializeOwned>(&self, response: HttpResponse, resource: &str) -> Result<T> {
        if !response.is_success() {
            let message = HttpUtils::error_message(&response.body).unwrap_or_default();
            log::error!("[{SERVICE_NAME}] API error (HTTP {}): {message}", response.status);
            return Err(self.map_error(RawApiError::new(response.status, message), resource));
        }
        HttpUtils::parse_json(&response.body, SERVICE_NAME)
    }

    /// 执行 GET 请求（幂等，失败时按退避策略重试）
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> Result<T> {
        let url = format!("{}{path}{}", self.base_url, encode_query(query));
        let builder = self.authorize(self.client.get(&url));
        let response = HttpUtils::execute_request_with_retry(
            builder,
            SERVICE_NAME,
            "GET",
            &url,
            self.max_retries,
        )
        .await?;
        self.read_response(response, resource)
    }

    /// 执行 PUT 请求（不重试）
    ///
    /// 429 和网关错误同样走 `read_response`，服务端给出的 `message` 原样保留
    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        resource: &str,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let payload = serde_json::to_string(body).map_err(|e| self.serialization_error(e))?;
        let builder = self
            .authorize(self.client.put(&url))
            .header("Content-Type", "application/json")
            .body(payload);
        let response = HttpUtils::send_request(builder, SERVICE_NAME, "PUT", &url).await?;
        self.read_response(response, resource)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::error::ProviderError;
    use crate::traits::PostApi;
    use crate::types::Post;

    use super::RestPostApi;

    /// 单次应答的本地服务器，返回其 base URL
    async fn answer_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0_u8; 16 * 1024];
            let _ = socket.read(&mut buf).await;
            let reply = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}")
    }

    async fn update_with(status_line: &'static str, body: &'static str) -> ProviderError {
        let base = answer_once(status_line, body).await;
        let api = RestPostApi::new(&base).unwrap();
        api.update_post("p1", "u1", &Post::default())
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn update_keeps_server_message_on_gateway_error() {
        let err = update_with("503 Service Unavailable", r#"{"message":"Try later"}"#).await;
        assert!(
            matches!(&err, ProviderError::Rejected { status: 503, message, .. } if message == "Try later"),
            "unexpected: {err:?}"
        );
    }

    #[tokio::test]
    async fn update_keeps_server_message_on_rate_limit() {
        let err = update_with("429 Too Many Requests", r#"{"message":"Slow down"}"#).await;
        assert!(
            matches!(&err, ProviderError::Rejected { status: 429, message, .. } if message == "Slow down"),
            "unexpected: {err:?}"
        );
    }

    #[tokio::test]
    async fn update_without_message_stays_transient() {
        let err = update_with("502 Bad Gateway", "<html>bad gateway</html>").await;
        assert!(err.is_transient(), "unexpected: {err:?}");
    }
}
