//! Resumable upload session and the ObjectStorage trait implementation

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::error::{ProviderError, Result};
use crate::http_client::{HttpResponse, HttpUtils, retry_delay};
use crate::traits::{ObjectStorage, ServiceErrorMapper};
use crate::types::{StoredObject, UploadRequest, UploadSnapshot};

use super::FirebaseStorage;
use super::error::raw_error;
use super::protocol::{
    ChunkPlan, HEADER_COMMAND, HEADER_CONTENT_LENGTH, HEADER_CONTENT_TYPE, HEADER_OFFSET,
    HEADER_PROTOCOL, HEADER_SESSION_URL, SessionStatus, UploadCommand, download_url, object_url,
    size_received, start_url,
};

/// Where an upload session stands after a chunk or a status query.
#[derive(Debug)]
enum SessionProgress {
    /// Bytes persisted by the server so far.
    Active(u64),
    /// The object is complete.
    Final(StoredObject),
}

impl FirebaseStorage {
    fn upload_failed(&self, key: &str, detail: impl Into<String>) -> ProviderError {
        ProviderError::UploadFailed {
            service: self.service_name().to_string(),
            key: key.to_string(),
            detail: detail.into(),
        }
    }

    /// 非 2xx 响应转换为错误
    fn ensure_success(&self, response: HttpResponse, key: &str) -> Result<HttpResponse> {
        if response.is_success() {
            Ok(response)
        } else {
            log::error!(
                "[{}] HTTP {} for {key}",
                self.service_name(),
                response.status
            );
            Err(self.map_error(raw_error(response.status, &response.body), key))
        }
    }

    /// Object metadata, with name and bucket filled in when the backend omits them.
    fn parse_object(&self, body: &str, key: &str) -> Result<StoredObject> {
        let mut object: StoredObject = HttpUtils::parse_json(body, self.service_name())?;
        if object.name.is_empty() {
            object.name = key.to_string();
        }
        if object.bucket.is_empty() {
            object.bucket.clone_from(&self.config.storage_bucket);
        }
        Ok(object)
    }

    fn session_progress(
        &self,
        response: &HttpResponse,
        request: &UploadRequest,
        acknowledged: Option<u64>,
    ) -> Result<SessionProgress> {
        match SessionStatus::from_response(response) {
            SessionStatus::Final => self
                .parse_object(&response.body, &request.key)
                .map(SessionProgress::Final),
            SessionStatus::Active => {
                let received = size_received(response)
                    .or(acknowledged)
                    .ok_or_else(|| self.upload_failed(&request.key, "server did not report received size"))?;
                if received > request.total_bytes() {
                    return Err(self.upload_failed(
                        &request.key,
                        format!("server reports {received} bytes of {}", request.total_bytes()),
                    ));
                }
                Ok(SessionProgress::Active(received))
            }
            SessionStatus::Cancelled => {
                Err(self.upload_failed(&request.key, "upload session was cancelled"))
            }
            SessionStatus::Missing | SessionStatus::Other => Err(self.upload_failed(
                &request.key,
                "unexpected upload session status",
            )),
        }
    }

    /// Open a session and return its URL.
    async fn start_session(&self, request: &UploadRequest) -> Result<String> {
        let url = start_url(&self.host, &self.config.storage_bucket, &request.key);
        let metadata = serde_json::json!({
            "name": request.key,
            "contentType": request.content_type,
        });
        let builder = self
            .decorate(self.client.post(&url))
            .header(HEADER_PROTOCOL, "resumable")
            .header(HEADER_COMMAND, UploadCommand::Start.as_header())
            .header(HEADER_CONTENT_LENGTH, request.total_bytes().to_string())
            .header(HEADER_CONTENT_TYPE, &request.content_type)
            .header("Content-Type", "application/json; charset=utf-8")
            .body(metadata.to_string());

        let response = HttpUtils::execute_request_with_retry(
            builder,
            self.service_name(),
            "POST",
            &url,
            self.max_retries,
        )
        .await?;
        let response = self.ensure_success(response, &request.key)?;

        response
            .header(HEADER_SESSION_URL)
            .map(str::to_string)
            .ok_or_else(|| self.upload_failed(&request.key, "missing upload session URL"))
    }

    /// Send one chunk. Not retried here: the caller resumes through [`Self::query_session`].
    async fn send_chunk(
        &self,
        session_url: &str,
        request: &UploadRequest,
        plan: ChunkPlan,
    ) -> Result<SessionProgress> {
        // ChunkPlan never exceeds the request length
        #[allow(clippy::cast_possible_truncation)]
        let bytes = request.bytes[plan.start as usize..plan.end as usize].to_vec();
        let builder = self
            .decorate(self.client.post(session_url))
            .header(HEADER_PROTOCOL, "resumable")
            .header(HEADER_COMMAND, plan.command().as_header())
            .header(HEADER_OFFSET, plan.start.to_string())
            .body(bytes);

        let response =
            HttpUtils::execute_request(builder, self.service_name(), "POST", session_url).await?;
        let response = self.ensure_success(response, &request.key)?;
        self.session_progress(&response, request, Some(plan.end))
    }

    /// Ask the server how much of the object it has.
    async fn query_session(
        &self,
        session_url: &str,
        request: &UploadRequest,
    ) -> Result<SessionProgress> {
        let builder = self
            .decorate(self.client.post(session_url))
            .header(HEADER_PROTOCOL, "resumable")
            .header(HEADER_COMMAND, UploadCommand::Query.as_header());

        let response = HttpUtils::execute_request_with_retry(
            builder,
            self.service_name(),
            "POST",
            session_url,
            self.max_retries,
        )
        .await?;
        let response = self.ensure_success(response, &request.key)?;
        self.session_progress(&response, request, None)
    }

    /// Fetch object metadata.
    async fn object_metadata(&self, bucket: &str, key: &str) -> Result<StoredObject> {
        let url = object_url(&self.host, bucket, key);
        let builder = self.decorate(self.client.get(&url));
        let response = HttpUtils::execute_request_with_retry(
            builder,
            self.service_name(),
            "GET",
            &url,
            self.max_retries,
        )
        .await?;
        let response = self.ensure_success(response, key)?;
        self.parse_object(&response.body, key)
    }
}

#[async_trait]
impl ObjectStorage for FirebaseStorage {
    fn id(&self) -> &'static str {
        "firebase-storage"
    }

    async fn upload_resumable(
        &self,
        request: &UploadRequest,
        progress: &UnboundedSender<UploadSnapshot>,
    ) -> Result<StoredObject> {
        let total = request.total_bytes();
        let mut reported = 0_u64;
        let report = |bytes_transferred: u64| {
            // 接收端关闭只意味着没人再看进度
            let _ = progress.send(UploadSnapshot {
                bytes_transferred,
                total_bytes: total,
            });
        };

        report(0);
        log::info!(
            "[{}] Uploading {} ({total} bytes, {})",
            self.service_name(),
            request.key,
            request.content_type
        );

        let session_url = self.start_session(request).await?;
        let mut offset = 0_u64;
        let mut failures = 0_u32;
        let mut stalls = 0_u32;

        loop {
            let plan = ChunkPlan::next(offset, total, self.chunk_size);
            let step = match self.send_chunk(&session_url, request, plan).await {
                Ok(step) => {
                    failures = 0;
                    step
                }
                Err(e) if e.is_transient() && failures < self.max_retries => {
                    let delay = retry_delay(&e, failures);
                    failures += 1;
                    log::warn!(
                        "[{}] Chunk at offset {} failed ({failures}/{}), resuming in {:.1}s: {e}",
                        self.service_name(),
                        plan.start,
                        self.max_retries,
                        delay.as_secs_f32()
                    );
                    tokio::time::sleep(delay).await;
                    self.query_session(&session_url, request).await?
                }
                Err(e) => return Err(e),
            };

            match step {
                SessionProgress::Final(object) => {
                    report(total);
                    log::info!("[{}] Upload of {} finalized", self.service_name(), object.name);
                    return Ok(object);
                }
                SessionProgress::Active(received) => {
                    if received <= offset {
                        stalls += 1;
                        if stalls > self.max_retries {
                            return Err(self.upload_failed(
                                &request.key,
                                format!("no progress past offset {offset}"),
                            ));
                        }
                    } else {
                        stalls = 0;
                    }
                    offset = received;
                    if offset > reported {
                        reported = offset;
                        report(reported);
                    }
                }
            }
        }
    }

    async fn download_url(&self, object: &StoredObject) -> Result<String> {
        let bucket = if object.bucket.is_empty() {
            self.config.storage_bucket.as_str()
        } else {
            object.bucket.as_str()
        };

        let token = match object.first_download_token() {
            Some(token) => token.to_string(),
            None => {
                let metadata = self.object_metadata(bucket, &object.name).await?;
                metadata
                    .first_download_token()
                    .map(str::to_string)
                    .ok_or_else(|| self.upload_failed(&object.name, "no download token issued"))?
            }
        };

        Ok(download_url(&self.host, bucket, &object.name, &token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FirebaseConfig;
    use reqwest::header::{HeaderMap, HeaderValue};

    fn storage() -> FirebaseStorage {
        FirebaseStorage::new(FirebaseConfig::default()).unwrap()
    }

    fn response(status: &'static str, received: Option<&'static str>, body: &str) -> HttpResponse {
        let mut headers = HeaderMap::new();
        headers.insert("x-goog-upload-status", HeaderValue::from_static(status));
        if let Some(r) = received {
            headers.insert("x-goog-upload-size-received", HeaderValue::from_static(r));
        }
        HttpResponse {
            status: 200,
            headers,
            body: body.to_string(),
        }
    }

    #[test]
    fn final_response_yields_object_with_defaults() {
        let s = storage();
        let req = UploadRequest::new("1700-a.png", vec![0; 4]);
        let r = response("final", None, r#"{"name":"","downloadTokens":"t1"}"#);
        match s.session_progress(&r, &req, Some(4)).unwrap() {
            SessionProgress::Final(obj) => {
                assert_eq!(obj.name, "1700-a.png");
                assert_eq!(obj.bucket, "mern-blog-ae30c.appspot.com");
                assert_eq!(obj.first_download_token(), Some("t1"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn active_response_prefers_server_count() {
        let s = storage();
        let req = UploadRequest::new("a.png", vec![0; 1000]);
        let r = response("active", Some("300"), "");
        assert!(matches!(
            s.session_progress(&r, &req, Some(512)).unwrap(),
            SessionProgress::Active(300)
        ));
        let r = response("active", None, "");
        assert!(matches!(
            s.session_progress(&r, &req, Some(512)).unwrap(),
            SessionProgress::Active(512)
        ));
        assert!(s.session_progress(&r, &req, None).is_err());
    }

    #[test]
    fn oversized_or_cancelled_sessions_fail() {
        let s = storage();
        let req = UploadRequest::new("a.png", vec![0; 10]);
        let r = response("active", Some("11"), "");
        assert!(matches!(
            s.session_progress(&r, &req, None),
            Err(ProviderError::UploadFailed { .. })
        ));
        let r = response("cancelled", None, "");
        assert!(matches!(
            s.session_progress(&r, &req, None),
            Err(ProviderError::UploadFailed { .. })
        ));
    }

    #[tokio::test]
    async fn download_url_uses_known_token_without_network() {
        let s = storage().with_host("http://127.0.0.1:9199/");
        let obj = StoredObject {
            bucket: String::new(),
            name: "1700-cat.png".into(),
            download_tokens: Some("abc".into()),
            ..StoredObject::default()
        };
        assert_eq!(
            s.download_url(&obj).await.unwrap(),
            "http://127.0.0.1:9199/v0/b/mern-blog-ae30c.appspot.com/o/1700-cat.png?alt=media&token=abc"
        );
    }
}
