//! Generic HTTP client tools
//!
//! Reusable request processing shared by the blog API client and the storage
//! client. Each client still builds its own `RequestBuilder` (headers, auth,
//! body); this module only sends, logs and reads.
//!
//! # design principles
//! - **Transport errors are classified once** - timeouts vs. network errors vs. 429/5xx
//! - **Response headers stay available** - the resumable upload protocol lives in headers
//! - **Retry is opt-in** - only idempotent calls go through `execute_request_with_retry`

use reqwest::RequestBuilder;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::{redact_query, truncate_for_log};

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body as text.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Header value as `&str`, if present and valid ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Sends a request and reads the whole response, whatever its status
    ///
    /// Only transport failures become errors. Callers that must see the body
    /// of a 429 or a gateway error (non-retried writes) use this directly.
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` - any status
    /// * `Err(ProviderError::NetworkError | Timeout)` - transport failure
    pub async fn send_request(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
        url: &str,
    ) -> Result<HttpResponse, ProviderError> {
        log::debug!("[{service}] {method_name} {}", redact_query(url));

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        log::debug!("[{service}] Response Status: {status}");

        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                service: service.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{service}] Response Body: {}", truncate_for_log(&body));

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    /// Performs an HTTP request and returns the whole response
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `service` - remote collaborator name (for logging and errors)
    /// * `method_name` - request method name (such as "GET", "PUT", used for logs)
    /// * `url` - target URL (query string is redacted in logs)
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` - any status other than 429/502/503/504
    /// * `Err(ProviderError::RateLimited)` - HTTP 429
    /// * `Err(ProviderError::NetworkError | Timeout)` - transport failure or gateway errors
    pub async fn execute_request(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
        url: &str,
    ) -> Result<HttpResponse, ProviderError> {
        let response = Self::send_request(request_builder, service, method_name, url).await?;
        classify_status(response, service)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ProviderError::ParseError)` - parsing failed
    pub fn parse_json<T>(body: &str, service: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(body).map_err(|e| {
            log::error!("[{service}] JSON parse failed: {e}");
            log::error!("[{service}] Raw response: {}", truncate_for_log(body));
            ProviderError::ParseError {
                service: service.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Extract the `message` field of an error body, if the body is JSON and has one.
    pub fn error_message(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }

    /// Performs an HTTP request with retries
    ///
    /// Only use this for idempotent requests (GET, status queries).
    ///
    /// # Retry strategy
    /// - Only transient errors are retried (`NetworkError`, `Timeout`, `RateLimited`)
    /// - Exponential backoff: 100ms, 200ms, 400ms, 800ms, ... (maximum 10 seconds)
    /// - `Retry-After` is honoured up to 30 seconds
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<HttpResponse, ProviderError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, service, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder can only be sent once
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[{service}] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, service, method_name, url).await;
            };

            match Self::execute_request(req, service, method_name, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && e.is_transient() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[{}] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        service,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::NetworkError {
            service: service.to_string(),
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Turns 429 and gateway statuses into transient errors so the retry loop sees them
fn classify_status(response: HttpResponse, service: &str) -> Result<HttpResponse, ProviderError> {
    let status = response.status;
    if status == 429 {
        let retry_after = response
            .header("retry-after")
            .and_then(|v| v.parse::<u64>().ok());
        log::warn!("[{service}] Rate limited (HTTP 429), retry_after={retry_after:?}");
        return Err(ProviderError::RateLimited {
            service: service.to_string(),
            retry_after,
            raw_message: Some(response.body),
        });
    }

    if matches!(status, 502..=504) {
        log::warn!("[{service}] Gateway error (HTTP {status})");
        return Err(ProviderError::NetworkError {
            service: service.to_string(),
            detail: format!("HTTP {status}: {}", truncate_for_log(&response.body)),
        });
    }

    Ok(response)
}

/// Calculate retry delay
///
/// `RateLimited` with `retry_after` waits that long (capped at 30s);
/// everything else uses exponential backoff.
pub(crate) fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// Exponential backoff: 100ms, 200ms, 400ms, ... capped at 10 seconds
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
