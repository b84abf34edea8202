use serde::{Deserialize, Serialize};

/// Unified error type for every remote call made by this crate.
///
/// Each variant carries a `service` field naming the remote collaborator that
/// produced it (`"blog-api"` or `"firebase-storage"`), plus variant-specific
/// context. All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError) — network connectivity issues
/// - [`Timeout`](Self::Timeout) — request timed out
/// - [`RateLimited`](Self::RateLimited) — too many requests
///
/// The built-in HTTP client retries these with exponential backoff for
/// idempotent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The remote side asked us to slow down (HTTP 429).
    RateLimited {
        /// Service that produced the error.
        service: String,
        /// Suggested wait time in seconds, if the server sent `Retry-After`.
        retry_after: Option<u64>,
        /// Raw response body, if any.
        raw_message: Option<String>,
    },

    /// The server answered with a non-success status and a message of its own.
    ///
    /// The blog API always sends `{ "message": "..." }` on failure; that text is
    /// meant to be shown to the user verbatim.
    Rejected {
        /// Service that produced the error.
        service: String,
        /// HTTP status code.
        status: u16,
        /// Message supplied by the server.
        message: String,
    },

    /// The requested resource does not exist.
    NotFound {
        /// Service that produced the error.
        service: String,
        /// Identifier of the missing resource.
        resource: String,
    },

    /// The caller is not allowed to perform the operation.
    PermissionDenied {
        /// Service that produced the error.
        service: String,
        /// Original error message, if available.
        raw_message: Option<String>,
    },

    /// The storage backend refused or aborted an upload session.
    UploadFailed {
        /// Service that produced the error.
        service: String,
        /// Storage key of the object being uploaded.
        key: String,
        /// Error details.
        detail: String,
    },

    /// Failed to parse a response.
    ParseError {
        /// Service that produced the error.
        service: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Service that produced the error.
        service: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// Catch-all for responses not mapped to a specific variant.
    Unknown {
        /// Service that produced the error.
        service: String,
        /// Raw error code, if available.
        raw_code: Option<String>,
        /// Raw error message.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Rejected { .. } | Self::NotFound { .. } | Self::PermissionDenied { .. }
        )
    }

    /// Whether the failure is transient and the same request may succeed later.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// Name of the remote collaborator that produced this error.
    #[must_use]
    pub fn service(&self) -> &str {
        match self {
            Self::NetworkError { service, .. }
            | Self::Timeout { service, .. }
            | Self::RateLimited { service, .. }
            | Self::Rejected { service, .. }
            | Self::NotFound { service, .. }
            | Self::PermissionDenied { service, .. }
            | Self::UploadFailed { service, .. }
            | Self::ParseError { service, .. }
            | Self::SerializationError { service, .. }
            | Self::Unknown { service, .. } => service,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { service, detail } => {
                write!(f, "[{service}] Network error: {detail}")
            }
            Self::Timeout { service, detail } => {
                write!(f, "[{service}] Request timeout: {detail}")
            }
            Self::RateLimited {
                service,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{service}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{service}] Rate limited")
                }
            }
            Self::Rejected {
                service,
                status,
                message,
            } => {
                write!(f, "[{service}] HTTP {status}: {message}")
            }
            Self::NotFound { service, resource } => {
                write!(f, "[{service}] '{resource}' not found")
            }
            Self::PermissionDenied {
                service,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{service}] Permission denied: {msg}")
                } else {
                    write!(f, "[{service}] Permission denied")
                }
            }
            Self::UploadFailed {
                service,
                key,
                detail,
            } => {
                write!(f, "[{service}] Upload of '{key}' failed: {detail}")
            }
            Self::ParseError { service, detail } => {
                write!(f, "[{service}] Parse error: {detail}")
            }
            Self::SerializationError { service, detail } => {
                write!(f, "[{service}] Serialization error: {detail}")
            }
            Self::Unknown {
                service,
                raw_message,
                ..
            } => {
                write!(f, "[{service}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
