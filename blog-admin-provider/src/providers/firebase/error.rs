//! Firebase Storage error mapping

use serde::Deserialize;

use crate::error::ProviderError;
use crate::traits::{RawApiError, ServiceErrorMapper};

use super::FirebaseStorage;

/// Error body: `{ "error": { "code": 403, "message": "..." } }`
#[derive(Debug, Deserialize)]
struct FirebaseErrorBody {
    error: FirebaseErrorDetail,
}

#[derive(Debug, Deserialize)]
struct FirebaseErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Build a [`RawApiError`] from a non-2xx storage response.
pub(crate) fn raw_error(status: u16, body: &str) -> RawApiError {
    match serde_json::from_str::<FirebaseErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(code) => RawApiError::with_code(status, code, parsed.error.message),
            None => RawApiError::new(status, parsed.error.message),
        },
        Err(_) => RawApiError::new(status, body.trim()),
    }
}

/// Reference: <https://firebase.google.com/docs/storage/web/handle-errors>
impl ServiceErrorMapper for FirebaseStorage {
    fn service_name(&self) -> &'static str {
        "firebase-storage"
    }

    fn map_error(&self, raw: RawApiError, resource: &str) -> ProviderError {
        match raw.status {
            // storage/unauthenticated, storage/unauthorized
            401 | 403 => ProviderError::PermissionDenied {
                service: self.service_name().to_string(),
                raw_message: Some(raw.message),
            },
            // storage/object-not-found, storage/bucket-not-found
            404 => ProviderError::NotFound {
                service: self.service_name().to_string(),
                resource: resource.to_string(),
            },
            // 400: bad offset or metadata, 410: session expired,
            // 412: quota or precondition, 499: cancelled server-side
            400..=499 => ProviderError::UploadFailed {
                service: self.service_name().to_string(),
                key: resource.to_string(),
                detail: format!("HTTP {}: {}", raw.status, raw.message),
            },
            _ => self.unknown_error(raw),
        }
    }
}
