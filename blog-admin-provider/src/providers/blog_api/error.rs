//! Blog API error mapping

use crate::error::ProviderError;
use crate::traits::{RawApiError, ServiceErrorMapper};

use super::{RestPostApi, SERVICE_NAME};

/// The blog API answers errors with `{ success: false, statusCode, message }`.
/// The message is written for end users, so any error that carries one is
/// surfaced as `Rejected` and shown as-is.
impl ServiceErrorMapper for RestPostApi {
    fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }

    fn map_error(&self, raw: RawApiError, resource: &str) -> ProviderError {
        if !raw.message.trim().is_empty() {
            return ProviderError::Rejected {
                service: self.service_name().to_string(),
                status: raw.status,
                message: raw.message,
            };
        }

        match raw.status {
            401 | 403 => ProviderError::PermissionDenied {
                service: self.service_name().to_string(),
                raw_message: None,
            },
            404 => ProviderError::NotFound {
                service: self.service_name().to_string(),
                resource: resource.to_string(),
            },
            429 => ProviderError::RateLimited {
                service: self.service_name().to_string(),
                retry_after: None,
                raw_message: None,
            },
            502..=504 => ProviderError::NetworkError {
                service: self.service_name().to_string(),
                detail: format!("HTTP {}", raw.status),
            },
            _ => self.unknown_error(raw),
        }
    }
}
