//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use blog_admin_provider::ProviderError;

/// Shown when no image file was chosen before uploading.
pub const MSG_SELECT_IMAGE: &str = "Please select an image";
/// Shown for any failure of the upload transfer itself.
pub const MSG_UPLOAD_FAILED: &str = "Image upload failed";
/// Shown when the object was stored but no public URL could be obtained.
pub const MSG_URL_UNAVAILABLE: &str = "Image uploaded but its download URL could not be resolved";
/// Shown when the requested post does not exist.
pub const MSG_POST_NOT_FOUND: &str = "Post not found";
/// Fallback for failures without a server-supplied message.
pub const MSG_SOMETHING_WRONG: &str = "Something went wrong";

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// An upload is already running for this form
    #[error("An upload is already in progress")]
    UploadInProgress,

    /// The upload transfer failed (file read, session, chunk)
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// The object was stored but its download URL could not be resolved
    #[error("Download URL unavailable: {0}")]
    DownloadUrlUnavailable(String),

    /// Post not found
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// The server answered with something we could not use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The operation was cancelled because its screen went away
    #[error("Operation cancelled")]
    Cancelled,

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_)
            | Self::UploadInProgress
            | Self::PostNotFound(_)
            | Self::Cancelled => true,
            Self::Provider(e) => e.is_expected(),
            _ => false,
        }
    }

    /// Text shown to the user for this error.
    ///
    /// Messages written by the blog API are passed through verbatim; every other
    /// failure maps to a fixed string.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::UploadInProgress => self.to_string(),
            Self::UploadFailed(_) => MSG_UPLOAD_FAILED.to_string(),
            Self::DownloadUrlUnavailable(_) => MSG_URL_UNAVAILABLE.to_string(),
            Self::PostNotFound(_) | Self::Provider(ProviderError::NotFound { .. }) => {
                MSG_POST_NOT_FOUND.to_string()
            }
            Self::Provider(ProviderError::Rejected { message, .. }) => message.clone(),
            Self::InvalidResponse(_) | Self::Cancelled | Self::Provider(_) => {
                MSG_SOMETHING_WRONG.to_string()
            }
        }
    }

    /// Log at `warn` or `error` depending on [`is_expected`](Self::is_expected).
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
