//! # blog-admin-provider
//!
//! Clients for the two remote collaborators of the blog admin: the blog's own
//! REST API and Firebase Storage.
//!
//! ## Clients
//!
//! | Service | Type | Auth |
//! |---------|------|------|
//! | Blog REST API | [`RestPostApi`] implements [`PostApi`] | `access_token` session cookie |
//! | [Firebase Storage](https://firebase.google.com/docs/storage) | [`FirebaseStorage`] implements [`ObjectStorage`] | App id, optional Firebase ID token |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blog_admin_provider::{
//!     FirebaseConfig, FirebaseStorage, ObjectStorage, PostApi, RestPostApi, UploadRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = RestPostApi::new("http://localhost:3000")?
//!         .with_session_token(Some("session-cookie".to_string()));
//!     let mut post = api.get_post("65f0c0ffee").await?;
//!
//!     let storage = FirebaseStorage::new(FirebaseConfig::default())?;
//!     let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
//!     let request = UploadRequest::new("1718000000000-cover.png", std::fs::read("cover.png")?);
//!     let upload = storage.upload_resumable(&request, &tx);
//!     tokio::spawn(async move {
//!         while let Some(s) = rx.recv().await {
//!             println!("{}/{}", s.bytes_transferred, s.total_bytes);
//!         }
//!     });
//!     let object = upload.await?;
//!     post.image = Some(storage.download_url(&object).await?);
//!
//!     let saved = api.update_post(&post.id, "user-id", &post).await?;
//!     println!("/post/{}", saved.slug.unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::Rejected`] — the blog API refused the request with a message of its own
//! - [`ProviderError::UploadFailed`] — the storage backend aborted an upload session
//! - [`ProviderError::RateLimited`] — too many requests (retryable)
//! - [`ProviderError::NetworkError`] — network connectivity issue (retryable)
//!
//! Idempotent requests retry transient errors with exponential backoff; an
//! interrupted upload chunk is resumed from the server's last offset.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export public traits only (internal traits are not exported)
pub use traits::{ObjectStorage, PostApi};

// Re-export types
pub use types::{
    FirebaseConfig, Post, PostQuery, PostsPage, StoredObject, UploadRequest,
    UploadSnapshot, content_type_for,
};

// Re-export utils module
pub use utils::datetime;

// Re-export concrete clients
pub use providers::{DEFAULT_CHUNK_SIZE, FIREBASE_STORAGE_HOST, FirebaseStorage, RestPostApi};
