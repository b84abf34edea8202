//! Firebase Storage client
//!
//! Talks to the Firebase Storage REST endpoint directly. Uploads always use
//! the resumable protocol so that progress can be reported per chunk and an
//! interrupted chunk can be resumed from the offset the server last saw.

mod error;
mod protocol;
mod upload;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::Result;
use crate::providers::common::{DEFAULT_MAX_RETRIES, create_http_client, normalize_base_url};
use crate::types::FirebaseConfig;

/// Production storage endpoint.
pub const FIREBASE_STORAGE_HOST: &str = "https://firebasestorage.googleapis.com";
/// Default chunk size (256 KiB, the protocol's granularity).
pub const DEFAULT_CHUNK_SIZE: u64 = 256 * 1024;
/// Per-request timeout for upload traffic.
const UPLOAD_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Firebase Storage client bound to one app configuration.
pub struct FirebaseStorage {
    pub(crate) client: Client,
    pub(crate) config: FirebaseConfig,
    pub(crate) host: String,
    pub(crate) auth_token: Option<String>,
    pub(crate) chunk_size: u64,
    pub(crate) max_retries: u32,
}

impl FirebaseStorage {
    /// Initialise the client from a web-app configuration.
    pub fn new(config: FirebaseConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(
                "firebase-storage",
                Duration::from_secs(UPLOAD_REQUEST_TIMEOUT_SECS),
            )?,
            config,
            host: FIREBASE_STORAGE_HOST.to_string(),
            auth_token: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Point the client at another host, e.g. the local emulator on `http://127.0.0.1:9199`.
    #[must_use]
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = normalize_base_url(host);
        self
    }

    /// Firebase Auth ID token sent as `Authorization: Firebase <token>`.
    #[must_use]
    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Chunk size in bytes.
    ///
    /// The server only accepts non-final chunks aligned to 256 KiB, so the
    /// value is rounded up to the next multiple of [`DEFAULT_CHUNK_SIZE`].
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = aligned_chunk_size(chunk_size);
        self
    }

    /// Number of retries for a failed chunk or metadata lookup.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// App configuration this client was initialised with.
    pub fn config(&self) -> &FirebaseConfig {
        &self.config
    }

    /// Headers common to every storage request.
    pub(crate) fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(protocol::HEADER_APP_ID, &self.config.app_id);
        match &self.auth_token {
            Some(token) => builder.header("Authorization", format!("Firebase {token}")),
            None => builder,
        }
    }
}

/// Rounds up to a positive multiple of [`DEFAULT_CHUNK_SIZE`].
fn aligned_chunk_size(chunk_size: u64) -> u64 {
    let chunks = chunk_size.div_ceil(DEFAULT_CHUNK_SIZE).max(1);
    chunks.saturating_mul(DEFAULT_CHUNK_SIZE)
}
