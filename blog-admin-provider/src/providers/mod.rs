//! Remote collaborator implementations

/// Shared utilities used by the clients.
pub mod common;

mod blog_api;
mod firebase;

pub use blog_api::RestPostApi;
pub use firebase::{DEFAULT_CHUNK_SIZE, FIREBASE_STORAGE_HOST, FirebaseStorage};
