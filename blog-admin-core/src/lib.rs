//! Blog Admin Core Library
//!
//! Screen-level business logic for the blog administration client:
//! - Post loading, listing and update submission (`PostService`)
//! - Image upload with progress tracking and download URL resolution (`UploadService`)
//! - The update-post form state machine (`EditorForm`)
//! - Dashboard tab routing and in-app routes (`TabRouter`, `Route`)
//!
//! This library is UI-independent: remote collaborators are injected through
//! the provider traits, and every async operation can be scoped to a screen
//! lifetime with `ScreenScope`.

pub mod editor;
pub mod error;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use editor::EditorForm;
pub use error::{CoreError, CoreResult};
pub use services::{PostService, ScreenScope, ServiceContext, UploadService, run_scoped};
