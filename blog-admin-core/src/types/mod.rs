//! 类型定义模块

mod actor;
mod draft;
mod route;
mod upload;

pub use actor::Actor;
pub use draft::DraftPost;
pub use route::{Route, Tab, TabRouter};
pub use upload::{PendingUpload, StorageKey, UploadOutcome, UploadStatus, progress_percent};

// Re-export provider 库的公共类型
pub use blog_admin_provider::{Post, PostQuery, PostsPage, StoredObject, UploadSnapshot};
